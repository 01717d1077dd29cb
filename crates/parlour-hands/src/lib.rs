//! Hand games: rock-paper-scissors and its lizard-spock extension.
//!
//! Each game is a fixed rule table. A round is one player choice against one
//! uniformly random computer choice.

pub mod error;
pub mod hand;
pub mod wording;

pub use error::{HandsError, HandsResult};
pub use hand::{Hand, Variant, Verdict, computer_choice, judge, parse_choice};
pub use wording::Wording;
