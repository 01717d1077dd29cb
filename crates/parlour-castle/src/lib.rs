//! Castle exploration narrative engine.
//!
//! Rooms are drawn from an exhaustive random selector so that every room is
//! visited once before any repeats, and each visit narrates a clue paired
//! with a sensory impression drawn the same way.

pub mod castle;
pub mod catalog;
pub mod clue;
pub mod config;
pub mod console;
pub mod encounter;
pub mod error;
pub mod game;
pub mod room;
pub mod selector;

pub use castle::Castle;
pub use catalog::Catalog;
pub use clue::ClueComposer;
pub use config::CastleConfig;
pub use console::{Console, LineConsole};
pub use encounter::{DefaultEncounter, Encounter, Outcome, Scene};
pub use error::{CastleError, CastleResult};
pub use game::{Game, GameState};
pub use room::Room;
pub use selector::ExhaustiveSelector;
