//! Error types for the hand games.

use thiserror::Error;

/// Result type for hand game operations.
pub type HandsResult<T> = Result<T, HandsError>;

/// Errors that can occur while playing a hand game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandsError {
    /// A menu number that lists no option.
    #[error("no option numbered {0}")]
    NoSuchNumber(String),

    /// Input that is neither a menu number nor an option name.
    #[error("unknown option: {0}")]
    UnknownName(String),
}
