//! Error types for the castle engine.

use thiserror::Error;

/// Result type for castle operations.
pub type CastleResult<T> = Result<T, CastleError>;

/// Errors that can occur while building or running a castle game.
#[derive(Debug, Error)]
pub enum CastleError {
    /// A selector was asked for an item but holds none.
    #[error("cannot pull from empty {pool} pool")]
    EmptyPool {
        /// Which pool was empty (e.g. "room", "clue").
        pool: &'static str,
    },

    /// A catalog list has no entries.
    #[error("catalog has no {0}")]
    EmptyCatalog(String),

    /// The input stream ended while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    /// Console I/O failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A catalog file could not be parsed.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}
