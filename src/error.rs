//! Error types for the scoreboard.
//!
//! Engine transitions are total and never fail. Errors only come from the
//! collaborators around the engine: the key-value store, value parsing, and
//! preference validation.

use thiserror::Error;

/// Errors surfaced by storage and preference operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid stake value: {0} (expected 1, 3, 6, 9 or 12)")]
    InvalidStake(u8),

    #[error("corrupted stored state: {0}")]
    CorruptedState(&'static str),

    #[error("invalid color: {0:?} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("invalid opacity")]
    InvalidOpacity,
}

/// Result type for scoreboard operations.
pub type Result<T> = std::result::Result<T, Error>;
