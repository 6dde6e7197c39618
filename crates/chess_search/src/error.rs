//! Error types for the search core
//!
//! Search itself never fails: running out of time or finding no legal move
//! are ordinary outcomes reported through [`crate::search::SearchResult`].
//! Errors only surface at the boundary where text is turned into positions
//! and moves, or where a caller builds an invalid budget.

use thiserror::Error;

/// Errors that can occur at the edges of the search core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// FEN text could not be parsed into a position
    #[error("Invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    /// Move text is not valid coordinate notation
    #[error("Invalid move text '{text}' (expected coordinate notation such as e2e4 or e7e8q)")]
    InvalidMove { text: String },

    /// Move text is well formed but not legal in the current position
    #[error("Illegal move {mv} in position {fen}")]
    IllegalMove { mv: String, fen: String },

    /// Budget parameters out of range
    #[error("Invalid search budget: max depth {max_depth} (must be 1-{limit})")]
    InvalidBudget { max_depth: u8, limit: u8 },
}

/// Result type alias for fallible search-core operations
pub type EngineResult<T> = Result<T, SearchError>;
