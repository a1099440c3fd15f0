//! Error types for Caves Core

use thiserror::Error;

/// Result type alias using Caves' Error
pub type Result<T> = std::result::Result<T, Error>;

/// Caves error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Expected 2 tokens on line '{line}', found {found}")]
    Parse { line: String, found: usize },

    #[error("Invalid cave name: '{0}'")]
    InvalidCave(String),

    #[error("Cave not found: {0}")]
    CaveNotFound(String),

    #[error("Passage between big caves {from} and {to} allows unbounded revisits")]
    UnboundedLayout { from: String, to: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
