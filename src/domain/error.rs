//! Domain Layer - Errors
//!
//! Errors are raised only when a board is constructed from malformed
//! initial state. Move processing never errors: an inadmissible move is
//! a normal user action and results in a silent no-op.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// Initial column contents violate the document template
    InvalidInput(String),
    /// A block id appears more than once across the board
    Conflict(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
