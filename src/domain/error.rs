//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated construction invariants.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid procedure record: {message}")]
    InvalidRecord { message: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
