//! Domain error model.

use thiserror::Error;

/// Result type used across the item box crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// A full box or a missing item is an ordinary outcome and is reported as a
/// plain value by the inventory crate. This type is reserved for inputs that
/// cannot be turned into a valid setup at all, such as a malformed capacity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
