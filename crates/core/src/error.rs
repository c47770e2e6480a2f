//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The view-model itself has no failure modes (out-of-range pages render as
/// empty, not as errors); these errors exist only at construction
/// boundaries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. rating out of range, zero page size).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A category label did not match the fixed category set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::UnknownCategory(label.into())
    }
}
