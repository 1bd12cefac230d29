//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Declined shipments and orders are not errors; they are ordinary `false`
/// outcomes on `Restaurant`. This type only covers contract violations and
/// malformed input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a blank item name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A positional lookup fell outside the list.
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A configuration value was present but could not be used.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
