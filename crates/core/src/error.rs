//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a recoverable, caller-facing outcome. Nothing in the
/// domain layer panics or retries on these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced sweet is not in the collection.
    #[error("not found")]
    NotFound,

    /// Purchase attempted against an item with zero stock.
    #[error("insufficient stock")]
    InsufficientStock,

    /// The login predicate rejected the supplied credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Malformed input (registration fields, negative amounts, empty names...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A command was routed to the wrong aggregate instance.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Stable machine-readable code (used for JSON error bodies).
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::NotFound => "not_found",
            DomainError::InsufficientStock => "insufficient_stock",
            DomainError::InvalidCredentials => "invalid_credentials",
            DomainError::InvalidInput(_) => "invalid_input",
            DomainError::InvalidId(_) => "invalid_id",
            DomainError::InvariantViolation(_) => "invariant_violation",
        }
    }
}
