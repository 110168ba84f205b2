//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A case, verdict or precedent record failed a required-field or format check
    #[error("{0}")]
    Validation(String),

    #[error("invalid decision {0:?}")]
    InvalidDecision(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Check if this error came from field validation
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}
