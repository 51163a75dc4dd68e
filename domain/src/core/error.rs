//! Domain error types

use crate::core::id::ChoiceId;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed length or range validation, or a selection exceeded
    /// the question's limit.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No choice with the given id exists on the question.
    #[error("Choice not found: {0}")]
    ChoiceNotFound(ChoiceId),
}

impl DomainError {
    /// Check if this error is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }

    /// Check if this error is a missing-choice lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::ChoiceNotFound(_))
    }
}
