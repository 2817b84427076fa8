use thiserror::Error;

use crate::domain::user::ValidationErrors;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more fields of a submitted form failed validation.
    ///
    /// This is the recoverable outcome of the registration pipeline: the
    /// caller gets the full field -> message mapping as structured data.
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Sentinel raised by [`crate::domain::user::UserRepository::unique`]
    /// when the email is already taken. Translated into a
    /// [`ValidationErrors`] entry by the validator and never propagated
    /// past it.
    #[error("email already exists")]
    EmailExists,

    /// Infrastructure failure in the backing store.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Prepend context to an infrastructure error without changing its kind.
    ///
    /// `Validation` and `EmailExists` pass through untouched so callers can
    /// still dispatch on the variant after every layer has annotated the
    /// failure.
    pub fn context(self, context: &str) -> Self {
        match self {
            Self::Storage { message } => Self::Storage {
                message: format!("{context}: {message}"),
            },
            other => other,
        }
    }

    /// Whether this error carries field-level validation problems.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
