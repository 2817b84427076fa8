//! Registration validator composing field rules with the uniqueness check

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::user::{validate_fields, Form, UserRepository, Validater, ValidationErrors};
use crate::domain::DomainError;

/// [`Validater`] implementation for the registration form.
///
/// Runs every independent check and accumulates the failures instead of
/// stopping at the first one. All rule classes write into one flat map: the
/// match rule shares the `"password"` key with the length rule and the
/// uniqueness check shares `"email"` with the syntax rule, so the later
/// rule overwrites the earlier message. Callers relying on the exact
/// diagnostic should know the most specific one is not always surfaced.
pub struct FormValidator<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> FormValidator<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: UserRepository> Validater for FormValidator<R> {
    async fn validate(&self, form: &Form) -> Result<(), DomainError> {
        let mut errors = ValidationErrors::new();
        errors.merge(validate_fields(form));

        if form.password != form.password_confirmation {
            errors.set("password", "password mismatch");
        }

        match self.repository.unique(&form.email).await {
            Ok(()) => {}
            Err(DomainError::EmailExists) => errors.set("email", "email exists"),
            Err(err) => return Err(err.context("repository unique")),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}
