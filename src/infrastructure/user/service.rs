//! Registration service orchestrating validation and persistence

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::user::{Form, Registrater, User, UserRepository, Validater};
use crate::domain::DomainError;

/// [`Registrater`] implementation: validate first, persist only on success.
///
/// Holds no state of its own; both collaborators are injected so alternate
/// validators or storage backends can be substituted without touching the
/// orchestration. A failure at either step is terminal for the request -
/// there are no retries and no partial-success state.
pub struct RegistrationService<V: Validater, R: UserRepository> {
    validator: Arc<V>,
    repository: Arc<R>,
}

impl<V: Validater, R: UserRepository> RegistrationService<V, R> {
    pub fn new(validator: Arc<V>, repository: Arc<R>) -> Self {
        Self {
            validator,
            repository,
        }
    }
}

#[async_trait]
impl<V: Validater, R: UserRepository> Registrater for RegistrationService<V, R> {
    async fn registrate(&self, form: &Form) -> Result<User, DomainError> {
        self.validator
            .validate(form)
            .await
            .map_err(|err| err.context("validation failed"))?;

        let user = self
            .repository
            .create(form)
            .await
            .map_err(|err| err.context("creation failed"))?;

        Ok(user)
    }
}
