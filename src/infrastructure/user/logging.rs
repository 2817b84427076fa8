//! Logging decorator for the registration capability

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::user::{Form, Registrater, User};
use crate::domain::DomainError;

/// Wraps any [`Registrater`] and logs every invocation and its outcome.
///
/// Pure observation: the inner result is returned untouched. Only the email
/// is logged - the password never reaches the log stream. A validation
/// rejection is an expected outcome and logged at warn level; only
/// infrastructure failures are logged as errors.
pub struct RegistraterWithLog<T: Registrater> {
    inner: T,
}

impl<T: Registrater> RegistraterWithLog<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: Registrater> Registrater for RegistraterWithLog<T> {
    async fn registrate(&self, form: &Form) -> Result<User, DomainError> {
        info!(email = %form.email, "registration requested");

        let result = self.inner.registrate(form).await;

        match &result {
            Ok(user) => {
                info!(user_id = user.id(), email = %user.email(), "registration succeeded");
            }
            Err(DomainError::Validation(errors)) => {
                warn!(email = %form.email, count = errors.len(), "registration rejected");
            }
            Err(err) => {
                error!(email = %form.email, error = %err, "registration failed");
            }
        }

        result
    }
}
