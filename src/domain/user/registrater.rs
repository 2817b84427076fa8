//! Registration capability

use async_trait::async_trait;

use super::entity::User;
use super::form::Form;
use crate::domain::DomainError;

/// The single public operation the transport layer invokes per request.
///
/// Implementations validate the form and, only on success, persist it.
/// A [`DomainError::Validation`] result is the recoverable outcome carrying
/// field errors; everything else is an infrastructure failure the transport
/// must not expose in detail.
#[async_trait]
pub trait Registrater: Send + Sync {
    async fn registrate(&self, form: &Form) -> Result<User, DomainError>;
}
