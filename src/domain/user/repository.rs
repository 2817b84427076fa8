//! User repository trait

use async_trait::async_trait;

use super::entity::User;
use super::form::Form;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Data access capability for user storage.
///
/// Implementations own all shared mutable state and are responsible for the
/// consistency of concurrent calls. `unique` followed by `create` is a
/// check-then-act sequence the core does not make atomic; see the note on
/// the in-memory implementation.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether an email is free to register.
    ///
    /// Returns `Err(DomainError::EmailExists)` when the email is taken,
    /// `Ok(())` when it is free, and any other error on infrastructure
    /// failure.
    async fn unique(&self, email: &str) -> Result<(), DomainError>;

    /// Persist a validated form as a new user and return the created record
    /// with its store-assigned id. Must only be called after validation
    /// succeeded.
    async fn create(&self, form: &Form) -> Result<User, DomainError>;
}
