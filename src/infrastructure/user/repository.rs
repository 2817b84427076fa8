//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{Form, User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of [`UserRepository`], keyed by email.
///
/// Each call takes the lock on its own, so `unique` followed by `create` is
/// not one atomic step: two concurrent registrations for the same email can
/// both pass the check and the later `create` wins the slot. The window is
/// accepted by the current design rather than closed here.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with existing users
    pub fn with_users(users: Vec<User>) -> Self {
        let users_map = users
            .into_iter()
            .map(|user| (user.email().to_string(), user))
            .collect();

        Self {
            users: Arc::new(RwLock::new(users_map)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn unique(&self, email: &str) -> Result<(), DomainError> {
        let users = self.users.read().await;

        if users.contains_key(email) {
            return Err(DomainError::EmailExists);
        }

        Ok(())
    }

    async fn create(&self, form: &Form) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let id = users.len() as i64 + 1;
        let user = User::new(id, form.email.clone(), form.password.clone());

        users.insert(form.email.clone(), user.clone());

        Ok(user)
    }
}
