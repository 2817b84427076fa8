//! Registration API
//!
//! A user-registration service built as a small validation-and-persistence
//! pipeline behind one HTTP endpoint:
//! - Declarative field rules plus cross-field and uniqueness checks,
//!   accumulated into one structured error
//! - A pluggable user store behind the `UserRepository` capability
//! - A logging decorator around the registration service

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{
    FormValidator, InMemoryUserRepository, RegistraterWithLog, RegistrationService,
};

/// Create the application state with the default registration stack:
/// in-memory store, accumulating form validator, and the logging decorator
/// around the registration service.
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryUserRepository::new());
    let validator = Arc::new(FormValidator::new(repository.clone()));
    let service = RegistrationService::new(validator, repository);

    AppState::new(Arc::new(RegistraterWithLog::new(service)))
}
