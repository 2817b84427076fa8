//! User infrastructure
//!
//! Concrete implementations of the user domain capabilities: the in-memory
//! store, the form validator, the registration service, and the logging
//! decorator.

mod logging;
mod repository;
mod service;
mod validator;

pub use logging::RegistraterWithLog;
pub use repository::InMemoryUserRepository;
pub use service::RegistrationService;
pub use validator::FormValidator;
