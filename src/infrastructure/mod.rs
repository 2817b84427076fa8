//! Infrastructure layer - Concrete implementations of domain capabilities

pub mod logging;
pub mod user;

pub use user::{
    FormValidator, InMemoryUserRepository, RegistraterWithLog, RegistrationService,
};
