//! User domain
//!
//! Domain types and traits for user registration: the request form, the
//! persisted user entity, field validation, and the repository, validator,
//! and registration capabilities.

mod entity;
mod form;
mod registrater;
mod repository;
mod validation;

pub use entity::User;
pub use form::Form;
pub use registrater::Registrater;
pub use repository::UserRepository;
pub use validation::{validate_fields, Validater, ValidationErrors};

#[cfg(test)]
pub use repository::MockUserRepository;
#[cfg(test)]
pub use validation::MockValidater;
