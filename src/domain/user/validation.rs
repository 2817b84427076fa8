//! Form validation: structured errors, field rules, and the validator trait

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::form::Form;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Field-keyed validation failure report.
///
/// Maps a field name (the JSON key) to one human-readable message. A field
/// can fail more than one rule; the last rule to run wins the slot, so the
/// most specific diagnostic is not always the one surfaced. This is a lookup
/// structure, not a sequence - iteration order carries no meaning.
///
/// An empty map is never handed to callers as an error: success is expressed
/// by the absence of an error value, and the transport layer must never
/// treat an empty-but-present map as success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors(HashMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field, replacing any earlier message.
    pub fn set(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Fold another report into this one; the other's entries win on clash.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "you have validation errors")
    }
}

/// Apply the per-field structural rules to a form.
///
/// Pure function of the form's fields: email syntax, password and
/// confirmation length in [3,16]. Each failing field maps to
/// `"<field> is invalid"` under its own key.
pub fn validate_fields(form: &Form) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if let Err(failures) = form.validate() {
        for field in failures.field_errors().keys() {
            errors.set(*field, format!("{field} is invalid"));
        }
    }

    errors
}

/// Validation abstraction the registration service delegates to.
///
/// `Ok(())` means the form may be persisted. A validation failure comes back
/// as [`DomainError::Validation`] with every accumulated field error; any
/// other error is an infrastructure problem from the uniqueness check.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Validater: Send + Sync {
    async fn validate(&self, form: &Form) -> Result<(), DomainError>;
}
