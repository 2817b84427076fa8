//! Registration request form

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registration request as decoded from the transport layer.
///
/// Lives only for the duration of one request. Missing JSON fields decode to
/// empty strings so that the structural rules below report them instead of
/// the body decoder; field keys in error output match the JSON names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Form {
    #[serde(default)]
    #[validate(email)]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 3, max = 16))]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 3, max = 16))]
    pub password_confirmation: String,
}
