//! HTTP error responses for the registration API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::user::ValidationErrors;
use crate::domain::DomainError;

/// API error with status code and optional structured body.
///
/// Validation failures are the only errors that expose detail to the
/// client: the field -> message mapping is serialized as the response body.
/// Everything else is an opaque status code with no body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    validation: Option<ValidationErrors>,
}

impl ApiError {
    /// Unprocessable entity carrying the field errors as the body
    pub fn unprocessable(errors: ValidationErrors) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            validation: Some(errors),
        }
    }

    /// Bad request with no body, for undecodable payloads
    pub fn bad_request() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            validation: None,
        }
    }

    /// Internal server error with no body - internals stay internal
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            validation: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.validation {
            Some(errors) => (self.status, Json(errors)).into_response(),
            None => self.status.into_response(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::unprocessable(errors),
            // EmailExists never crosses the validator; if it does, it is a
            // bug and surfaces as an opaque failure like any other.
            DomainError::EmailExists | DomainError::Storage { .. } => Self::internal(),
        }
    }
}
