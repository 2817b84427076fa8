//! Custom JSON extractor with a uniform rejection status

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::Json` that rejects every undecodable body with 400.
///
/// Body decoding happens entirely before the core is invoked; the core never
/// sees a malformed request. Axum's stock extractor spreads rejections over
/// 400/415/422 - this one collapses them so 422 stays reserved for
/// validation failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(_) => Err(ApiError::bad_request()),
        }
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_into_inner() {
        let json = Json(42);
        assert_eq!(json.into_inner(), 42);
    }

    #[test]
    fn test_json_into_response() {
        let response = Json(serde_json::json!({"id": 1})).into_response();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
