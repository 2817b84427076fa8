//! Registration endpoint

use axum::{extract::State, routing::post, Router};

use super::state::AppState;
use super::types::{ApiError, Json};
use crate::domain::user::{Form, User};

/// Create the registration router
pub fn create_registration_router() -> Router<AppState> {
    Router::new().route("/registrate", post(registrate))
}

/// Register a new user
///
/// POST /registrate
///
/// 200 with the created user on success, 422 with the field -> message
/// mapping when validation fails, 500 with no body on infrastructure
/// failure. Undecodable bodies are rejected with 400 by the extractor
/// before this handler runs.
pub async fn registrate(
    State(state): State<AppState>,
    Json(form): Json<Form>,
) -> Result<Json<User>, ApiError> {
    let user = state.registrater.registrate(&form).await?;

    Ok(Json(user))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
        Router,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::api::router::create_router_with_state;
    use crate::infrastructure::user::{
        FormValidator, InMemoryUserRepository, RegistraterWithLog, RegistrationService,
    };

    fn test_state(seed: Vec<User>) -> AppState {
        let repository = Arc::new(InMemoryUserRepository::with_users(seed));
        let validator = Arc::new(FormValidator::new(repository.clone()));
        let service = RegistrationService::new(validator, repository);

        AppState::new(Arc::new(RegistraterWithLog::new(service)))
    }

    fn test_app(seed: Vec<User>) -> Router {
        create_router_with_state(test_state(seed))
    }

    async fn registrate(app: Router, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri("/registrate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_body_is_bad_request() {
        let response = registrate(test_app(Vec::new()), "invalid").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_registrates_user_with_valid_body() {
        let response = registrate(
            test_app(Vec::new()),
            r#"{"email":"new@domain.zone", "password": "qwerty", "password_confirmation": "qwerty"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["email"], "new@domain.zone");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_validates_email_uniqueness() {
        let seed = vec![User::new(1, "exists@domain.zone", "qwerty")];
        let response = registrate(
            test_app(seed),
            r#"{"email":"exists@domain.zone", "password": "qwerty", "password_confirmation": "qwerty"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["email"], "email exists");
    }

    #[tokio::test]
    async fn test_validates_password_confirmation_match() {
        let response = registrate(
            test_app(Vec::new()),
            r#"{"email":"new@domain.zone", "password": "qwerty", "password_confirmation": "other"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["password"], "password mismatch");
    }

    #[tokio::test]
    async fn test_validates_email_syntax() {
        let response = registrate(
            test_app(Vec::new()),
            r#"{"email":"invalid", "password": "qwerty", "password_confirmation": "qwerty"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["email"], "email is invalid");
    }

    #[tokio::test]
    async fn test_missing_password_fields_accumulate_errors() {
        let response = registrate(test_app(Vec::new()), r#"{"email":"invalid"}"#).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_json(response).await;
        assert_eq!(body["email"], "email is invalid");
        assert_eq!(body["password"], "password is invalid");
        assert_eq!(body["password_confirmation"], "password_confirmation is invalid");
    }

    #[tokio::test]
    async fn test_second_registration_gets_next_id() {
        let seed = vec![User::new(1, "exists@domain.zone", "qwerty")];
        let response = registrate(
            test_app(seed),
            r#"{"email":"new@domain.zone", "password": "qwerty", "password_confirmation": "qwerty"}"#,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["id"], 2);
    }
}
