//! Auth handlers: account signup.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{SignUpRequest, SignUpResponse};
use crate::app_state::AppState;
use crate::domain::Credentials;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /auth/signup` — Register a new account.
///
/// An accepted registration lands the account in the pending partition
/// and answers 201; a duplicate username answers 403 with the rejection
/// message. Password strength and hashing are out of scope here.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidCredentials`] when either field is
/// empty, or a 500-class [`GatewayError`] on storage faults.
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    tag = "Auth",
    summary = "Register a new account",
    description = "Records a new account in the pending-verification state. The username must not be taken by a verified account or by a registration still awaiting validation.",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created, awaiting validation", body = SignUpResponse),
        (status = 403, description = "Username taken by a valid or pending account", body = SignUpResponse),
        (status = 400, description = "Missing or empty credentials", body = ErrorResponse),
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(GatewayError::InvalidCredentials);
    }

    let outcome = state
        .registration
        .register(Credentials::new(req.username, req.password))
        .await?;

    let status = if outcome.accepted {
        StatusCode::CREATED
    } else {
        StatusCode::FORBIDDEN
    };
    Ok((status, Json(SignUpResponse::from(outcome))))
}

/// Auth routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/signup", post(signup))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::response::Response;

    use super::*;
    use crate::repository::StoreAccountRepository;
    use crate::service::RegistrationService;
    use crate::store::{AccountStore, MemoryStore};

    fn make_state() -> AppState {
        let store = Arc::new(MemoryStore::new(["users", "pending_users"]));
        let repository = Arc::new(StoreAccountRepository::new(
            store as Arc<dyn AccountStore>,
            "users",
            "pending_users",
        ));
        AppState {
            registration: Arc::new(RegistrationService::new(repository)),
        }
    }

    async fn call_signup(state: &AppState, username: &str, password: &str) -> Response {
        let req = SignUpRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        match signup(State(state.clone()), Json(req)).await {
            Ok(response) => response.into_response(),
            Err(err) => err.into_response(),
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 4096).await;
        let Ok(bytes) = bytes else {
            panic!("body should be readable");
        };
        let Ok(value) = serde_json::from_slice(&bytes) else {
            panic!("body should be JSON");
        };
        value
    }

    #[tokio::test]
    async fn fresh_signup_answers_201() {
        let state = make_state();
        let response = call_signup(&state, "alice", "pw1").await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body.get("accepted"), Some(&serde_json::json!(true)));
        assert_eq!(
            body.get("message"),
            Some(&serde_json::json!(
                "Account created. Please proceed to account validation."
            ))
        );
    }

    #[tokio::test]
    async fn duplicate_signup_answers_403() {
        let state = make_state();
        let _ = call_signup(&state, "alice", "pw1").await;

        let response = call_signup(&state, "alice", "pw2").await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = body_json(response).await;
        assert_eq!(body.get("accepted"), Some(&serde_json::json!(false)));
        assert_eq!(
            body.get("message"),
            Some(&serde_json::json!("account awaiting validation"))
        );
    }

    #[tokio::test]
    async fn empty_credentials_answer_400() {
        let state = make_state();
        for (username, password) in [("", "pw"), ("alice", "")] {
            let response = call_signup(&state, username, password).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let body = body_json(response).await;
            let message = body.get("error").and_then(|e| e.get("message"));
            assert_eq!(message, Some(&serde_json::json!("invalid account credentials")));
        }
    }
}
