//! Authentication API Endpoints
//! Mission: Provide the public login and diagnostic config endpoints

use crate::{
    auth::{
        issuer::TokenIssuer,
        jwt::{JwtHandler, JwtSecret},
        models::{Credential, LoginResponse},
    },
    error::ApiError,
    extract::JsonOrForm,
};
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login Successfully !!";

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub issuer: Arc<TokenIssuer>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(issuer: Arc<TokenIssuer>, jwt_handler: Arc<JwtHandler>) -> Self {
        Self {
            issuer,
            jwt_handler,
        }
    }
}

/// Login endpoint - POST /login, JSON or urlencoded form body
pub async fn login(
    State(state): State<AuthState>,
    JsonOrForm(attempt): JsonOrForm<Credential>,
) -> Result<Json<LoginResponse>, ApiError> {
    let issued = state.issuer.issue(&attempt)?;

    info!(email = %issued.claims.email, role = %issued.claims.role, "Login successful");

    Ok(Json(LoginResponse {
        message: LOGIN_SUCCESS_MESSAGE.to_string(),
        token: issued.token,
    }))
}

/// Config echo - GET /config
///
/// NON-PRODUCTION DIAGNOSTIC: returns the raw signing secret. Only mounted when
/// the operator opts in with `--expose-config-endpoint`.
pub async fn get_config(State(state): State<AuthState>) -> Json<Value> {
    let secret = state
        .jwt_handler
        .secret()
        .map(JwtSecret::expose)
        .unwrap_or_default();

    Json(json!({ "JWT_SECRET": secret }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credential_store::CredentialStore;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn state(secret: Option<&str>) -> AuthState {
        let jwt = Arc::new(JwtHandler::new(secret.and_then(JwtSecret::new)));
        let issuer = Arc::new(TokenIssuer::new(CredentialStore::default(), jwt.clone()));
        AuthState::new(issuer, jwt)
    }

    #[tokio::test]
    async fn test_login_returns_token_and_message() {
        let state = state(Some("api-secret"));
        let Json(response) = login(
            State(state.clone()),
            JsonOrForm(Credential::new("hello@example.com", "P@ssw0rd")),
        )
        .await
        .unwrap();

        assert_eq!(response.message, LOGIN_SUCCESS_MESSAGE);
        let claims = state.jwt_handler.validate_token(&response.token).unwrap();
        assert_eq!(claims.email, "hello@example.com");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let err = login(
            State(state(Some("api-secret"))),
            JsonOrForm(Credential::new("hello@example.com", "wrong")),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_without_secret_is_internal_error() {
        let err = login(
            State(state(None)),
            JsonOrForm(Credential::new("hello@example.com", "P@ssw0rd")),
        )
        .await
        .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_config_echo() {
        let Json(value) = get_config(State(state(Some("api-secret")))).await;
        assert_eq!(value, json!({ "JWT_SECRET": "api-secret" }));

        let Json(value) = get_config(State(state(None))).await;
        assert_eq!(value, json!({ "JWT_SECRET": "" }));
    }
}
