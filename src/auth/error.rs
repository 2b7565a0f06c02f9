//! Auth error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::{debug, error};

use crate::auth::models::Role;

/// Everything the auth core can fail with.
///
/// Client-facing failures all collapse into one generic 401 body; the variant
/// only survives in server-side logs.
#[derive(Debug)]
pub enum AuthError {
    InvalidCredentials,
    MissingToken,
    InvalidToken(jsonwebtoken::errors::Error),
    MissingIdentity,
    RoleMismatch { required: Role, actual: Role },
    SecretNotSet,
    Signing(jsonwebtoken::errors::Error),
    Internal(&'static str),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken(_)
            | AuthError::MissingIdentity
            | AuthError::RoleMismatch { .. } => StatusCode::UNAUTHORIZED,
            AuthError::SecretNotSet | AuthError::Signing(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::MissingToken => write!(f, "Missing bearer token"),
            AuthError::InvalidToken(e) => write!(f, "Invalid or expired token: {}", e),
            AuthError::MissingIdentity => write!(f, "No authenticated identity on request"),
            AuthError::RoleMismatch { required, actual } => {
                write!(f, "Role '{}' does not satisfy required role '{}'", actual, required)
            }
            AuthError::SecretNotSet => write!(f, "JWT secret not set"),
            AuthError::Signing(e) => write!(f, "Failed to sign token: {}", e),
            AuthError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AuthError::SecretNotSet => {
                error!("JWT secret not set, refusing to sign or verify tokens");
                "JWT secret not set"
            }
            AuthError::Signing(_) | AuthError::Internal(_) => {
                error!(reason = %self, "Auth internal failure");
                "Internal server error"
            }
            _ => {
                debug!(reason = %self, "Request rejected");
                "Unauthorized"
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
