//! Role Gate
//! Mission: Admit only identities holding the role a route group requires

use crate::auth::{
    error::AuthError,
    middleware::extract_identity,
    models::{AuthenticatedIdentity, Role},
};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

/// Role a group of routes demands; the state of one [`role_gate`] layer
#[derive(Debug, Clone)]
pub struct RequiredRole(pub Role);

/// Exact role comparison. A missing identity means the validator never ran,
/// which is treated as a rejection rather than a crash.
pub fn authorize(
    identity: Option<&AuthenticatedIdentity>,
    required: &Role,
) -> Result<(), AuthError> {
    let identity = identity.ok_or(AuthError::MissingIdentity)?;

    if identity.role != *required {
        return Err(AuthError::RoleMismatch {
            required: required.clone(),
            actual: identity.role.clone(),
        });
    }

    Ok(())
}

/// Middleware form of [`authorize`]. Must be layered inside `auth_middleware`.
pub async fn role_gate(
    State(RequiredRole(required)): State<RequiredRole>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    if let Err(err) = authorize(extract_identity(&req), &required) {
        warn!(
            path = %req.uri().path(),
            required = %required,
            reason = %err,
            "Role gate rejected request"
        );
        return Err(err);
    }

    Ok(next.run(req).await)
}
