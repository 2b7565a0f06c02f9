//! Authentication Middleware
//! Mission: Protect API endpoints with JWT validation

use crate::auth::{error::AuthError, jwt::JwtHandler, models::AuthenticatedIdentity};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use std::sync::Arc;
use tracing::debug;

/// Auth middleware that validates JWT tokens.
///
/// Hard gate: on any failure the request is answered here and nothing behind
/// this layer runs.
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let TypedHeader(Authorization(bearer)) = bearer.ok_or(AuthError::MissingToken)?;

    let claims = jwt_handler.validate_token(bearer.token())?;
    let identity = AuthenticatedIdentity::from(claims);

    debug!(email = %identity.email, role = %identity.role, "Identity attached");

    // Add identity to request extensions so later stages and handlers can access it
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Extract identity from request (use after auth middleware)
pub fn extract_identity(req: &Request) -> Option<&AuthenticatedIdentity> {
    req.extensions().get::<AuthenticatedIdentity>()
}

/// Handler extractor for the validated identity.
///
/// Fails closed with 401 when the validator did not run.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedIdentity);

#[async_trait]
impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedIdentity>()
            .cloned()
            .map(Authenticated)
            .ok_or(AuthError::MissingIdentity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{
        jwt::JwtSecret,
        models::{Claims, Role},
    };
    use axum::{
        body::Body,
        http::{header, Request as HttpRequest, StatusCode},
        middleware,
        routing::get,
        Router,
    };
    use chrono::{Duration, Utc};
    use tower::ServiceExt;

    async fn whoami(Authenticated(identity): Authenticated) -> String {
        format!("{}:{}", identity.email, identity.role)
    }

    fn app(jwt: Arc<JwtHandler>) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(middleware::from_fn_with_state(jwt, auth_middleware))
    }

    fn jwt() -> Arc<JwtHandler> {
        Arc::new(JwtHandler::new(JwtSecret::new("middleware-secret")))
    }

    fn token(jwt: &JwtHandler, role: Role) -> String {
        jwt.sign(&Claims {
            email: "hello@example.com".to_string(),
            role,
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        })
        .unwrap()
    }

    async fn call(app: Router, auth: Option<String>) -> (StatusCode, String) {
        let mut builder = HttpRequest::builder().uri("/whoami");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_bearer_attaches_identity() {
        let jwt = jwt();
        let token = token(&jwt, Role::MEMBER);

        let (status, body) = call(app(jwt), Some(format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "hello@example.com:member");
    }

    #[tokio::test]
    async fn test_missing_or_malformed_header_rejected() {
        let jwt = jwt();
        let token = token(&jwt, Role::ADMIN);

        let (status, _) = call(app(jwt.clone()), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = call(app(jwt.clone()), Some(token.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = call(app(jwt), Some(format!("Basic {}", token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_foreign_token_rejected() {
        let other = Arc::new(JwtHandler::new(JwtSecret::new("someone-else")));
        let token = token(&other, Role::ADMIN);

        let (status, _) = call(app(jwt()), Some(format!("Bearer {}", token))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_fails_closed() {
        let app = Router::new().route("/whoami", get(whoami));

        let (status, _) = call(app, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_extract_identity_from_request() {
        let mut req = HttpRequest::new(Body::empty());
        assert!(extract_identity(&req).is_none());

        req.extensions_mut().insert(AuthenticatedIdentity {
            email: "test@example.com".to_string(),
            role: Role::ADMIN,
        });

        let extracted = extract_identity(&req).unwrap();
        assert_eq!(extracted.email, "test@example.com");
    }
}
