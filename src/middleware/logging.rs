//! Request logging middleware.
//!
//! Logs every admitted request with URL, method, start time, status code, and
//! latency. Informational only; it never rejects.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::auth::AuthenticatedIdentity;

/// Middleware that logs HTTP requests with timing information.
///
/// Runs behind the auth stages, so the acting identity is available and is
/// recorded on the span.
pub async fn request_logger(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let url = request.uri().to_string();
    let started_at = Utc::now();
    let request_id = Uuid::new_v4();
    let email = request
        .extensions()
        .get::<AuthenticatedIdentity>()
        .map(|identity| identity.email.clone())
        .unwrap_or_default();

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        url = %url,
        email = %email,
    );

    async move {
        info!(time = %started_at.to_rfc3339(), "Request received");

        let start = Instant::now();
        let response = next.run(request).await;
        let latency = start.elapsed();
        let status = response.status().as_u16();

        if status >= 500 {
            warn!(
                status = status,
                latency_ms = latency.as_millis(),
                "Request failed (5xx)"
            );
        } else {
            info!(
                status = status,
                latency_ms = latency.as_millis(),
                "Request completed"
            );
        }

        response
    }
    .instrument(span)
    .await
}
