//! Router assembly: the public/protected split and the ordered auth pipeline

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tera::Tera;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::{
    api::{movies, pages, poster},
    auth::{
        api as auth_api, auth_middleware, role_gate, AuthState, CredentialStore, JwtHandler,
        RequiredRole, TokenIssuer,
    },
    config::Config,
    middleware::request_logger,
    store::MovieStore,
};

/// Shared state of the protected handlers
#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<MovieStore>,
    pub templates: Arc<Tera>,
    pub upload_dir: Arc<PathBuf>,
}

/// Build the whole application from configuration
pub fn create_router(config: &Config) -> Result<Router> {
    let jwt_handler = Arc::new(JwtHandler::new(config.secret()));
    if jwt_handler.secret().is_none() {
        error!("JWT_SECRET is not set: /login and every protected route will answer 500");
    }

    let issuer = TokenIssuer::new(CredentialStore::new(config.account()), jwt_handler.clone())
        .with_ttl(config.token_ttl()?);
    let auth_state = AuthState::new(Arc::new(issuer), jwt_handler.clone());

    let app_state = AppState {
        movies: Arc::new(MovieStore::seeded()),
        templates: Arc::new(pages::load_templates().context("Failed to load HTML templates")?),
        upload_dir: Arc::new(config.upload_dir.clone()),
    };

    let required = RequiredRole(config.required_role());
    info!(required_role = %required.0, "Protected routes configured");

    let app = Router::new()
        .merge(public_router(auth_state, config.expose_config_endpoint))
        .merge(protect(protected_router(app_state), jwt_handler, required))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    Ok(app)
}

/// Routes that bypass token validation and the role gate
pub fn public_router(auth_state: AuthState, expose_config: bool) -> Router {
    let mut routes = Router::new().route("/login", post(auth_api::login));

    if expose_config {
        warn!("GET /config is mounted and exposes the signing secret; do not run this in production");
        routes = routes.route("/config", get(auth_api::get_config));
    }

    routes
        .with_state(auth_state)
        .route("/health", get(health_check))
}

/// Catalog, upload and page routes, before any auth is applied
pub fn protected_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/movies",
            get(movies::list_movies).post(movies::create_movie),
        )
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route(
            "/poster",
            post(poster::upload_poster).layer(DefaultBodyLimit::max(poster::MAX_POSTER_BYTES)),
        )
        .route("/test-html", get(pages::test_html))
        .with_state(state)
}

/// Wrap every route of `routes` in the auth pipeline.
///
/// Stages run top to bottom: token validation, role gate, request logger.
/// The first failing stage answers the request and nothing after it runs.
/// Applied with `route_layer`, so every method and path of the group is
/// covered identically. Call once per route group; each group may require a
/// different role.
pub fn protect(routes: Router, jwt_handler: Arc<JwtHandler>, required: RequiredRole) -> Router {
    routes.route_layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn_with_state(jwt_handler, auth_middleware))
            .layer(middleware::from_fn_with_state(required, role_gate))
            .layer(middleware::from_fn(request_logger)),
    )
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}
