//! Catalog handlers. Only reachable through the auth pipeline.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    api::routes::AppState,
    auth::Authenticated,
    error::ApiError,
    extract::JsonOrForm,
    models::{Movie, MovieInput},
};

/// GET /movies
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    Json(state.movies.list())
}

/// GET /movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_id(&id)?;
    state
        .movies
        .get(id)
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    JsonOrForm(input): JsonOrForm<MovieInput>,
) -> Result<Json<Movie>, ApiError> {
    let movie = state.movies.create(input);

    info!(id = movie.id, title = %movie.title, by = %identity.email, "Movie created");

    Ok(Json(movie))
}

/// PUT /movies/:id
pub async fn update_movie(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
    JsonOrForm(input): JsonOrForm<MovieInput>,
) -> Result<Json<Movie>, ApiError> {
    let id = parse_id(&id)?;

    let movie = state.movies.update(id, input).ok_or_else(|| not_found(id))?;

    info!(id, by = %identity.email, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /movies/:id
pub async fn delete_movie(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;

    if !state.movies.delete(id) {
        return Err(not_found(id));
    }

    info!(id, by = %identity.email, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|e| ApiError::MalformedInput(format!("invalid movie id '{}': {}", raw, e)))
}

fn not_found(id: i64) -> ApiError {
    ApiError::NotFound(format!("Movie {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(ApiError::MalformedInput(_))));
        assert!(matches!(parse_id(""), Err(ApiError::MalformedInput(_))));
    }
}
