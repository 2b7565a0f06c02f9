//! Poster upload - POST /poster

use anyhow::Context;
use axum::extract::{Multipart, State};
use std::path::Path;
use tracing::info;

use crate::{api::routes::AppState, auth::Authenticated, error::ApiError};

pub const POSTER_FIELD: &str = "poster";
pub const MAX_POSTER_BYTES: usize = 10 * 1024 * 1024;
pub const UPLOAD_COMPLETE_MESSAGE: &str = "File Upload Complete!!";

/// Saves the `poster` form file under the upload directory
pub async fn upload_poster(
    State(state): State<AppState>,
    Authenticated(identity): Authenticated,
    mut multipart: Multipart,
) -> Result<&'static str, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(POSTER_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .and_then(sanitize_file_name)
            .ok_or_else(|| ApiError::MalformedInput("poster has no usable file name".to_string()))?;
        let bytes = field.bytes().await?;

        tokio::fs::create_dir_all(state.upload_dir.as_path())
            .await
            .with_context(|| format!("Failed to create {}", state.upload_dir.display()))?;

        let path = state.upload_dir.join(&file_name);
        tokio::fs::write(&path, &bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(
            file = %file_name,
            bytes = bytes.len(),
            by = %identity.email,
            "Poster uploaded"
        );

        return Ok(UPLOAD_COMPLETE_MESSAGE);
    }

    Err(ApiError::MalformedInput(format!(
        "missing multipart file field '{}'",
        POSTER_FIELD
    )))
}

/// Keep only the final path component so a client cannot write outside the
/// upload directory.
fn sanitize_file_name(raw: &str) -> Option<String> {
    Path::new(raw)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("poster.png").as_deref(), Some("poster.png"));
        assert_eq!(sanitize_file_name("../../etc/passwd").as_deref(), Some("passwd"));
        assert_eq!(sanitize_file_name("/abs/path/x.jpg").as_deref(), Some("x.jpg"));
        assert_eq!(sanitize_file_name(".."), None);
        assert_eq!(sanitize_file_name(""), None);
    }
}
