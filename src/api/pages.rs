//! Server-rendered HTML - GET /test-html

use anyhow::Context as _;
use axum::{extract::State, response::Html};
use tera::{Context, Tera};

use crate::{api::routes::AppState, error::ApiError};

const TPL_INDEX: &str = include_str!("templates/index.html");

/// Tera with embedded templates (no filesystem access needed)
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template("index.html", TPL_INDEX)?;
    Ok(tera)
}

pub async fn test_html(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let mut context = Context::new();
    context.insert("title", "Hello, World!!");
    context.insert("author", "Book");

    let html = state
        .templates
        .render("index.html", &context)
        .context("Failed to render index.html")?;

    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_renders() {
        let tera = load_templates().unwrap();
        let mut context = Context::new();
        context.insert("title", "Hello, World!!");
        context.insert("author", "<b>Book</b>");

        let html = tera.render("index.html", &context).unwrap();
        assert!(html.contains("<h1>Hello, World!!</h1>"));
        // .html templates are autoescaped
        assert!(html.contains("&lt;b&gt;Book&lt;&#x2F;b&gt;"));
    }
}
