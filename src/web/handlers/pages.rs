// Page handlers for HTML rendering with Askama

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::api_server::AppState;
use crate::site::{compose, compose_not_found, render_page, ComposeError, PageDefinition};

// ============================================================================
// Content Pages
// ============================================================================

/// Compose and render a registered page.
pub fn render(state: &AppState, page: &'static PageDefinition) -> Result<Html<String>, PageError> {
    let document = state.content.load(page.document);
    let composed = compose(page, &document, &state.config)?;
    Ok(Html(render_page(&composed)?))
}

// ============================================================================
// Not Found
// ============================================================================

pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::debug!("No route for {}", uri.path());
    let rendered = compose_not_found(uri.path(), &state.config).and_then(|page| render_page(&page));
    match rendered {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => PageError::from(e).into_response(),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Render failure surfaced at the page boundary.
#[derive(Debug)]
pub struct PageError(ComposeError);

impl From<ComposeError> for PageError {
    fn from(err: ComposeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("Page render failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<!DOCTYPE html><title>Server Error</title><h1>Something went wrong</h1>".to_string()),
        )
            .into_response()
    }
}
