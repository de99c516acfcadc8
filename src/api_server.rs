// Axum Server Module
//
// Purpose: serve the content pages, the mock weather API and crawler files
// from one router sharing immutable application state.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use anyhow::Context;
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::robots::{self, CRAWLER_CACHE_CONTROL};
use crate::site::PAGES;
use crate::weather::{self, WeatherResponse};
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub content: Arc<ContentStore>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> anyhow::Result<Self> {
        let content = match &config.content_dir {
            Some(dir) => {
                tracing::info!("Loading content documents from {}", dir.display());
                ContentStore::from_dir(dir)
                    .with_context(|| format!("loading content from {}", dir.display()))?
            }
            None => {
                tracing::info!("Loading embedded content documents...");
                ContentStore::embedded().context("loading embedded content")?
            }
        };
        tracing::info!("Loaded {} content documents", content.len());

        Ok(Self {
            config: Arc::new(config),
            content: Arc::new(content),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(health_check))

        // Mock weather endpoint (JSON)
        .route("/api/weather", get(get_weather))

        // Crawler files
        .route("/robots.txt", get(get_robots))
        .route("/sitemap.xml", get(get_sitemap));

    // Content pages (HTML)
    for page in PAGES {
        router = router.route(
            page.path,
            get(move |State(state): State<AppState>| async move { pages::render(&state, page) }),
        );
    }

    router
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(pages::not_found)

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // weather API is fetched client-side
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// GET /api/weather
///
/// Waits for the configured delay (500ms by default) to simulate network
/// latency, then returns the static report.
async fn get_weather(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    tokio::time::sleep(state.config.weather_delay).await;

    let response = WeatherResponse::ok(weather::mock_report(), chrono::Utc::now().to_rfc3339());
    let body = serde_json::to_value(&response)
        .map_err(|e| AppError::Weather(format!("Failed to fetch weather data: {}", e)))?;

    tracing::debug!("Served mock weather report");
    Ok(Json(body))
}

async fn get_robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::CACHE_CONTROL, CRAWLER_CACHE_CONTROL),
        ],
        robots::robots_txt(&state.config),
    )
}

async fn get_sitemap(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/xml; charset=utf-8"),
            (header::CACHE_CONTROL, CRAWLER_CACHE_CONTROL),
        ],
        robots::sitemap_xml(&state.config, PAGES),
    )
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Weather(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Weather(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        tracing::error!("{}", message);
        (status, Json(WeatherResponse::failure(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_error_response() {
        let response = AppError::Weather("upstream down".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_state_from_missing_content_dir_fails() {
        let config = SiteConfig {
            content_dir: Some("/nonexistent/content".into()),
            ..SiteConfig::default()
        };
        let err = AppState::new(config).err().map(|e| format!("{:#}", e));
        assert!(err.unwrap_or_default().contains("/nonexistent/content"));
    }
}
