// Site server entry point
//
// Usage: cargo run --bin dc_site

use dc_visitor_guide::{create_router, AppState, SiteConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "dc_visitor_guide=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    // Configuration is read once here and shared through AppState
    let config = SiteConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  SITE_URL: {}", config.site_url);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  STATIC_DIR: {}", config.static_dir.display());
    tracing::info!("  WEATHER_DELAY_MS: {}", config.weather_delay.as_millis());
    match &config.content_dir {
        Some(dir) => tracing::info!("  CONTENT_DIR: {}", dir.display()),
        None => tracing::info!("  CONTENT_DIR: (embedded)"),
    }

    let port = config.port;
    let state = AppState::new(config)?;

    // Create router with all endpoints and middleware
    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await?;

    Ok(())
}
