//! Export the site as static files.
//!
//! Run with: cargo run --bin export_site -- [OUTPUT_DIR]
//! OUTPUT_DIR defaults to `dist`.

use dc_visitor_guide::export::export_site;
use dc_visitor_guide::{ContentStore, SiteConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dc_visitor_guide=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let config = SiteConfig::from_env();
    let content = match &config.content_dir {
        Some(dir) => ContentStore::from_dir(dir)?,
        None => ContentStore::embedded()?,
    };

    let written = export_site(&config, &content, &out_dir)?;
    tracing::info!("Exported {} files to {}", written.len(), out_dir.display());

    Ok(())
}
