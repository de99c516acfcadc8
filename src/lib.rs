//! DC Visitor Guide
//!
//! Washington DC tourism site: content pages composed from typed JSON
//! documents, a mock weather API and crawler files.
//!
//! - `config`: process-wide site configuration
//! - `content`: content documents and their loader
//! - `site`: section renderers and page composition
//! - `weather`: static weather payload
//! - `robots`: robots.txt and sitemap.xml
//! - `export`: static export of every page
//! - `api_server` / `web` (feature `api`): axum router and handlers

pub mod config;
pub mod content;
pub mod site;
pub mod weather;
pub mod robots;
pub mod export;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use config::SiteConfig;
pub use content::{ContentDocument, ContentStore, DocumentId};
pub use site::{compose, ComposedPage, SectionKind, PAGES};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
