//! Site configuration
//!
//! Read once from the environment at startup and passed explicitly to
//! everything that builds canonical URLs (page metadata, robots.txt,
//! sitemap.xml).

use std::path::PathBuf;
use std::time::Duration;

/// Domain used when neither `SITE_URL` nor `BASE_URL` is set.
pub const DEFAULT_SITE_URL: &str = "https://dcvisitorguide.com";

pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_WEATHER_DELAY_MS: u64 = 500;

pub const DEFAULT_STATIC_DIR: &str = "public";

/// Process-wide configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL without a trailing slash, e.g. `https://dcvisitorguide.com`
    pub site_url: String,
    pub port: u16,
    /// Directory of `<document>.json` files overriding the embedded content
    pub content_dir: Option<PathBuf>,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Artificial latency of the mock weather endpoint
    pub weather_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            port: DEFAULT_PORT,
            content_dir: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            weather_delay: Duration::from_millis(DEFAULT_WEATHER_DELAY_MS),
        }
    }
}

impl SiteConfig {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Malformed numbers fall back to their defaults; an empty site URL
    /// falls back to [`DEFAULT_SITE_URL`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let site_url = lookup("SITE_URL")
            .or_else(|| lookup("BASE_URL"))
            .map(|url| normalize_base_url(&url))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

        let port = parse_or_default(&lookup, "PORT", DEFAULT_PORT);

        let weather_delay_ms =
            parse_or_default(&lookup, "WEATHER_DELAY_MS", DEFAULT_WEATHER_DELAY_MS);

        let content_dir = lookup("CONTENT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        Self {
            site_url,
            port,
            content_dir,
            static_dir,
            weather_delay: Duration::from_millis(weather_delay_ms),
        }
    }

    /// Canonical URL for a site path.
    ///
    /// `canonical_url("/map")` and `canonical_url("map")` both yield
    /// `<base>/map`; the root path yields `<base>/`.
    pub fn canonical_url(&self, path: &str) -> String {
        format!("{}/{}", self.site_url, path.trim_start_matches('/'))
    }

    pub fn sitemap_url(&self) -> String {
        self.canonical_url("sitemap.xml")
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
    }
}
