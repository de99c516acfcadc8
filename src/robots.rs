//! robots.txt and sitemap.xml generation.

use crate::config::SiteConfig;
use crate::site::PageDefinition;

/// `Cache-Control` value for both crawler files (24 hours).
pub const CRAWLER_CACHE_CONTROL: &str = "public, max-age=86400";

const DISALLOWED: &[&str] = &["/api/"];

pub fn robots_txt(config: &SiteConfig) -> String {
    let mut lines = Vec::new();
    lines.push("User-agent: *".to_string());
    lines.push("Allow: /".to_string());
    for path in DISALLOWED {
        lines.push(format!("Disallow: {}", path));
    }
    lines.push(String::new());
    lines.push(format!("Sitemap: {}", config.sitemap_url()));
    lines.push(String::new());
    lines.join("\n")
}

pub fn sitemap_xml(config: &SiteConfig, pages: &[PageDefinition]) -> String {
    let mut lines = Vec::new();
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#.to_string());
    for page in pages {
        let priority = if page.path == "/" { "1.0" } else { "0.8" };
        lines.push("  <url>".to_string());
        lines.push(format!("    <loc>{}</loc>", xml_escape(&config.canonical_url(page.path))));
        lines.push("    <changefreq>weekly</changefreq>".to_string());
        lines.push(format!("    <priority>{}</priority>", priority));
        lines.push("  </url>".to_string());
    }
    lines.push("</urlset>".to_string());
    lines.push(String::new());
    lines.join("\n")
}

fn xml_escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::PAGES;

    fn sitemap_lines(body: &str) -> Vec<&str> {
        body.lines().filter(|l| l.starts_with("Sitemap:")).collect()
    }

    #[test]
    fn test_robots_uses_configured_base() {
        let config = SiteConfig {
            site_url: "https://example.org".to_string(),
            ..SiteConfig::default()
        };
        let body = robots_txt(&config);
        assert_eq!(sitemap_lines(&body), vec!["Sitemap: https://example.org/sitemap.xml"]);
        assert!(body.starts_with("User-agent: *\n"));
        assert!(body.contains("Disallow: /api/"));
    }

    #[test]
    fn test_robots_fallback_base() {
        let config = SiteConfig::from_lookup(|_| None);
        let body = robots_txt(&config);
        assert_eq!(
            sitemap_lines(&body),
            vec!["Sitemap: https://dcvisitorguide.com/sitemap.xml"]
        );
    }

    #[test]
    fn test_sitemap_lists_every_page() {
        let config = SiteConfig::default();
        let xml = sitemap_xml(&config, PAGES);
        assert_eq!(xml.matches("<loc>").count(), PAGES.len());
        assert!(xml.contains("<loc>https://dcvisitorguide.com/</loc>"));
        assert!(xml.contains("<loc>https://dcvisitorguide.com/eat-and-drink</loc>"));
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a&b<c>"), "a&amp;b&lt;c&gt;");
    }
}
