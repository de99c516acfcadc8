//! Static export
//!
//! Writes every registered page plus robots.txt and sitemap.xml to a
//! directory, mirroring what the server would return.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::robots;
use crate::site::{compose, render_page, PageDefinition, PAGES};

/// Output file for a route: `/` → `index.html`, `/map` → `map/index.html`.
pub fn output_path(out_dir: &Path, page: &PageDefinition) -> PathBuf {
    let route = page.path.trim_matches('/');
    if route.is_empty() {
        out_dir.join("index.html")
    } else {
        out_dir.join(route).join("index.html")
    }
}

/// Render the whole site into `out_dir`, returning the files written.
pub fn export_site(config: &SiteConfig, content: &ContentStore, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for page in PAGES {
        let document = content.load(page.document);
        let composed = compose(page, &document, config)
            .with_context(|| format!("composing {}", page.path))?;
        let html = render_page(&composed).with_context(|| format!("rendering {}", page.path))?;

        let path = output_path(out_dir, page);
        write_file(&path, &html)?;
        tracing::info!("Wrote {} ({} sections)", path.display(), composed.sections.len());
        written.push(path);
    }

    let robots_path = out_dir.join("robots.txt");
    write_file(&robots_path, &robots::robots_txt(config))?;
    written.push(robots_path);

    let sitemap_path = out_dir.join("sitemap.xml");
    write_file(&sitemap_path, &robots::sitemap_xml(config, PAGES))?;
    written.push(sitemap_path);

    Ok(written)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let out = Path::new("/tmp/site");
        assert_eq!(output_path(out, &PAGES[0]), Path::new("/tmp/site/index.html"));
        let map = PAGES.iter().find(|p| p.path == "/map").unwrap();
        assert_eq!(output_path(out, map), Path::new("/tmp/site/map/index.html"));
    }

    #[test]
    fn test_export_writes_every_page() {
        let out_dir = std::env::temp_dir().join(format!("dc_visitor_guide_export_{}", std::process::id()));
        let config = SiteConfig::default();
        let content = ContentStore::embedded().unwrap();

        let written = export_site(&config, &content, &out_dir).unwrap();
        assert_eq!(written.len(), PAGES.len() + 2);
        for path in &written {
            assert!(path.exists(), "{} missing", path.display());
        }

        let home = fs::read_to_string(out_dir.join("index.html")).unwrap();
        assert!(home.contains("Discover Washington DC"));

        let _ = fs::remove_dir_all(&out_dir);
    }
}
