//! Page layout: document head, header navigation, footer.

use askama::Template;

use crate::config::SiteConfig;
use crate::site::composer::{ComposeError, ComposedPage, PageMeta};
use crate::site::pages::PAGES;

pub const SITE_NAME: &str = "DC Visitor Guide";

pub const NOT_FOUND_TITLE: &str = "Page Not Found";

struct NavLink {
    label: &'static str,
    href: &'static str,
    active: bool,
}

#[derive(Template)]
#[template(path = "layout.html")]
struct LayoutTemplate<'a> {
    site_name: &'static str,
    meta: &'a PageMeta,
    nav: Vec<NavLink>,
    sections: &'a [String],
}

#[derive(Template)]
#[template(path = "sections/not_found.html")]
struct NotFoundTemplate<'a> {
    path: &'a str,
}

/// Wrap composed sections in the full HTML document.
pub fn render_page(page: &ComposedPage) -> Result<String, ComposeError> {
    let nav = PAGES
        .iter()
        .map(|p| NavLink {
            label: p.nav_label,
            href: p.path,
            active: p.path == page.meta.path,
        })
        .collect();

    LayoutTemplate {
        site_name: SITE_NAME,
        meta: &page.meta,
        nav,
        sections: &page.sections,
    }
    .render()
    .map_err(|source| ComposeError::Render { section: "layout", source })
}

/// Fallback page for unmatched routes. Carries no canonical URL and is
/// marked `noindex`.
pub fn compose_not_found(path: &str, config: &SiteConfig) -> Result<ComposedPage, ComposeError> {
    let body = NotFoundTemplate { path }
        .render()
        .map_err(|source| ComposeError::Render { section: "not-found", source })?;

    let meta = PageMeta {
        canonical_url: None,
        ..PageMeta::new(
            NOT_FOUND_TITLE,
            "The page you are looking for does not exist.",
            path,
            config,
        )
    };

    Ok(ComposedPage {
        meta,
        sections: vec![body],
    })
}
