//! Section Composer
//!
//! Assembles a page from its content document and the page's fixed, ordered
//! list of sections. Each section pulls its own slice of the document; a
//! page listing a section its document lacks fails with
//! [`ComposeError::MissingSection`] at render time.

use thiserror::Error;

use crate::config::SiteConfig;
use crate::content::{ContentDocument, DocumentId};
use crate::site::pages::PageDefinition;
use crate::site::sections::{
    categories, contact_form, faq, final_cta, hero, highlights, map, places, seo, subcategories,
    weather_widget,
};

/// A visual block of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Categories,
    Highlights,
    Subcategories,
    Places,
    Seo,
    Faq,
    Map,
    WeatherWidget,
    ContactForm,
    FinalCta,
}

impl SectionKind {
    /// Document key this section reads, `None` for structural sections.
    pub fn document_key(&self) -> Option<&'static str> {
        match self {
            SectionKind::Hero => Some("hero"),
            SectionKind::Categories => Some("categories"),
            SectionKind::Highlights => Some("highlights"),
            SectionKind::Subcategories => Some("subcategories"),
            SectionKind::Places => Some("places"),
            SectionKind::Seo => Some("seo"),
            SectionKind::Faq => Some("faq"),
            SectionKind::Map => Some("mapSection"),
            SectionKind::FinalCta => Some("finalCTA"),
            SectionKind::WeatherWidget | SectionKind::ContactForm => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Categories => "categories",
            SectionKind::Highlights => "highlights",
            SectionKind::Subcategories => "subcategories",
            SectionKind::Places => "places",
            SectionKind::Seo => "seo",
            SectionKind::Faq => "faq",
            SectionKind::Map => "map",
            SectionKind::WeatherWidget => "weather-widget",
            SectionKind::ContactForm => "contact-form",
            SectionKind::FinalCta => "final-cta",
        }
    }
}

#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("section '{section}' is missing from content document '{document}'")]
    MissingSection {
        document: DocumentId,
        section: &'static str,
    },

    #[error("failed to render section '{section}': {source}")]
    Render {
        section: &'static str,
        #[source]
        source: askama::Error,
    },
}

/// Page-level metadata consumed by the layout `<head>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Absent for pages that must not be indexed
    pub canonical_url: Option<String>,
    pub path: String,
}

impl PageMeta {
    pub fn new(title: &str, description: &str, path: &str, config: &SiteConfig) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            canonical_url: Some(config.canonical_url(path)),
            path: path.to_string(),
        }
    }
}

/// Rendered sections of one page, in page order.
#[derive(Debug, Clone)]
pub struct ComposedPage {
    pub meta: PageMeta,
    pub sections: Vec<String>,
}

pub fn compose(
    page: &PageDefinition,
    document: &ContentDocument,
    config: &SiteConfig,
) -> Result<ComposedPage, ComposeError> {
    let meta = PageMeta::new(
        &document.meta.title,
        &document.meta.description,
        page.path,
        config,
    );

    let sections = page
        .sections
        .iter()
        .map(|kind| render_section(*kind, page.document, document))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ComposedPage { meta, sections })
}

/// Render one section from its slice of `document`.
pub fn render_section(
    kind: SectionKind,
    id: DocumentId,
    document: &ContentDocument,
) -> Result<String, ComposeError> {
    let rendered = match kind {
        SectionKind::Hero => hero::render(require(&document.hero, kind, id)?),
        SectionKind::Categories => categories::render(require(&document.categories, kind, id)?),
        SectionKind::Highlights => highlights::render(require(&document.highlights, kind, id)?),
        SectionKind::Subcategories => {
            subcategories::render(require(&document.subcategories, kind, id)?)
        }
        SectionKind::Places => places::render(require(&document.places, kind, id)?),
        SectionKind::Seo => seo::render(require(&document.seo, kind, id)?),
        SectionKind::Faq => faq::render(require(&document.faq, kind, id)?),
        SectionKind::Map => map::render(require(&document.map_section, kind, id)?),
        SectionKind::FinalCta => final_cta::render(require(&document.final_cta, kind, id)?),
        SectionKind::WeatherWidget => weather_widget::render(),
        SectionKind::ContactForm => contact_form::render(),
    };

    rendered.map_err(|source| ComposeError::Render {
        section: kind.name(),
        source,
    })
}

fn require<T>(slot: &Option<T>, kind: SectionKind, id: DocumentId) -> Result<&T, ComposeError> {
    slot.as_ref().ok_or(ComposeError::MissingSection {
        document: id,
        section: kind.document_key().unwrap_or(kind.name()),
    })
}
