//! Typed content documents.
//!
//! Each page is backed by one JSON document. Keys follow the fixture
//! convention (`camelCase`, `mapSection`, `finalCTA`); every section except
//! `meta` is optional and only dereferenced by pages that list it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a content domain (one document per page family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentId {
    Home,
    Attractions,
    EatAndDrink,
    Entertainment,
    Transportation,
    Weather,
    Map,
    About,
    Contact,
}

impl DocumentId {
    pub const ALL: [DocumentId; 9] = [
        DocumentId::Home,
        DocumentId::Attractions,
        DocumentId::EatAndDrink,
        DocumentId::Entertainment,
        DocumentId::Transportation,
        DocumentId::Weather,
        DocumentId::Map,
        DocumentId::About,
        DocumentId::Contact,
    ];

    /// Fixture name, also the file stem under a content directory.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentId::Home => "home",
            DocumentId::Attractions => "attractions",
            DocumentId::EatAndDrink => "eat-and-drink",
            DocumentId::Entertainment => "entertainment",
            DocumentId::Transportation => "transportation",
            DocumentId::Weather => "weather",
            DocumentId::Map => "map",
            DocumentId::About => "about",
            DocumentId::Contact => "contact",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete page document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub meta: DocumentMeta,
    pub hero: Option<HeroSection>,
    pub categories: Option<RecordSection>,
    pub highlights: Option<RecordSection>,
    pub subcategories: Option<SubcategorySection>,
    pub places: Option<PlaceSection>,
    pub seo: Option<SeoSection>,
    pub faq: Option<RecordSection>,
    pub map_section: Option<MapSection>,
    #[serde(rename = "finalCTA")]
    pub final_cta: Option<CtaSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub background_image: Option<String>,
    pub cta: Option<Link>,
}

/// A titled, ordered list of records (categories, highlights, FAQ points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSection {
    pub title: String,
    pub intro: Option<String>,
    #[serde(default)]
    pub items: Vec<SectionRecord>,
}

/// One entry of a record section.
///
/// Records have no identity beyond their position; `id`, when present, is
/// only used as a rendering key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: Option<String>,
    pub name: String,
    pub icon: Option<String>,
    pub href: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategorySection {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Subcategory>,
}

/// Subcategory reference (owned by the places catalogue).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: u32,
    pub slug: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSection {
    pub title: String,
    #[serde(default)]
    pub items: Vec<Place>,
}

/// Place reference (owned by the places catalogue).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: u32,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<PlaceImage>,
}

impl Place {
    /// Cover image shown on the place card.
    pub fn cover(&self) -> Option<&PlaceImage> {
        self.images.first()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceImage {
    pub image_url: String,
    #[serde(default)]
    pub alt_text: String,
}

/// Long-form copy block; `body` is Markdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoSection {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSection {
    pub title: String,
    pub description: String,
    pub embed_url: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaSection {
    pub title: String,
    pub description: String,
    pub primary: Link,
    pub secondary: Option<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_keys_deserialize() {
        let json = r#"{
            "meta": {"title": "T", "description": "D"},
            "mapSection": {"title": "Map", "description": "d", "embedUrl": "https://maps.example/embed"},
            "finalCTA": {"title": "Go", "description": "d", "primary": {"label": "Plan", "href": "/map"}}
        }"#;
        let doc: ContentDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.map_section.unwrap().embed_url, "https://maps.example/embed");
        assert_eq!(doc.final_cta.unwrap().primary.href, "/map");
        assert!(doc.hero.is_none());
        assert!(doc.categories.is_none());
    }

    #[test]
    fn test_missing_meta_is_rejected() {
        let result: Result<ContentDocument, _> = serde_json::from_str(r#"{"hero": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_defaults() {
        let record: SectionRecord = serde_json::from_str(r#"{"name": "Museums"}"#).unwrap();
        assert_eq!(record.name, "Museums");
        assert!(record.icon.is_none());
        assert!(record.href.is_none());
        assert!(record.description.is_empty());
    }

    #[test]
    fn test_place_cover_is_first_image() {
        let place: Place = serde_json::from_str(
            r#"{"id": 1, "slug": "zoo", "name": "National Zoo", "images": [
                {"image_url": "/a.jpg", "alt_text": "Panda"},
                {"image_url": "/b.jpg", "alt_text": "Lion"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(place.cover().map(|i| i.alt_text.as_str()), Some("Panda"));

        let bare: Place = serde_json::from_str(r#"{"id": 2, "slug": "x", "name": "X"}"#).unwrap();
        assert!(bare.cover().is_none());
    }

    #[test]
    fn test_document_ids_are_unique() {
        let mut names: Vec<&str> = DocumentId::ALL.iter().map(|d| d.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), DocumentId::ALL.len());
        assert_eq!(DocumentId::EatAndDrink.file_name(), "eat-and-drink.json");
    }
}
