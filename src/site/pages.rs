//! Page registry: every routable page, its backing document and its
//! section order.

use crate::content::DocumentId;
use crate::site::composer::SectionKind::{self, *};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDefinition {
    /// Route path, always starting with a slash
    pub path: &'static str,
    /// Label in the header navigation
    pub nav_label: &'static str,
    pub document: DocumentId,
    pub sections: &'static [SectionKind],
}

pub static PAGES: &[PageDefinition] = &[
    PageDefinition {
        path: "/",
        nav_label: "Home",
        document: DocumentId::Home,
        sections: &[Hero, Categories, Highlights, Seo, Map, FinalCta],
    },
    PageDefinition {
        path: "/attractions",
        nav_label: "Attractions",
        document: DocumentId::Attractions,
        sections: &[Hero, Categories, Subcategories, Places, Faq, Seo, FinalCta],
    },
    PageDefinition {
        path: "/eat-and-drink",
        nav_label: "Eat & Drink",
        document: DocumentId::EatAndDrink,
        sections: &[Hero, Subcategories, Places, Highlights, Seo, FinalCta],
    },
    PageDefinition {
        path: "/entertainment",
        nav_label: "Entertainment",
        document: DocumentId::Entertainment,
        sections: &[Hero, Categories, Highlights, Faq, Seo, FinalCta],
    },
    PageDefinition {
        path: "/transportation",
        nav_label: "Transportation",
        document: DocumentId::Transportation,
        sections: &[Hero, Highlights, Faq, Seo, FinalCta],
    },
    PageDefinition {
        path: "/weather",
        nav_label: "Weather",
        document: DocumentId::Weather,
        sections: &[Hero, WeatherWidget, Highlights, Seo, FinalCta],
    },
    PageDefinition {
        path: "/map",
        nav_label: "Map",
        document: DocumentId::Map,
        sections: &[Hero, Map, Categories, FinalCta],
    },
    PageDefinition {
        path: "/about",
        nav_label: "About",
        document: DocumentId::About,
        sections: &[Hero, Highlights, Seo, FinalCta],
    },
    PageDefinition {
        path: "/contact",
        nav_label: "Contact",
        document: DocumentId::Contact,
        sections: &[Hero, ContactForm, Faq],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique_and_rooted() {
        for (i, page) in PAGES.iter().enumerate() {
            assert!(page.path.starts_with('/'));
            assert!(!page.sections.is_empty());
            assert!(PAGES[i + 1..].iter().all(|other| other.path != page.path));
        }
    }

    #[test]
    fn test_every_document_has_a_page() {
        for id in DocumentId::ALL {
            assert!(PAGES.iter().any(|p| p.document == id), "{} has no page", id);
        }
    }
}
