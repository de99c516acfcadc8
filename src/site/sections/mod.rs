//! Section renderers
//!
//! Each module renders one visual block of a page from its slice of the
//! content document (structural sections take no input). Sections expecting
//! a list render an explicit empty-state message when the list is empty.
//! Every list entry is emitted with a `data-item` attribute carrying its
//! rendering key.

pub mod hero;
pub mod categories;
pub mod highlights;
pub mod subcategories;
pub mod places;
pub mod seo;
pub mod faq;
pub mod map;
pub mod weather_widget;
pub mod contact_form;
pub mod final_cta;

use crate::content::SectionRecord;
use crate::site::icons::Icon;

/// Record prepared for templates: icon resolved, rendering key fixed.
pub(crate) struct RecordItem<'a> {
    pub key: String,
    pub name: &'a str,
    pub icon: Icon,
    pub href: Option<&'a str>,
    pub description: &'a str,
}

/// Key is the record's `id` when present, its position otherwise.
pub(crate) fn record_items(records: &[SectionRecord]) -> Vec<RecordItem<'_>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| RecordItem {
            key: record.id.clone().unwrap_or_else(|| index.to_string()),
            name: &record.name,
            icon: Icon::resolve(record.icon.as_deref()),
            href: record.href.as_deref(),
            description: &record.description,
        })
        .collect()
}

/// Number of list entries in a rendered fragment.
///
/// Only counts the attribute inside a tag: escaped text never contains a
/// literal `"`, so `data-item="` in content cannot match.
pub fn count_items(html: &str) -> usize {
    html.matches(r#" data-item=""#).count()
}
