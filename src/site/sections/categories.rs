//! Category cards: icon, name, description, optional link.

use askama::Template;

use crate::content::RecordSection;
use crate::site::sections::{record_items, RecordItem};

pub const EMPTY_STATE: &str = "No categories available.";

#[derive(Template)]
#[template(path = "sections/categories.html")]
struct CategoriesTemplate<'a> {
    title: &'a str,
    intro: Option<&'a str>,
    items: Vec<RecordItem<'a>>,
    empty_state: &'static str,
}

pub fn render(section: &RecordSection) -> askama::Result<String> {
    CategoriesTemplate {
        title: &section.title,
        intro: section.intro.as_deref(),
        items: record_items(&section.items),
        empty_state: EMPTY_STATE,
    }
    .render()
}
