//! Highlight list: short icon-led selling points.

use askama::Template;

use crate::content::RecordSection;
use crate::site::sections::{record_items, RecordItem};

pub const EMPTY_STATE: &str = "No highlights available.";

#[derive(Template)]
#[template(path = "sections/highlights.html")]
struct HighlightsTemplate<'a> {
    title: &'a str,
    intro: Option<&'a str>,
    items: Vec<RecordItem<'a>>,
    empty_state: &'static str,
}

pub fn render(section: &RecordSection) -> askama::Result<String> {
    HighlightsTemplate {
        title: &section.title,
        intro: section.intro.as_deref(),
        items: record_items(&section.items),
        empty_state: EMPTY_STATE,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SectionRecord;
    use crate::site::sections::count_items;

    #[test]
    fn test_highlights_counts_and_keys() {
        let section = RecordSection {
            title: "Why Visit".to_string(),
            intro: None,
            items: vec![
                SectionRecord {
                    id: Some("free".to_string()),
                    name: "Free Museums".to_string(),
                    icon: Some("museum".to_string()),
                    href: None,
                    description: "No admission".to_string(),
                },
                SectionRecord {
                    id: None,
                    name: "Cherry Blossoms".to_string(),
                    icon: None,
                    href: Some("https://example.org/blossoms".to_string()),
                    description: "Spring".to_string(),
                },
            ],
        };
        let html = render(&section).unwrap();
        assert_eq!(count_items(&html), 2);
        assert!(html.contains(r#"data-item="free""#));
        assert!(html.contains(r#"data-item="1""#));
        assert!(html.contains("Free Museums"));
        assert!(html.contains("Cherry Blossoms"));
    }

    #[test]
    fn test_attribute_text_in_content_is_not_counted() {
        let section = RecordSection {
            title: "Markup Tips".to_string(),
            intro: Some(r#"Tag cards with data-item="x""#.to_string()),
            items: vec![SectionRecord {
                id: Some("tip".to_string()),
                name: r#"<li data-item="fake">"#.to_string(),
                icon: None,
                href: None,
                description: r#"Use data-item="y" on each entry"#.to_string(),
            }],
        };
        let html = render(&section).unwrap();
        assert_eq!(count_items(&html), 1);
    }

    #[test]
    fn test_empty_highlights() {
        let section = RecordSection { title: "Why Visit".to_string(), intro: None, items: vec![] };
        let html = render(&section).unwrap();
        assert!(html.contains(EMPTY_STATE));
        assert_eq!(count_items(&html), 0);
    }
}
