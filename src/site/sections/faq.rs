//! FAQ points rendered as disclosure widgets (question = record name).

use askama::Template;

use crate::content::RecordSection;
use crate::site::sections::{record_items, RecordItem};

pub const EMPTY_STATE: &str = "No questions yet.";

#[derive(Template)]
#[template(path = "sections/faq.html")]
struct FaqTemplate<'a> {
    title: &'a str,
    intro: Option<&'a str>,
    items: Vec<RecordItem<'a>>,
    empty_state: &'static str,
}

pub fn render(section: &RecordSection) -> askama::Result<String> {
    FaqTemplate {
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
    fn test_questions_and_answers() {
        let section = RecordSection {
            title: "FAQ".to_string(),
            intro: None,
            items: vec![SectionRecord {
                id: None,
                name: "Is it free?".to_string(),
                icon: None,
                href: None,
                description: "Mostly <yes>".to_string(),
            }],
        };
        let html = render(&section).unwrap();
        assert_eq!(count_items(&html), 1);
        assert!(html.contains("<summary>Is it free?</summary>"));
        assert!(html.contains("Mostly &lt;yes&gt;"));
    }

    #[test]
    fn test_no_questions() {
        let section = RecordSection { title: "FAQ".to_string(), intro: None, items: vec![] };
        let html = render(&section).unwrap();
        assert!(html.contains(EMPTY_STATE));
        assert!(!html.contains("<details"));
    }
}
