//! Closing call-to-action banner.

use askama::Template;

use crate::content::{CtaSection, Link};

#[derive(Template)]
#[template(path = "sections/final_cta.html")]
struct FinalCtaTemplate<'a> {
    title: &'a str,
    description: &'a str,
    primary: &'a Link,
    secondary: Option<&'a Link>,
}

pub fn render(section: &CtaSection) -> askama::Result<String> {
    FinalCtaTemplate {
        title: &section.title,
        description: &section.description,
        primary: &section.primary,
        secondary: section.secondary.as_ref(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_and_secondary_links() {
        let section = CtaSection {
            title: "Ready?".to_string(),
            description: "Go".to_string(),
            primary: Link { label: "See attractions".to_string(), href: "/attractions".to_string() },
            secondary: Some(Link { label: "Open the map".to_string(), href: "/map".to_string() }),
        };
        let html = render(&section).unwrap();
        assert!(html.contains("See attractions"));
        assert!(html.contains("Open the map"));
        assert_eq!(html.matches("class=\"button").count(), 2);

        let html = render(&CtaSection { secondary: None, ..section }).unwrap();
        assert_eq!(html.matches("class=\"button").count(), 1);
    }
}
