//! Subcategory filter buttons.
//!
//! An empty list renders an explicit "no subcategories" message instead of
//! an empty button row.

use askama::Template;

use crate::content::{Subcategory, SubcategorySection};

pub const EMPTY_STATE: &str = "No subcategories found.";

#[derive(Template)]
#[template(path = "sections/subcategories.html")]
struct SubcategoryButtonsTemplate<'a> {
    title: &'a str,
    items: &'a [Subcategory],
    empty_state: &'static str,
}

pub fn render(section: &SubcategorySection) -> askama::Result<String> {
    SubcategoryButtonsTemplate {
        title: &section.title,
        items: &section.items,
        empty_state: EMPTY_STATE,
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::sections::count_items;

    fn subcategory(id: u32, name: &str) -> Subcategory {
        Subcategory {
            id,
            slug: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_no_subcategories_found() {
        let section = SubcategorySection { title: "Browse".to_string(), items: vec![] };
        let html = render(&section).unwrap();
        assert!(html.contains("No subcategories found"));
        assert_eq!(count_items(&html), 0);
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_one_button_per_subcategory() {
        let items: Vec<Subcategory> = ["Restaurants", "Cafes", "Food Halls", "Bars"]
            .iter()
            .enumerate()
            .map(|(i, name)| subcategory(i as u32 + 1, name))
            .collect();
        let section = SubcategorySection { title: "Browse".to_string(), items };
        let html = render(&section).unwrap();
        assert_eq!(count_items(&html), 4);
        assert!(html.contains(r#"data-item="3""#));
        assert!(html.contains("#food-halls"));
        assert!(!html.contains(EMPTY_STATE));
    }
}
