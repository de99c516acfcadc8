//! Place cards: cover image (or placeholder), name, short description.

use askama::Template;

use crate::content::{Place, PlaceSection};

pub const EMPTY_STATE: &str = "No places found.";

struct PlaceCard<'a> {
    id: u32,
    slug: &'a str,
    name: &'a str,
    description: Option<&'a str>,
    image_url: Option<&'a str>,
    alt_text: &'a str,
}

impl<'a> From<&'a Place> for PlaceCard<'a> {
    fn from(place: &'a Place) -> Self {
        let cover = place.cover();
        Self {
            id: place.id,
            slug: &place.slug,
            name: &place.name,
            description: place.description.as_deref(),
            image_url: cover.map(|image| image.image_url.as_str()),
            // Fall back to the place name when the image has no alt text
            alt_text: cover
                .map(|image| image.alt_text.as_str())
                .filter(|alt| !alt.is_empty())
                .unwrap_or(place.name.as_str()),
        }
    }
}

#[derive(Template)]
#[template(path = "sections/places.html")]
struct PlacesTemplate<'a> {
    title: &'a str,
    cards: Vec<PlaceCard<'a>>,
    empty_state: &'static str,
}

pub fn render(section: &PlaceSection) -> askama::Result<String> {
    PlacesTemplate {
        title: &section.title,
        cards: section.items.iter().map(PlaceCard::from).collect(),
        empty_state: EMPTY_STATE,
    }
    .render()
}
