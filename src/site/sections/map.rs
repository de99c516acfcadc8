//! Embedded third-party map with an optional directions link.

use askama::Template;

use crate::content::MapSection;

const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1&destination=";

#[derive(Template)]
#[template(path = "sections/map.html")]
struct MapTemplate<'a> {
    title: &'a str,
    description: &'a str,
    embed_url: &'a str,
    directions_url: Option<String>,
}

pub fn render(section: &MapSection) -> askama::Result<String> {
    MapTemplate {
        title: &section.title,
        description: &section.description,
        embed_url: &section.embed_url,
        directions_url: section.address.as_deref().map(directions_url),
    }
    .render()
}

pub fn directions_url(address: &str) -> String {
    format!("{}{}", DIRECTIONS_BASE, urlencoding::encode(address.trim()))
}
