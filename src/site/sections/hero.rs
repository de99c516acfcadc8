//! Hero banner: page title, subtitle, optional background and call-to-action.

use askama::Template;

use crate::content::{HeroSection, Link};

#[derive(Template)]
#[template(path = "sections/hero.html")]
struct HeroTemplate<'a> {
    title: &'a str,
    subtitle: &'a str,
    background_image: Option<&'a str>,
    cta: Option<&'a Link>,
}

pub fn render(hero: &HeroSection) -> askama::Result<String> {
    HeroTemplate {
        title: &hero.title,
        subtitle: &hero.subtitle,
        background_image: hero.background_image.as_deref(),
        cta: hero.cta.as_ref(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(cta: Option<Link>) -> HeroSection {
        HeroSection {
            title: "Discover DC".to_string(),
            subtitle: "Monuments & museums".to_string(),
            background_image: Some("/static/images/hero.jpg".to_string()),
            cta,
        }
    }

    #[test]
    fn test_render_escapes_text() {
        let html = render(&hero(None)).unwrap();
        assert!(html.contains("Discover DC"));
        assert!(html.contains("Monuments &amp; museums"));
        assert!(html.contains("/static/images/hero.jpg"));
        assert!(!html.contains("hero-cta"));
    }

    #[test]
    fn test_render_with_cta() {
        let html = render(&hero(Some(Link {
            label: "Explore".to_string(),
            href: "/attractions".to_string(),
        })))
        .unwrap();
        assert!(html.contains("hero-cta"));
        assert!(html.contains(r#"href="/attractions""#));
        assert!(html.contains("Explore"));
    }
}
