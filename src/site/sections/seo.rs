//! Long-form SEO copy. The body is Markdown from trusted content fixtures.

use askama::Template;
use pulldown_cmark::{html, Options, Parser};

use crate::content::SeoSection;

#[derive(Template)]
#[template(path = "sections/seo.html")]
struct SeoTemplate<'a> {
    heading: &'a str,
    body_html: String,
}

pub fn render(section: &SeoSection) -> askama::Result<String> {
    SeoTemplate {
        heading: &section.heading,
        body_html: markdown_to_html(&section.body),
    }
    .render()
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_STRIKETHROUGH);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_body() {
        let section = SeoSection {
            heading: "Your Guide".to_string(),
            body: "Visit **museums**.\n\nSee [attractions](/attractions).".to_string(),
        };
        let html = render(&section).unwrap();
        assert!(html.contains("Your Guide"));
        assert!(html.contains("<strong>museums</strong>"));
        assert!(html.contains(r#"<a href="/attractions">attractions</a>"#));
        assert_eq!(html.matches("<p>").count(), 2);
    }
}
