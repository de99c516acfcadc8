//! Contact form. Structural: takes no content input.

use askama::Template;

const CONTACT_EMAIL: &str = "hello@dcvisitorguide.com";

#[derive(Template)]
#[template(path = "sections/contact_form.html")]
struct ContactFormTemplate {
    email: &'static str,
}

pub fn render() -> askama::Result<String> {
    ContactFormTemplate { email: CONTACT_EMAIL }.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_fields() {
        let html = render().unwrap();
        assert!(html.contains("<form"));
        for field in [r#"name="name""#, r#"name="email""#, r#"name="message""#] {
            assert!(html.contains(field), "missing {}", field);
        }
        assert!(html.contains(CONTACT_EMAIL));
    }
}
