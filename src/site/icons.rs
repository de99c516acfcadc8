//! Icon registry
//!
//! Content records name icons by string key. Keys resolve through a fixed
//! table; anything unknown renders the default icon.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Icon {
    Landmark,
    Museum,
    Utensils,
    Coffee,
    Music,
    Ticket,
    Star,
    Calendar,
    Train,
    Bus,
    Bike,
    MapPin,
    Sun,
    Cloud,
    Tree,
    Info,
    #[default]
    Default,
}

/// Key → icon lookup table. Keys are matched case-insensitively.
const ICON_TABLE: &[(&str, Icon)] = &[
    ("landmark", Icon::Landmark),
    ("monument", Icon::Landmark),
    ("museum", Icon::Museum),
    ("utensils", Icon::Utensils),
    ("restaurant", Icon::Utensils),
    ("coffee", Icon::Coffee),
    ("music", Icon::Music),
    ("ticket", Icon::Ticket),
    ("star", Icon::Star),
    ("calendar", Icon::Calendar),
    ("train", Icon::Train),
    ("metro", Icon::Train),
    ("bus", Icon::Bus),
    ("bike", Icon::Bike),
    ("map-pin", Icon::MapPin),
    ("map", Icon::MapPin),
    ("sun", Icon::Sun),
    ("cloud", Icon::Cloud),
    ("tree", Icon::Tree),
    ("park", Icon::Tree),
    ("info", Icon::Info),
];

impl Icon {
    pub fn from_key(key: &str) -> Icon {
        let key = key.trim();
        ICON_TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, icon)| *icon)
            .unwrap_or_default()
    }

    /// Resolve an optional record icon key.
    pub fn resolve(key: Option<&str>) -> Icon {
        key.map(Icon::from_key).unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Landmark => "landmark",
            Icon::Museum => "museum",
            Icon::Utensils => "utensils",
            Icon::Coffee => "coffee",
            Icon::Music => "music",
            Icon::Ticket => "ticket",
            Icon::Star => "star",
            Icon::Calendar => "calendar",
            Icon::Train => "train",
            Icon::Bus => "bus",
            Icon::Bike => "bike",
            Icon::MapPin => "map-pin",
            Icon::Sun => "sun",
            Icon::Cloud => "cloud",
            Icon::Tree => "tree",
            Icon::Info => "info",
            Icon::Default => "circle",
        }
    }

    /// Inner SVG markup (24x24 viewBox, stroke icons).
    pub fn svg_path(&self) -> &'static str {
        match self {
            Icon::Landmark => r#"<path d="M3 22h18"/><path d="M6 18v-7"/><path d="M10 18v-7"/><path d="M14 18v-7"/><path d="M18 18v-7"/><path d="m12 2 8 5H4Z"/>"#,
            Icon::Museum => r#"<path d="M2 20h20"/><path d="M4 20V9"/><path d="M20 20V9"/><path d="M9 20v-6h6v6"/><path d="m12 3 10 6H2Z"/>"#,
            Icon::Utensils => r#"<path d="M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2"/><path d="M7 2v20"/><path d="M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7"/>"#,
            Icon::Coffee => r#"<path d="M17 8h1a4 4 0 1 1 0 8h-1"/><path d="M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z"/><path d="M6 2v2"/><path d="M10 2v2"/><path d="M14 2v2"/>"#,
            Icon::Music => r#"<path d="M9 18V5l12-2v13"/><circle cx="6" cy="18" r="3"/><circle cx="18" cy="16" r="3"/>"#,
            Icon::Ticket => r#"<path d="M2 9a3 3 0 0 1 0 6v2a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-2a3 3 0 0 1 0-6V7a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2Z"/><path d="M13 5v2"/><path d="M13 17v2"/><path d="M13 11v2"/>"#,
            Icon::Star => r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
            Icon::Calendar => r#"<rect width="18" height="18" x="3" y="4" rx="2"/><path d="M16 2v4"/><path d="M8 2v4"/><path d="M3 10h18"/>"#,
            Icon::Train => r#"<rect width="16" height="16" x="4" y="3" rx="2"/><path d="M4 11h16"/><path d="M12 3v8"/><path d="m8 19-2 3"/><path d="m18 22-2-3"/>"#,
            Icon::Bus => r#"<path d="M8 6v6"/><path d="M15 6v6"/><path d="M2 12h19.6"/><path d="M18 18h3s.5-1.7.8-2.8c.1-.4.2-.8.2-1.2 0-.4-.1-.8-.2-1.2l-1.4-5C20.1 6.8 19.1 6 18 6H4a2 2 0 0 0-2 2v10h3"/><circle cx="7" cy="18" r="2"/><circle cx="16" cy="18" r="2"/>"#,
            Icon::Bike => r#"<circle cx="18.5" cy="17.5" r="3.5"/><circle cx="5.5" cy="17.5" r="3.5"/><circle cx="15" cy="5" r="1"/><path d="M12 17.5V14l-3-3 4-3 2 3h2"/>"#,
            Icon::MapPin => r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#,
            Icon::Sun => r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#,
            Icon::Cloud => r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#,
            Icon::Tree => r#"<path d="M12 22v-7"/><path d="M17 8A5 5 0 0 0 7 8a4 4 0 0 0 0 8h10a4 4 0 0 0 0-8Z"/>"#,
            Icon::Info => r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
            Icon::Default => r#"<circle cx="12" cy="12" r="10"/>"#,
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
