//! Page Composition
//!
//! Pages are assembled from a typed content document and a fixed, ordered
//! list of presentational sections.
//!
//! ## Modules
//! - `pages`: route registry (path, nav label, document, section order)
//! - `composer`: renders a page's sections from its document
//! - `sections`: one renderer per section kind
//! - `layout`: full HTML document around the composed sections
//! - `icons`: string key → icon lookup with a default fallback

pub mod icons;
pub mod sections;
pub mod composer;
pub mod pages;
pub mod layout;

pub use composer::{compose, ComposeError, ComposedPage, PageMeta, SectionKind};
pub use icons::Icon;
pub use layout::{compose_not_found, render_page};
pub use pages::{PageDefinition, PAGES};
