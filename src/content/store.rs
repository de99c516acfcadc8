//! Content document loader.
//!
//! All documents are parsed once when the store is built and shared
//! read-only afterwards; `load` never touches the backing source again.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::content::types::{ContentDocument, DocumentId};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content document '{document}' from {path:?}: {source}")]
    Io {
        document: DocumentId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed content document '{document}': {source}")]
    Parse {
        document: DocumentId,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixtures compiled into the binary.
fn embedded_source(id: DocumentId) -> &'static str {
    match id {
        DocumentId::Home => include_str!("../../content/home.json"),
        DocumentId::Attractions => include_str!("../../content/attractions.json"),
        DocumentId::EatAndDrink => include_str!("../../content/eat-and-drink.json"),
        DocumentId::Entertainment => include_str!("../../content/entertainment.json"),
        DocumentId::Transportation => include_str!("../../content/transportation.json"),
        DocumentId::Weather => include_str!("../../content/weather.json"),
        DocumentId::Map => include_str!("../../content/map.json"),
        DocumentId::About => include_str!("../../content/about.json"),
        DocumentId::Contact => include_str!("../../content/contact.json"),
    }
}

/// Immutable set of parsed content documents, one per [`DocumentId`].
#[derive(Debug, Clone)]
pub struct ContentStore {
    documents: FxHashMap<DocumentId, Arc<ContentDocument>>,
}

impl ContentStore {
    /// Parse the fixtures embedded at build time.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::build(|id| Ok(embedded_source(id).to_string()))
    }

    /// Parse `<dir>/<document>.json` for every document id.
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        Self::build(|id| {
            let path = dir.join(id.file_name());
            std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
                document: id,
                path,
                source,
            })
        })
    }

    fn build<F>(read: F) -> Result<Self, ContentError>
    where
        F: Fn(DocumentId) -> Result<String, ContentError>,
    {
        let mut documents = FxHashMap::default();
        for id in DocumentId::ALL {
            let raw = read(id)?;
            let document = parse_document(id, &raw)?;
            documents.insert(id, Arc::new(document));
        }
        tracing::debug!("Parsed {} content documents", documents.len());
        Ok(Self { documents })
    }

    /// Shared handle to a document. Repeated calls return the same value.
    pub fn load(&self, id: DocumentId) -> Arc<ContentDocument> {
        // Every id is inserted by `build`, so the lookup cannot miss.
        Arc::clone(&self.documents[&id])
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

pub fn parse_document(id: DocumentId, raw: &str) -> Result<ContentDocument, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { document: id, source })
}
