//! Corpus store
//!
//! Holds the sections of the currently active handbook. Exactly one corpus
//! is active at a time: it is created at startup from a default document if
//! one is configured, replaced wholesale by a successful upload, and never
//! partially updated. Readers take an `Arc` snapshot, so a ranking operation
//! always observes one consistent corpus even if an upload lands mid-flight.

use crate::types::Section;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Where the active corpus came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorpusSource {
    /// Loaded from the configured default document at startup
    Default,
    /// Uploaded through the HTTP API
    Upload {
        /// Original filename of the upload, if provided
        filename: Option<String>,
    },
}

/// One immutable snapshot of the segmented handbook
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Sections in document order
    pub sections: Vec<Section>,
    /// Origin of this corpus
    pub source: CorpusSource,
    /// Length of the raw extracted text in bytes
    pub content_len: usize,
    /// When this corpus became active
    pub loaded_at: DateTime<Utc>,
}

impl Corpus {
    /// Build a corpus from segmented sections
    pub fn new(sections: Vec<Section>, source: CorpusSource, content_len: usize) -> Self {
        Self {
            sections,
            source,
            content_len,
            loaded_at: Utc::now(),
        }
    }
}

/// Read-only projection of corpus state for the status surface
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStatus {
    /// Whether a non-empty corpus is loaded
    pub has_handbook: bool,
    /// Number of sections in the active corpus
    pub sections: usize,
    /// Titles of all sections, in document order
    pub section_titles: Vec<String>,
    /// Whether the active corpus is the configured default document
    pub is_default_handbook: bool,
}

/// Shared, atomically replaceable corpus slot
///
/// Whole-value replacement only: `replace` swaps the `Arc`, `snapshot`
/// clones it. There is no in-place mutation of the section list.
pub struct CorpusStore {
    inner: RwLock<Option<Arc<Corpus>>>,
}

impl CorpusStore {
    /// Create an empty store (no handbook loaded)
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Take a consistent snapshot of the active corpus, if any
    pub fn snapshot(&self) -> Option<Arc<Corpus>> {
        self.inner.read().clone()
    }

    /// Replace the active corpus wholesale
    pub fn replace(&self, corpus: Corpus) {
        info!(
            "Corpus replaced: {} sections, {} bytes of text",
            corpus.sections.len(),
            corpus.content_len
        );
        *self.inner.write() = Some(Arc::new(corpus));
    }

    /// Status projection for the HTTP status endpoint
    pub fn status(&self) -> CorpusStatus {
        match self.snapshot() {
            Some(corpus) => CorpusStatus {
                has_handbook: !corpus.sections.is_empty(),
                sections: corpus.sections.len(),
                section_titles: corpus.sections.iter().map(|s| s.title.clone()).collect(),
                is_default_handbook: corpus.source == CorpusSource::Default,
            },
            None => CorpusStatus {
                has_handbook: false,
                sections: 0,
                section_titles: Vec::new(),
                is_default_handbook: false,
            },
        }
    }
}

impl Default for CorpusStore {
    fn default() -> Self {
        Self::new()
    }
}
