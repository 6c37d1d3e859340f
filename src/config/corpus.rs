//! Corpus configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Corpus / default handbook configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorpusConfig {
    /// Optional handbook loaded at startup. A failed load is logged and the
    /// service starts with no corpus.
    #[serde(default)]
    pub default_document: Option<PathBuf>,
}
