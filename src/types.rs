//! Core types for the handbook QA system

use serde::{Deserialize, Serialize};

/// A titled span of handbook text between two detected headers
///
/// Sections are produced in document order by the segmenter. Order is
/// significant: adjacent-section lookups during ranking depend on it.
/// Titles are not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Detected header text, or "Introduction" for leading body text
    pub title: String,
    /// Verbatim text between this header and the next
    pub content: String,
}

impl Section {
    /// Create a new section
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A section annotated with a relevance score
///
/// Used transiently during ranking; never persisted.
#[derive(Debug, Clone)]
pub struct ScoredSection {
    /// The underlying section
    pub section: Section,
    /// Final relevance score (after the policy-indicator boost)
    pub score: f32,
}
