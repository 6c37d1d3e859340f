//! Document segmentation
//!
//! Splits raw handbook text into an ordered sequence of titled sections
//! based on heuristic header detection. Ordering is top-to-bottom document
//! order and is load-bearing for neighbor expansion during ranking.

pub mod rules;

pub use rules::is_header_line;

use crate::types::Section;
use tracing::debug;

/// Fallback title for body text before the first detected header
pub const INTRODUCTION_TITLE: &str = "Introduction";

/// Split raw document text into titled sections.
///
/// A "current section" accumulator starts as an empty "Introduction". Each
/// header line closes the accumulator (if it holds content) and opens a new
/// section titled with the header's trimmed text. Non-header, non-blank
/// lines are appended verbatim with a trailing newline; blank lines are
/// dropped. Empty input yields an empty sequence.
pub fn segment(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::new(INTRODUCTION_TITLE, "");

    for line in text.lines() {
        let trimmed = line.trim();

        // Skip empty lines at the start of a section
        if current.content.is_empty() && trimmed.is_empty() {
            continue;
        }

        if is_header_line(trimmed) {
            if !current.content.trim().is_empty() {
                sections.push(current.clone());
            }
            current = Section::new(trimmed, "");
        } else if !trimmed.is_empty() {
            current.content.push_str(line);
            current.content.push('\n');
        }
    }

    // Close the final section
    if !current.content.trim().is_empty() {
        sections.push(current);
    }

    debug!("Segmented document into {} sections", sections.len());
    sections
}
