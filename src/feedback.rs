//! In-memory feedback store
//!
//! Records helpful / not-helpful verdicts on answers and derives simple
//! aggregate statistics. Memory-only by design; entries do not survive a
//! restart.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// Number of sections reported in the most-helpful ranking
const TOP_SECTIONS: usize = 5;

/// Verdict attached to an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Helpful,
    NotHelpful,
}

/// One recorded piece of feedback
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEntry {
    /// Client-side message identifier
    pub message_id: String,
    /// The verdict
    pub verdict: Verdict,
    /// The question that was asked
    pub question: String,
    /// The answer it received
    pub answer: String,
    /// Titles of the sections the answer was built from
    pub sections: Vec<String>,
    /// When the feedback arrived
    pub timestamp: DateTime<Utc>,
}

/// Helpful-vote count for a section title
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionVotes {
    pub section: String,
    pub count: usize,
}

/// Aggregate feedback statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub total: usize,
    pub helpful: usize,
    pub not_helpful: usize,
    /// Top sections by helpful-vote count
    pub most_helpful_sections: Vec<SectionVotes>,
}

/// Thread-safe in-memory feedback log
pub struct FeedbackStore {
    entries: RwLock<Vec<FeedbackEntry>>,
}

impl FeedbackStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Record one feedback entry
    pub fn record(&self, entry: FeedbackEntry) {
        info!(
            "Feedback received: {:?} for message {}",
            entry.verdict, entry.message_id
        );
        self.entries.write().push(entry);
    }

    /// Compute aggregate statistics over all recorded feedback
    pub fn stats(&self) -> FeedbackStats {
        let entries = self.entries.read();

        let helpful = entries
            .iter()
            .filter(|e| e.verdict == Verdict::Helpful)
            .count();

        let mut votes: HashMap<&str, usize> = HashMap::new();
        for entry in entries.iter().filter(|e| e.verdict == Verdict::Helpful) {
            for section in &entry.sections {
                *votes.entry(section.as_str()).or_insert(0) += 1;
            }
        }

        let mut most_helpful: Vec<SectionVotes> = votes
            .into_iter()
            .map(|(section, count)| SectionVotes {
                section: section.to_string(),
                count,
            })
            .collect();
        // Count descending, title ascending for deterministic output
        most_helpful.sort_by(|a, b| b.count.cmp(&a.count).then(a.section.cmp(&b.section)));
        most_helpful.truncate(TOP_SECTIONS);

        FeedbackStats {
            total: entries.len(),
            helpful,
            not_helpful: entries.len() - helpful,
            most_helpful_sections: most_helpful,
        }
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}
