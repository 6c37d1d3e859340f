//! Topic taxonomy for search-term expansion
//!
//! A fixed mapping from topic name to related keywords, used to broaden a
//! question's key terms with related vocabulary before scoring. Loaded once
//! at startup and passed to the ranker as plain data.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Mapping from topic name to keyword list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicTaxonomy {
    /// Topic name -> related keywords (lowercase)
    #[serde(default)]
    pub topics: BTreeMap<String, Vec<String>>,
}

impl TopicTaxonomy {
    /// Expand key terms into the final search-term set.
    ///
    /// A topic's entire keyword list is pulled in when any key term and any
    /// of the topic's keywords are substrings of one another, in either
    /// direction. The result is the key terms followed by all pulled
    /// keywords, deduplicated, order preserved.
    pub fn expand_terms(&self, key_terms: &[String]) -> Vec<String> {
        let normalized: Vec<String> = key_terms
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let mut seen = HashSet::new();
        let mut search_terms = Vec::new();
        for term in &normalized {
            if seen.insert(term.clone()) {
                search_terms.push(term.clone());
            }
        }

        for keywords in self.topics.values() {
            let relevant = normalized.iter().any(|term| {
                keywords
                    .iter()
                    .any(|kw| term.contains(kw.as_str()) || kw.contains(term.as_str()))
            });
            if relevant {
                for kw in keywords {
                    if seen.insert(kw.clone()) {
                        search_terms.push(kw.clone());
                    }
                }
            }
        }

        search_terms
    }
}

impl Default for TopicTaxonomy {
    fn default() -> Self {
        let mut topics = BTreeMap::new();
        topics.insert(
            "reporting issues".to_string(),
            to_strings(&[
                "grievance",
                "complaint",
                "report",
                "issue",
                "concern",
                "problem",
                "misconduct",
                "violation",
                "harassment",
                "discrimination",
                "safety",
                "ethics",
            ]),
        );
        topics.insert(
            "leave".to_string(),
            to_strings(&[
                "vacation", "sick", "pto", "time off", "holiday", "leave", "absence",
            ]),
        );
        topics.insert(
            "benefits".to_string(),
            to_strings(&[
                "health",
                "insurance",
                "retirement",
                "medical",
                "dental",
                "vision",
                "401k",
                "pension",
                "perks",
                "wellness",
                "gym",
                "fitness",
                "mental health",
                "wellbeing",
                "programs",
                "benefits",
            ]),
        );
        topics.insert(
            "conduct".to_string(),
            to_strings(&[
                "behavior",
                "conduct",
                "discipline",
                "policy",
                "standard",
                "rule",
                "guideline",
                "expectation",
            ]),
        );
        topics.insert(
            "safety".to_string(),
            to_strings(&[
                "safety", "security", "emergency", "hazard", "incident", "accident", "injury",
                "health",
            ]),
        );
        topics.insert(
            "wellness".to_string(),
            to_strings(&[
                "wellness",
                "mental health",
                "gym",
                "fitness",
                "health",
                "wellbeing",
                "work-life",
                "balance",
                "programs",
                "resources",
                "memberships",
            ]),
        );
        Self { topics }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_exact_keyword_pulls_topic() {
        let taxonomy = TopicTaxonomy::default();
        let expanded = taxonomy.expand_terms(&terms(&["vacation"]));
        // The whole "leave" topic comes along
        assert!(expanded.contains(&"pto".to_string()));
        assert!(expanded.contains(&"time off".to_string()));
        assert!(expanded.contains(&"absence".to_string()));
    }

    #[test]
    fn test_substring_match_is_bidirectional() {
        let taxonomy = TopicTaxonomy::default();
        // "vacations" contains keyword "vacation"
        let expanded = taxonomy.expand_terms(&terms(&["vacations"]));
        assert!(expanded.contains(&"pto".to_string()));
        // "sic" is contained in keyword "sick"
        let expanded = taxonomy.expand_terms(&terms(&["sic"]));
        assert!(expanded.contains(&"holiday".to_string()));
    }

    #[test]
    fn test_unmatched_terms_pass_through() {
        let taxonomy = TopicTaxonomy::default();
        let expanded = taxonomy.expand_terms(&terms(&["parking spot"]));
        assert_eq!(expanded, terms(&["parking spot"]));
    }

    #[test]
    fn test_expansion_deduplicates() {
        let taxonomy = TopicTaxonomy::default();
        let expanded = taxonomy.expand_terms(&terms(&["sick", "vacation", "sick"]));
        let sick_count = expanded.iter().filter(|t| t.as_str() == "sick").count();
        assert_eq!(sick_count, 1);
        // Key terms come first, in their original order
        assert_eq!(expanded[0], "sick");
        assert_eq!(expanded[1], "vacation");
    }

    #[test]
    fn test_terms_are_normalized() {
        let taxonomy = TopicTaxonomy::default();
        let expanded = taxonomy.expand_terms(&terms(&[" Vacation ", ""]));
        assert_eq!(expanded[0], "vacation");
        assert!(expanded.contains(&"pto".to_string()));
    }

    #[test]
    fn test_empty_key_terms() {
        let taxonomy = TopicTaxonomy::default();
        assert!(taxonomy.expand_terms(&[]).is_empty());
    }
}
