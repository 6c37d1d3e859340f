//! Per-section relevance scoring
//!
//! Scores each section independently against the expanded search-term set.
//! Sections are never compared against each other here; selection happens
//! in the ranker.

use crate::config::RankingConfig;
use crate::types::Section;
use regex::Regex;
use std::sync::OnceLock;

static RE_POLICY_INDICATOR: OnceLock<Regex> = OnceLock::new();

/// A search term with its precompiled whole-word matcher
pub struct SearchTerm {
    /// Lowercase term text (single word or phrase)
    pub text: String,
    word_re: Regex,
}

impl SearchTerm {
    /// Compile a search term. The term text is escaped, so terms containing
    /// regex metacharacters match literally.
    pub fn compile(text: &str) -> Self {
        let pattern = format!(r"\b{}\b", regex::escape(text));
        Self {
            // The escaped pattern is always valid
            word_re: Regex::new(&pattern).expect("escaped term pattern"),
            text: text.to_string(),
        }
    }

    /// Whole-word match of this term against arbitrary text
    pub fn matches_word_in(&self, text: &str) -> bool {
        self.word_re.is_match(text)
    }
}

/// True if the text contains policy/procedure/guideline language
pub fn is_policy_text(text: &str) -> bool {
    let re = RE_POLICY_INDICATOR
        .get_or_init(|| Regex::new(r"(?i)policy|procedure|guideline|standard|requirement").unwrap());
    re.is_match(text)
}

/// Score a single section against the search terms.
///
/// Per term: title substring match, title+content substring match, and a
/// coarse "related vocabulary present" signal based on whole-word matches.
/// The whole-word signal also fires when the current term matches another
/// search term as a whole word; that reproduces the source system's
/// behavior and can be disabled via `cross_term_related`.
pub fn score_section(section: &Section, terms: &[SearchTerm], config: &RankingConfig) -> f32 {
    let title_lower = section.title.to_lowercase();
    let section_text = format!("{} {}", section.title, section.content).to_lowercase();

    let mut score = 0.0;
    for term in terms {
        if title_lower.contains(&term.text) {
            score += config.title_weight;
        }
        if section_text.contains(&term.text) {
            score += config.content_weight;
        }

        let related = terms.iter().any(|other| {
            other.matches_word_in(&section_text)
                || (config.cross_term_related && term.matches_word_in(&other.text))
        });
        if related {
            score += config.related_weight;
        }
    }

    if is_policy_text(&section_text) {
        score *= config.policy_boost;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(terms: &[&str]) -> Vec<SearchTerm> {
        terms.iter().map(|t| SearchTerm::compile(t)).collect()
    }

    fn config() -> RankingConfig {
        RankingConfig::default()
    }

    fn no_cross_term() -> RankingConfig {
        RankingConfig {
            cross_term_related: false,
            ..RankingConfig::default()
        }
    }

    #[test]
    fn test_title_and_content_match() {
        let section = Section::new("Leave of absence", "Employees accrue leave monthly.\n");
        let terms = compile(&["leave"]);
        // Title +3, content +2, whole word +1
        let score = score_section(&section, &terms, &no_cross_term());
        assert_eq!(score, 6.0);
    }

    #[test]
    fn test_content_only_match() {
        let section = Section::new("Benefits", "Vacation leave accrues monthly.\n");
        let terms = compile(&["leave"]);
        let score = score_section(&section, &terms, &no_cross_term());
        assert_eq!(score, 3.0); // content +2, whole word +1
    }

    #[test]
    fn test_no_match_scores_zero() {
        let section = Section::new("Parking", "Use the garage on Main Street.\n");
        let terms = compile(&["leave"]);
        assert_eq!(score_section(&section, &terms, &no_cross_term()), 0.0);
    }

    #[test]
    fn test_policy_indicator_boost() {
        let section = Section::new("Leave", "This policy covers leave.\n");
        let terms = compile(&["leave"]);
        // Title +3, content +2, word +1 = 6, boosted by 1.5
        assert_eq!(score_section(&section, &terms, &no_cross_term()), 9.0);
    }

    #[test]
    fn test_substring_without_word_boundary() {
        // "leaves" contains "leave" as a substring but not as a whole word
        let section = Section::new("Trees", "The leaves fall in autumn.\n");
        let terms = compile(&["leave"]);
        assert_eq!(score_section(&section, &terms, &no_cross_term()), 2.0);
    }

    #[test]
    fn test_cross_term_signal_fires_without_section_match() {
        // With cross-term matching on, the whole-word signal fires from the
        // term list alone, independent of the section.
        let section = Section::new("Parking", "Use the garage.\n");
        let terms = compile(&["leave", "vacation"]);
        assert_eq!(score_section(&section, &terms, &config()), 2.0);
        assert_eq!(score_section(&section, &terms, &no_cross_term()), 0.0);
    }

    #[test]
    fn test_phrase_terms_match() {
        let section = Section::new("Benefits", "We offer paid time off to all staff.\n");
        let terms = compile(&["time off"]);
        assert_eq!(score_section(&section, &terms, &no_cross_term()), 3.0);
    }

    #[test]
    fn test_metacharacters_in_terms_are_literal() {
        let section = Section::new("Benefits", "The 401(k) plan vests after a year.\n");
        let terms = compile(&["401(k)"]);
        // Substring matches; the escaped pattern must not panic
        let score = score_section(&section, &terms, &no_cross_term());
        assert!(score >= 2.0);
    }

    #[test]
    fn test_policy_text_detection() {
        assert!(is_policy_text("see the dress code policy"));
        assert!(is_policy_text("Standard Operating PROCEDURE"));
        assert!(!is_policy_text("lunch menu for friday"));
    }
}
