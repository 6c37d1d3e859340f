//! Section relevance ranking
//!
//! Given a question's key terms and the segmented corpus, selects the
//! sections to hand to answer generation: taxonomy-driven term expansion,
//! independent per-section scoring, stable top-3 selection, and neighbor
//! expansion around the highest-scoring survivor.

pub mod scorer;
pub mod taxonomy;

pub use scorer::{score_section, SearchTerm};
pub use taxonomy::TopicTaxonomy;

use crate::config::RankingConfig;
use crate::types::{ScoredSection, Section};
use std::cmp::Ordering;
use tracing::debug;

/// Relevance ranker over a segmented corpus
pub struct Ranker<'a> {
    taxonomy: &'a TopicTaxonomy,
    config: &'a RankingConfig,
}

impl<'a> Ranker<'a> {
    /// Create a ranker with the given taxonomy and scoring configuration
    pub fn new(taxonomy: &'a TopicTaxonomy, config: &'a RankingConfig) -> Self {
        Self { taxonomy, config }
    }

    /// Rank sections against the question's key terms.
    ///
    /// Returns at most `max_scored_sections` positive-scoring sections in
    /// descending score order (ties keep document order), plus the original
    /// neighbors of the top survivor when not already present. Neighbors are
    /// appended after the scored survivors, growing the result to at most
    /// `max_scored_sections + 2`.
    pub fn rank(&self, key_terms: &[String], sections: &[Section]) -> Vec<Section> {
        let search_terms = self.taxonomy.expand_terms(key_terms);
        debug!(
            "Ranking {} sections against {} search terms",
            sections.len(),
            search_terms.len()
        );

        let terms: Vec<SearchTerm> = search_terms
            .iter()
            .map(|t| SearchTerm::compile(t))
            .collect();

        let mut scored: Vec<ScoredSection> = sections
            .iter()
            .map(|section| ScoredSection {
                section: section.clone(),
                score: score_section(section, &terms, self.config),
            })
            .collect();

        // Stable sort: equal scores keep the segmenter's document order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let mut selected: Vec<Section> = scored
            .into_iter()
            .filter(|s| s.score > 0.0)
            .take(self.config.max_scored_sections)
            .map(|s| s.section)
            .collect();

        self.expand_neighbors(&mut selected, sections);

        debug!(
            "Selected sections: {:?}",
            selected.iter().map(|s| s.title.as_str()).collect::<Vec<_>>()
        );
        selected
    }

    /// Append the original neighbors of the top-scoring survivor.
    ///
    /// The top survivor is located by its first matching title in the full
    /// section list; duplicate titles resolve to the earliest occurrence.
    fn expand_neighbors(&self, selected: &mut Vec<Section>, sections: &[Section]) {
        let Some(top_title) = selected.first().map(|s| s.title.clone()) else {
            return;
        };
        let Some(idx) = sections.iter().position(|s| s.title == top_title) else {
            return;
        };

        if idx > 0 {
            let prev = &sections[idx - 1];
            if !selected.iter().any(|s| s.title == prev.title) {
                selected.push(prev.clone());
            }
        }
        if idx + 1 < sections.len() {
            let next = &sections[idx + 1];
            if !selected.iter().any(|s| s.title == next.title) {
                selected.push(next.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranker_parts() -> (TopicTaxonomy, RankingConfig) {
        (TopicTaxonomy::default(), RankingConfig::default())
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_lone_survivor_pulls_both_neighbors() {
        let (taxonomy, mut config) = ranker_parts();
        // Disable the cross-term quirk so non-matching sections stay at zero
        config.cross_term_related = false;
        let ranker = Ranker::new(&taxonomy, &config);
        let sections = vec![
            Section::new("Parking", "Use the garage.\n"),
            Section::new("Annual leave", "Employees accrue leave monthly.\n"),
            Section::new("Dress code", "Wear shoes.\n"),
        ];
        let ranked = ranker.rank(&terms(&["leave"]), &sections);

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].title, "Annual leave");
        let titles: Vec<&str> = ranked.iter().map(|s| s.title.as_str()).collect();
        assert!(titles.contains(&"Parking"));
        assert!(titles.contains(&"Dress code"));
    }

    #[test]
    fn test_result_never_exceeds_five() {
        let (taxonomy, config) = ranker_parts();
        let ranker = Ranker::new(&taxonomy, &config);
        let sections: Vec<Section> = (0..10)
            .map(|i| Section::new(format!("Leave policy {}", i), "leave policy details\n"))
            .collect();
        let ranked = ranker.rank(&terms(&["leave"]), &sections);
        assert!(ranked.len() <= 5);
    }

    #[test]
    fn test_zero_score_sections_excluded_without_survivors() {
        let (taxonomy, mut config) = ranker_parts();
        config.cross_term_related = false;
        let ranker = Ranker::new(&taxonomy, &config);
        let sections = vec![
            Section::new("Parking", "Use the garage.\n"),
            Section::new("Cafeteria", "Lunch at noon.\n"),
        ];
        let ranked = ranker.rank(&terms(&["quantum computing"]), &sections);
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_ties_keep_document_order() {
        let (taxonomy, mut config) = ranker_parts();
        config.cross_term_related = false;
        let ranker = Ranker::new(&taxonomy, &config);
        // Identical content scores identically; document order must survive
        let sections = vec![
            Section::new("First ruling", "parking details here\n"),
            Section::new("Second ruling", "parking details here\n"),
            Section::new("Third ruling", "parking details here\n"),
        ];
        let ranked = ranker.rank(&terms(&["parking"]), &sections);
        let titles: Vec<&str> = ranked.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles[..3], ["First ruling", "Second ruling", "Third ruling"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let (taxonomy, config) = ranker_parts();
        let ranker = Ranker::new(&taxonomy, &config);
        let sections = vec![
            Section::new("Introduction", "Welcome to the company.\n"),
            Section::new("Leave policy", "Vacation and sick leave rules.\n"),
            Section::new("Benefits", "Health insurance and 401k.\n"),
            Section::new("Conduct", "Behavior standards.\n"),
        ];
        let key_terms = terms(&["vacation", "leave"]);
        let first = ranker.rank(&key_terms, &sections);
        let second = ranker.rank(&key_terms, &sections);
        assert_eq!(first, second);
    }

    #[test]
    fn test_neighbor_already_selected_not_duplicated() {
        let (taxonomy, mut config) = ranker_parts();
        config.cross_term_related = false;
        let ranker = Ranker::new(&taxonomy, &config);
        let sections = vec![
            Section::new("Leave overview", "leave basics\n"),
            Section::new("Leave accrual", "leave accrues monthly\n"),
            Section::new("Parking", "garage rules\n"),
        ];
        let ranked = ranker.rank(&terms(&["leave"]), &sections);
        // Both leave sections score; whichever tops the list, no title may
        // appear twice and the result stays within bounds.
        let titles: Vec<&str> = ranked.iter().map(|s| s.title.as_str()).collect();
        let mut deduped = titles.clone();
        deduped.dedup();
        assert_eq!(titles.len(), deduped.len());
        assert!(ranked.len() <= 5);
    }

    #[test]
    fn test_neighbor_lookup_uses_first_title_occurrence() {
        let (taxonomy, mut config) = ranker_parts();
        config.cross_term_related = false;
        let ranker = Ranker::new(&taxonomy, &config);
        // Duplicate title: the neighbor comes from the first occurrence
        let sections = vec![
            Section::new("Overview", "general info\n"),
            Section::new("Leave policy", "nothing relevant\n"),
            Section::new("Cafeteria", "lunch menu\n"),
            Section::new("Leave policy", "vacation leave details\n"),
            Section::new("Parking", "garage\n"),
        ];
        let ranked = ranker.rank(&terms(&["vacation"]), &sections);
        assert_eq!(ranked[0].title, "Leave policy");
        let titles: Vec<&str> = ranked.iter().map(|s| s.title.as_str()).collect();
        // Neighbors of index 1 (first "Leave policy"), not index 3
        assert!(titles.contains(&"Overview"));
        assert!(titles.contains(&"Cafeteria"));
        assert!(!titles.contains(&"Parking"));
    }
}
