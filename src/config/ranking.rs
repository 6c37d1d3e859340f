//! Relevance ranking configuration

use serde::{Deserialize, Serialize};

/// Scoring weights and selection limits for the relevance ranker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Maximum number of positive-scoring sections kept before neighbor
    /// expansion (which may add the two adjacent sections of the top result)
    #[serde(default = "default_max_scored_sections")]
    pub max_scored_sections: usize,
    /// Score for a search term appearing in the section title
    #[serde(default = "default_title_weight")]
    pub title_weight: f32,
    /// Score for a search term appearing in the title+content text
    #[serde(default = "default_content_weight")]
    pub content_weight: f32,
    /// Score for the whole-word "related vocabulary" signal
    #[serde(default = "default_related_weight")]
    pub related_weight: f32,
    /// Multiplier for sections containing policy/procedure language
    #[serde(default = "default_policy_boost")]
    pub policy_boost: f32,
    /// Let the whole-word signal also fire on matches between search terms
    /// themselves, independent of the section. Reproduces the source
    /// system's scoring; disable for section-only matching.
    #[serde(default = "default_true")]
    pub cross_term_related: bool,
}

fn default_max_scored_sections() -> usize {
    3
}

fn default_title_weight() -> f32 {
    3.0
}

fn default_content_weight() -> f32 {
    2.0
}

fn default_related_weight() -> f32 {
    1.0
}

fn default_policy_boost() -> f32 {
    1.5
}

fn default_true() -> bool {
    true
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            max_scored_sections: 3,
            title_weight: 3.0,
            content_weight: 2.0,
            related_weight: 1.0,
            policy_boost: 1.5,
            cross_term_related: true,
        }
    }
}
