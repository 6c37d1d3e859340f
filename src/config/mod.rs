//! Configuration for the handbook QA service

mod answer;
mod corpus;
mod logging;
mod ranking;
mod server;

pub use answer::AnswerConfig;
pub use corpus::CorpusConfig;
pub use logging::{init_logging, LogFormat, LogLevel, LoggingConfig};
pub use ranking::RankingConfig;
pub use server::HttpConfig;

use crate::ranking::TopicTaxonomy;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Main configuration for the service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: HttpConfig,
    /// Corpus / default handbook configuration
    #[serde(default)]
    pub corpus: CorpusConfig,
    /// Relevance ranking configuration
    #[serde(default)]
    pub ranking: RankingConfig,
    /// Language model (answer generation) configuration
    #[serde(default)]
    pub answer: AnswerConfig,
    /// Topic taxonomy used for search-term expansion
    #[serde(default)]
    pub taxonomy: TopicTaxonomy,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.server.listen_addr.parse::<SocketAddr>().is_err() {
            errors.push(format!(
                "server.listen_addr '{}' is not a valid socket address",
                self.server.listen_addr
            ));
        }
        if self.server.max_upload_bytes == 0 {
            errors.push("server.max_upload_bytes must be greater than zero".to_string());
        }
        if self.server.max_question_bytes == 0 {
            errors.push("server.max_question_bytes must be greater than zero".to_string());
        }

        if self.ranking.max_scored_sections == 0 {
            errors.push("ranking.max_scored_sections must be greater than zero".to_string());
        }
        if self.ranking.policy_boost < 1.0 {
            errors.push("ranking.policy_boost must be at least 1.0".to_string());
        }
        for (name, weight) in [
            ("title_weight", self.ranking.title_weight),
            ("content_weight", self.ranking.content_weight),
            ("related_weight", self.ranking.related_weight),
        ] {
            if weight < 0.0 {
                errors.push(format!("ranking.{} must not be negative", name));
            }
        }

        if self.answer.endpoint.is_empty() {
            errors.push("answer.endpoint must not be empty".to_string());
        }
        if self.answer.model.is_empty() {
            errors.push("answer.model must not be empty".to_string());
        }
        if self.answer.timeout_secs == 0 {
            errors.push("answer.timeout_secs must be greater than zero".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("Invalid configuration:\n  - {}", errors.join("\n  - "))
        }
    }
}
