//! Language model configuration for answer generation and term extraction

use serde::{Deserialize, Serialize};

/// Configuration for the OpenAI-compatible chat backend
///
/// Works with the OpenAI API, Azure OpenAI, and local servers exposing a
/// compatible `/chat/completions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Chat completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// API key (optional, can also use the OPENAI_API_KEY env var)
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature for answer generation
    #[serde(default = "default_answer_temperature")]
    pub answer_temperature: f32,
    /// Token budget for answer generation
    #[serde(default = "default_answer_max_tokens")]
    pub answer_max_tokens: u32,
    /// Sampling temperature for key-term extraction
    #[serde(default = "default_term_temperature")]
    pub term_temperature: f32,
    /// Token budget for key-term extraction
    #[serde(default = "default_term_max_tokens")]
    pub term_max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_answer_temperature() -> f32 {
    0.7
}

fn default_answer_max_tokens() -> u32 {
    500
}

fn default_term_temperature() -> f32 {
    0.3
}

fn default_term_max_tokens() -> u32 {
    100
}

fn default_timeout() -> u64 {
    30
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            model: default_model(),
            answer_temperature: default_answer_temperature(),
            answer_max_tokens: default_answer_max_tokens(),
            term_temperature: default_term_temperature(),
            term_max_tokens: default_term_max_tokens(),
            timeout_secs: default_timeout(),
        }
    }
}
