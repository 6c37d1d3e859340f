//! Language model backend
//!
//! The core treats the language model as an external collaborator behind an
//! object-safe trait: key-term extraction feeds the ranker, answer
//! generation consumes the ranked context. The shipped backend speaks the
//! OpenAI-compatible chat completions protocol.

mod openai;

pub use openai::OpenAiChat;

use async_trait::async_trait;

/// Errors from the language model backend
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Network or HTTP transport error
    #[error("Language model request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API returned an error payload
    #[error("Language model API error: {0}")]
    Api(String),

    /// The API responded without any completion choices
    #[error("Language model returned no choices")]
    EmptyResponse,

    /// Configuration error
    #[error("Language model configuration error: {0}")]
    Config(String),
}

/// Result type for language model operations
pub type LlmResult<T> = Result<T, LlmError>;

/// External language model collaborator
///
/// Object-safe so services can hold a `dyn LanguageModel` and tests can
/// substitute stubs.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Extract lowercase key terms from an employee question.
    ///
    /// Each term may be a single word or a multi-word phrase.
    async fn extract_key_terms(&self, question: &str) -> LlmResult<Vec<String>>;

    /// Generate an answer to the question given the assembled section context
    async fn generate_answer(&self, question: &str, context: &str) -> LlmResult<String>;
}
