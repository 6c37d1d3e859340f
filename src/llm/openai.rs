//! OpenAI-compatible chat completions backend
//!
//! Works with the OpenAI API, Azure OpenAI, and local servers exposing a
//! compatible endpoint (LM Studio, vLLM, Ollama in OpenAI compat mode).

use super::{LanguageModel, LlmError, LlmResult};
use crate::config::AnswerConfig;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// System prompt for key-term extraction
const TERM_EXTRACTION_PROMPT: &str = "Extract key terms, topics, and synonyms from this \
question. Focus on policy-related words and topics. Return them as a comma-separated list. \
Include both specific terms and related concepts.";

/// System prompt template for answer generation; `{context}` is replaced
/// with the assembled section blocks.
const ANSWER_PROMPT_TEMPLATE: &str = "You are Sophia \u{1F469}\u{200D}\u{1F9B0} from the HR team.
Key guidelines:
1. First message only: \"Hello, it's Sophia \u{1F469}\u{200D}\u{1F9B0} from the HR team!\"
2. All other messages: Direct answers with friendly tone
3. Share information confidently
4. End each response with one of these phrases (vary them naturally):
   - \"What would you like to talk about next?\"
   - \"What other topics can I help you explore?\"
   - \"Curious about anything else?\"
   - \"What other questions do you have?\"
   - \"Would you like to learn about something else?\"
   - \"What other aspects of our policies interest you?\"
   - \"Feel free to ask about any other topics!\"

Current handbook context:
{context}";

/// OpenAI-compatible chat backend
pub struct OpenAiChat {
    client: Client,
    config: AnswerConfig,
}

/// Chat completion request format
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat completion response format
#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// API error response format
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl OpenAiChat {
    /// Create a new chat backend from configuration
    pub fn new(config: AnswerConfig) -> LlmResult<Self> {
        info!(
            "Initializing chat backend: endpoint={}, model={}",
            config.endpoint, config.model
        );

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // API key from config or environment
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok());

        if let Some(key) = &api_key {
            let auth_value = format!("Bearer {}", key);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value)
                    .map_err(|e| LlmError::Config(format!("Invalid API key format: {}", e)))?,
            );
        } else if config.endpoint.contains("openai.com") {
            warn!("No API key provided for {}", config.endpoint);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| LlmError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Send a single system+user chat exchange and return the first choice
    async fn chat(
        &self,
        system: &str,
        user: &str,
        temperature: f32,
        max_tokens: u32,
    ) -> LlmResult<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature,
            max_tokens,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {}: {}", status, body));
            return Err(LlmError::Api(message));
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl LanguageModel for OpenAiChat {
    async fn extract_key_terms(&self, question: &str) -> LlmResult<Vec<String>> {
        let raw = self
            .chat(
                TERM_EXTRACTION_PROMPT,
                question,
                self.config.term_temperature,
                self.config.term_max_tokens,
            )
            .await?;

        let terms = parse_term_list(&raw);
        debug!("Extracted key terms: {:?}", terms);
        Ok(terms)
    }

    async fn generate_answer(&self, question: &str, context: &str) -> LlmResult<String> {
        let system = ANSWER_PROMPT_TEMPLATE.replace("{context}", context);
        self.chat(
            &system,
            question,
            self.config.answer_temperature,
            self.config.answer_max_tokens,
        )
        .await
    }
}

/// Parse a comma-separated model response into lowercase key terms
fn parse_term_list(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(',')
        .map(|term| term.trim().to_string())
        .filter(|term| !term.is_empty())
        .collect()
}
