//! Question answering orchestration
//!
//! Ties the pipeline together per question: key-term extraction via the
//! language model, relevance ranking over a corpus snapshot, context
//! assembly, and answer generation. Term-extraction failures degrade to the
//! first sections of the corpus so the user still gets some context.

use crate::config::RankingConfig;
use crate::corpus::CorpusStore;
use crate::llm::{LanguageModel, LlmError};
use crate::ranking::{Ranker, TopicTaxonomy};
use crate::types::Section;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Answer returned when ranking finds no relevant sections
pub const NO_MATCH_ANSWER: &str = "I couldn't find any relevant information in the handbook \
for your question. Please try rephrasing your question or ask about a different topic.";

/// Number of leading sections used when term extraction fails
const FALLBACK_SECTION_COUNT: usize = 3;

/// Errors surfaced to the HTTP layer by the answer service
#[derive(Debug, Error)]
pub enum QueryError {
    /// No handbook has been loaded yet
    #[error("No handbook content available. Please upload a handbook first.")]
    NoCorpusLoaded,

    /// Answer generation failed after ranking succeeded
    #[error("Error processing query: {0}")]
    AnswerGeneration(#[from] LlmError),
}

/// A generated answer with the section titles that fed its context
#[derive(Debug, Clone)]
pub struct Answer {
    /// The model-generated (or canned fallback) answer text
    pub answer: String,
    /// Titles of the sections concatenated into the context
    pub used_sections: Vec<String>,
}

/// Per-question orchestration over the shared corpus
pub struct AnswerService {
    store: Arc<CorpusStore>,
    model: Arc<dyn LanguageModel>,
    taxonomy: TopicTaxonomy,
    ranking: RankingConfig,
}

impl AnswerService {
    /// Create an answer service
    pub fn new(
        store: Arc<CorpusStore>,
        model: Arc<dyn LanguageModel>,
        taxonomy: TopicTaxonomy,
        ranking: RankingConfig,
    ) -> Self {
        Self {
            store,
            model,
            taxonomy,
            ranking,
        }
    }

    /// Answer an employee question against the active handbook.
    ///
    /// Takes one corpus snapshot up front; a concurrent upload cannot be
    /// observed mid-computation.
    pub async fn answer(&self, question: &str) -> Result<Answer, QueryError> {
        let corpus = self
            .store
            .snapshot()
            .filter(|c| !c.sections.is_empty())
            .ok_or(QueryError::NoCorpusLoaded)?;

        let relevant = self.relevant_sections(question, &corpus.sections).await;

        if relevant.is_empty() {
            info!("No relevant sections found for question");
            return Ok(Answer {
                answer: NO_MATCH_ANSWER.to_string(),
                used_sections: Vec::new(),
            });
        }

        let used_sections: Vec<String> = relevant.iter().map(|s| s.title.clone()).collect();
        info!("Using sections: {:?}", used_sections);

        let context = build_context(&relevant);
        let answer = self.model.generate_answer(question, &context).await?;

        Ok(Answer {
            answer,
            used_sections,
        })
    }

    /// Rank sections for the question, falling back to the first sections
    /// when key-term extraction fails.
    async fn relevant_sections(&self, question: &str, sections: &[Section]) -> Vec<Section> {
        match self.model.extract_key_terms(question).await {
            Ok(key_terms) => {
                Ranker::new(&self.taxonomy, &self.ranking).rank(&key_terms, sections)
            }
            Err(e) => {
                warn!("Key-term extraction failed, using fallback sections: {}", e);
                sections.iter().take(FALLBACK_SECTION_COUNT).cloned().collect()
            }
        }
    }
}

/// Assemble ranked sections into the answer-generation context.
///
/// Each section becomes a `### <title> ###` block followed by its content;
/// blocks are joined by blank lines in ranker output order.
pub fn build_context(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| format!("### {} ###\n{}", s.title, s.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Corpus, CorpusSource};
    use crate::llm::LlmResult;
    use async_trait::async_trait;

    /// Stub model with scripted term extraction and canned answers
    struct StubModel {
        terms: Option<Vec<String>>,
    }

    #[async_trait]
    impl LanguageModel for StubModel {
        async fn extract_key_terms(&self, _question: &str) -> LlmResult<Vec<String>> {
            match &self.terms {
                Some(terms) => Ok(terms.clone()),
                None => Err(LlmError::Api("scripted failure".to_string())),
            }
        }

        async fn generate_answer(&self, _question: &str, context: &str) -> LlmResult<String> {
            Ok(format!("answered with: {}", context))
        }
    }

    fn service_with(store: Arc<CorpusStore>, terms: Option<Vec<String>>) -> AnswerService {
        AnswerService::new(
            store,
            Arc::new(StubModel { terms }),
            TopicTaxonomy::default(),
            RankingConfig::default(),
        )
    }

    fn load_corpus(store: &CorpusStore, sections: Vec<Section>) {
        store.replace(Corpus::new(sections, CorpusSource::Default, 100));
    }

    #[test]
    fn test_build_context_format() {
        let sections = vec![
            Section::new("Leave", "ten days\n"),
            Section::new("Benefits", "health plan\n"),
        ];
        assert_eq!(
            build_context(&sections),
            "### Leave ###\nten days\n\n\n### Benefits ###\nhealth plan\n"
        );
    }

    #[tokio::test]
    async fn test_no_corpus_is_an_error() {
        let store = Arc::new(CorpusStore::new());
        let service = service_with(store, Some(vec!["leave".to_string()]));
        let err = service.answer("how much leave do I get?").await.unwrap_err();
        assert!(matches!(err, QueryError::NoCorpusLoaded));
    }

    #[tokio::test]
    async fn test_answer_reports_used_sections() {
        let store = Arc::new(CorpusStore::new());
        load_corpus(
            &store,
            vec![
                Section::new("Parking", "garage rules\n"),
                Section::new("Annual leave", "Employees accrue leave monthly.\n"),
                Section::new("Dress code", "wear shoes\n"),
            ],
        );
        let service = service_with(store, Some(vec!["leave".to_string()]));

        let answer = service.answer("how much leave do I get?").await.unwrap();
        assert_eq!(answer.used_sections[0], "Annual leave");
        assert!(answer.answer.contains("### Annual leave ###"));
    }

    #[tokio::test]
    async fn test_term_extraction_failure_falls_back_to_first_sections() {
        let store = Arc::new(CorpusStore::new());
        load_corpus(
            &store,
            vec![
                Section::new("One", "a\n"),
                Section::new("Two", "b\n"),
                Section::new("Three", "c\n"),
                Section::new("Four", "d\n"),
            ],
        );
        let service = service_with(store, None);

        let answer = service.answer("anything").await.unwrap();
        assert_eq!(answer.used_sections, vec!["One", "Two", "Three"]);
    }

    #[tokio::test]
    async fn test_fallback_with_short_corpus() {
        let store = Arc::new(CorpusStore::new());
        load_corpus(&store, vec![Section::new("Only", "a\n")]);
        let service = service_with(store, None);

        let answer = service.answer("anything").await.unwrap();
        assert_eq!(answer.used_sections, vec!["Only"]);
    }

    #[tokio::test]
    async fn test_no_relevant_sections_returns_canned_answer() {
        let store = Arc::new(CorpusStore::new());
        load_corpus(&store, vec![Section::new("Parking", "garage rules\n")]);
        let mut service = service_with(store, Some(vec!["quantum computing".to_string()]));
        // Section-only matching so the unrelated section stays at zero
        service.ranking.cross_term_related = false;

        let answer = service.answer("quantum computing?").await.unwrap();
        assert_eq!(answer.answer, NO_MATCH_ANSWER);
        assert!(answer.used_sections.is_empty());
    }
}
