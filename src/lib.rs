//! Handbook QA: Employee Handbook Question Answering
//!
//! Answers employee questions against a single uploaded policy document,
//! featuring:
//! - Heuristic section segmentation of extracted handbook text
//! - Topic-taxonomy driven relevance ranking with neighbor expansion
//! - Content extraction from PDF and plain text uploads
//! - An OpenAI-compatible chat backend for key-term extraction and answers
//! - An Axum HTTP API for upload, query, status, and feedback

pub mod answer;
pub mod client;
pub mod config;
pub mod content;
pub mod corpus;
pub mod feedback;
pub mod http;
pub mod llm;
pub mod ranking;
pub mod segment;
pub mod types;

pub use config::Config;
pub use types::*;
