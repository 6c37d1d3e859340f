//! HTTP API request/response types
//!
//! JSON-serializable types for the HTTP API. Field names follow the
//! camelCase wire format of the original frontend.

use crate::feedback::Verdict;
use serde::{Deserialize, Serialize};

/// Query request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The employee's question
    pub question: String,
}

/// Query response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    /// Generated answer text
    pub answer: String,
    /// Titles of the sections used as context
    pub used_sections: Vec<String>,
}

/// Successful upload response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    /// Length of the extracted text in bytes
    pub content_length: usize,
    /// Number of sections after segmentation
    pub sections: usize,
    /// Section titles in document order
    pub section_titles: Vec<String>,
    pub is_default_handbook: bool,
}

/// Feedback request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub message_id: String,
    /// "helpful" or "not_helpful"
    pub feedback: Verdict,
    pub question: String,
    pub answer: String,
    /// Titles of the sections the answer referenced
    #[serde(default)]
    pub sections: Vec<String>,
}

/// Generic success acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_response_wire_format() {
        let response = QueryResponse {
            answer: "hi".to_string(),
            used_sections: vec!["Leave".to_string()],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("usedSections").is_some());
    }

    #[test]
    fn test_feedback_request_parses() {
        let request: FeedbackRequest = serde_json::from_str(
            r#"{"messageId":"m1","feedback":"helpful","question":"q","answer":"a","sections":["Leave"]}"#,
        )
        .unwrap();
        assert_eq!(request.feedback, Verdict::Helpful);
        assert_eq!(request.sections, vec!["Leave"]);
    }

    #[test]
    fn test_feedback_sections_default_empty() {
        let request: FeedbackRequest = serde_json::from_str(
            r#"{"messageId":"m1","feedback":"not_helpful","question":"q","answer":"a"}"#,
        )
        .unwrap();
        assert!(request.sections.is_empty());
    }
}
