//! HTTP API request handlers

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::answer::{AnswerService, QueryError};
use crate::config::Config;
use crate::content::{self, ContentType};
use crate::corpus::{Corpus, CorpusSource, CorpusStore};
use crate::feedback::{FeedbackEntry, FeedbackStore};
use crate::segment;

use super::types::*;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<CorpusStore>,
    pub answers: Arc<AnswerService>,
    pub feedback: Arc<FeedbackStore>,
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handbook upload endpoint (multipart field `handbook`)
pub async fn upload_handbook(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut upload: Option<(Option<String>, Option<String>, Vec<u8>)> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("handbook") {
                    continue;
                }
                let filename = field.file_name().map(|n| n.to_string());
                let mime = field.content_type().map(|m| m.to_string());
                match field.bytes().await {
                    Ok(bytes) => upload = Some((filename, mime, bytes.to_vec())),
                    Err(e) => {
                        warn!("Failed to read upload body: {}", e);
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse::new(format!("Failed to read upload: {}", e))),
                        )
                            .into_response();
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart upload: {}", e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Malformed upload: {}", e))),
                )
                    .into_response();
            }
        }
    }

    let Some((filename, mime, bytes)) = upload else {
        warn!("Upload request without a 'handbook' field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No file uploaded")),
        )
            .into_response();
    };

    info!(
        "File received: filename={:?}, size={}, mimetype={:?}",
        filename,
        bytes.len(),
        mime
    );

    if bytes.len() > state.config.server.max_upload_bytes {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse::new(format!(
                "Upload exceeds maximum size of {} bytes",
                state.config.server.max_upload_bytes
            ))),
        )
            .into_response();
    }

    // Prefer the declared MIME type; fall back to the filename extension
    let content_type = match mime.as_deref().map(ContentType::from_mime) {
        Some(ContentType::Unknown) | None => filename
            .as_deref()
            .map(|n| ContentType::from_extension(Path::new(n)))
            .unwrap_or(ContentType::Unknown),
        Some(detected) => detected,
    };

    // Extract and segment before touching the active corpus: a failed
    // upload must not partially overwrite it.
    let text = match content::extract_from_bytes(&bytes, content_type) {
        Ok(text) => text,
        Err(e) => {
            error!("Error processing handbook: {:#}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!("Error processing handbook: {}", e))),
            )
                .into_response();
        }
    };

    let sections = segment::segment(&text);
    info!(
        "Handbook processed: {} bytes of text, {} sections",
        text.len(),
        sections.len()
    );
    debug!(
        "Section titles: {:?}",
        sections.iter().map(|s| s.title.as_str()).collect::<Vec<_>>()
    );

    let section_titles: Vec<String> = sections.iter().map(|s| s.title.clone()).collect();
    let section_count = sections.len();
    let content_len = text.len();

    state.store.replace(Corpus::new(
        sections,
        CorpusSource::Upload { filename },
        content_len,
    ));

    (
        StatusCode::OK,
        Json(UploadResponse {
            message: "Handbook uploaded successfully".to_string(),
            content_length: content_len,
            sections: section_count,
            section_titles,
            is_default_handbook: false,
        }),
    )
        .into_response()
}

/// Question answering endpoint
pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> impl IntoResponse {
    if request.question.len() > state.config.server.max_question_bytes {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(format!(
                "Question length {} exceeds maximum of {} bytes",
                request.question.len(),
                state.config.server.max_question_bytes
            ))),
        )
            .into_response();
    }

    debug!("Received question: {}", request.question);

    match state.answers.answer(&request.question).await {
        Ok(answer) => (
            StatusCode::OK,
            Json(QueryResponse {
                answer: answer.answer,
                used_sections: answer.used_sections,
            }),
        )
            .into_response(),
        Err(e @ QueryError::NoCorpusLoaded) => {
            warn!("Query with no handbook loaded");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
        Err(e) => {
            error!("Error processing query: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Handbook status endpoint
pub async fn handbook_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.status())
}

/// Feedback submission endpoint
pub async fn submit_feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> impl IntoResponse {
    state.feedback.record(FeedbackEntry {
        message_id: request.message_id,
        verdict: request.feedback,
        question: request.question,
        answer: request.answer,
        sections: request.sections,
        timestamp: Utc::now(),
    });
    Json(SuccessResponse { success: true })
}

/// Feedback statistics endpoint
pub async fn feedback_stats(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.feedback.stats())
}
