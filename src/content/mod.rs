//! Content extraction
//!
//! Turns an uploaded handbook (PDF or plain text) into raw text for the
//! segmenter. Extraction failures surface as document-processing errors;
//! the active corpus is untouched when extraction fails.

mod pdf;
mod text;

pub use pdf::PdfExtractor;
pub use text::TextExtractor;

use anyhow::{Context, Result};
use std::path::Path;

/// Supported content types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Plain text (.txt, .md, etc.)
    Text,
    /// PDF document
    Pdf,
    /// Unknown/unsupported; treated as text
    Unknown,
}

impl ContentType {
    /// Detect content type from file extension
    pub fn from_extension(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("pdf") => ContentType::Pdf,
            Some("txt" | "md" | "markdown" | "rst" | "text") => ContentType::Text,
            _ => ContentType::Unknown,
        }
    }

    /// Detect content type from MIME type
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_lowercase();
        if mime.contains("application/pdf") {
            ContentType::Pdf
        } else if mime.starts_with("text/") {
            ContentType::Text
        } else {
            ContentType::Unknown
        }
    }
}

/// Extract handbook text from uploaded bytes
pub fn extract_from_bytes(bytes: &[u8], content_type: ContentType) -> Result<String> {
    match content_type {
        ContentType::Pdf => PdfExtractor::extract(bytes),
        ContentType::Text | ContentType::Unknown => Ok(TextExtractor::extract(bytes)),
    }
}

/// Extract handbook text from a local file
pub fn extract_from_path(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    extract_from_bytes(&bytes, ContentType::from_extension(path))
}
