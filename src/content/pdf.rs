//! PDF text extraction
//!
//! Extracts text content from PDF documents using pdf-extract.

use anyhow::{Context, Result};

/// PDF content extractor
pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract text content from PDF bytes
    pub fn extract(bytes: &[u8]) -> Result<String> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .context("Failed to extract text from PDF")?;

        let cleaned = Self::clean_text(&text);

        if cleaned.is_empty() {
            anyhow::bail!("PDF contains no extractable text (may be image-only)");
        }

        Ok(cleaned)
    }

    /// Clean up common PDF extraction artifacts
    fn clean_text(text: &str) -> String {
        text.lines()
            .map(|l| l.trim_end())
            // Collapse runs of blank lines but preserve paragraph breaks
            .fold(Vec::new(), |mut acc, line| {
                if line.trim().is_empty() {
                    if acc.last().map(|l: &&str| !l.trim().is_empty()).unwrap_or(false) {
                        acc.push("");
                    }
                } else {
                    acc.push(line);
                }
                acc
            })
            .join("\n")
            .trim()
            .to_string()
    }
}
