//! Plain text extraction

/// Plain text extractor
pub struct TextExtractor;

impl TextExtractor {
    /// Decode uploaded bytes as UTF-8 text, replacing invalid sequences
    pub fn extract(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
