//! HTTP server configuration

use serde::{Deserialize, Serialize};

/// HTTP API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Listen address (e.g., "127.0.0.1:3001")
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Enable CORS (needed for browser-based clients)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,
    /// Allowed CORS origin; any origin when unset
    #[serde(default)]
    pub allowed_origin: Option<String>,
    /// Maximum accepted handbook upload size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Maximum accepted question length in bytes
    #[serde(default = "default_max_question_bytes")]
    pub max_question_bytes: usize,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3001".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_max_question_bytes() -> usize {
    10_000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_enabled: true,
            allowed_origin: None,
            max_upload_bytes: default_max_upload_bytes(),
            max_question_bytes: default_max_question_bytes(),
        }
    }
}
