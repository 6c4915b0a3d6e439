use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DocketError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("poppler tools not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PopplerNotFound,

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("unreadable document: {0}")]
    InvalidDocument(String),

    #[error("could not detect vendor from document text. Pass explicit start/end markers for manual extraction.")]
    UnknownVendor,

    #[error("failed to load vendor profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid vendor profile: {0}")]
    ProfileInvalid(String),

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
