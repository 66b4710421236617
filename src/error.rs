//! Error types for the summarizer.
//!
//! Only input acquisition and configuration can fail. The scoring pipeline
//! itself is total: a unit with nothing to summarize produces a placeholder
//! line, never an error.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by sources, configuration loading and emitters.
#[derive(Debug, Error)]
pub enum TldrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load PDF {path}: {message}")]
    PdfLoad { path: PathBuf, message: String },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Usage(String),
}

impl TldrError {
    /// Whether the error came from bad command-line or config input rather
    /// than from reading the document.
    pub fn is_usage(&self) -> bool {
        matches!(self, TldrError::Usage(_) | TldrError::Config(_))
    }
}

pub type Result<T> = std::result::Result<T, TldrError>;
