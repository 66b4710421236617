//! Summarizer configuration.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "words_per_sentence": 20,
//!   "sentences_per_unit": 5,
//!   "parallel": false,
//!   "extra_stopwords": ["figure", "table"],
//!   "http_timeout_secs": 30
//! }
//! ```
//!
//! Every field is optional; omitted fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TldrError};

pub const DEFAULT_WORDS_PER_SENTENCE: usize = 20;
pub const DEFAULT_SENTENCES_PER_UNIT: usize = 5;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// File written when the output flag is given without a name
pub const DEFAULT_OUTPUT_FILE: &str = "TLDR.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SummarizerConfig {
    /// Longest sentence (in tokens) still eligible for selection
    pub words_per_sentence: usize,
    /// Maximum sentences selected per logical unit
    pub sentences_per_unit: usize,
    /// Summarize units on the rayon pool instead of sequentially
    pub parallel: bool,
    /// Added on top of the built-in English stopword list
    pub extra_stopwords: Vec<String>,
    pub http_timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            words_per_sentence: DEFAULT_WORDS_PER_SENTENCE,
            sentences_per_unit: DEFAULT_SENTENCES_PER_UNIT,
            parallel: false,
            extra_stopwords: Vec::new(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl SummarizerConfig {
    /// Parse a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| TldrError::Config(e.to_string()))
    }

    /// Load a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| TldrError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
            .map_err(|e| TldrError::Config(format!("{}: {e}", path.display())))
    }

    pub fn with_words_per_sentence(mut self, words: usize) -> Self {
        self.words_per_sentence = words;
        self
    }

    pub fn with_sentences_per_unit(mut self, sentences: usize) -> Self {
        self.sentences_per_unit = sentences;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Clamp a signed count to zero, warning when it was negative.
///
/// Negative counts select nothing instead of failing the run.
pub fn clamp_count(name: &str, value: i64) -> usize {
    if value < 0 {
        tracing::warn!(option = name, value, "negative count treated as 0");
        return 0;
    }
    usize::try_from(value).unwrap_or(usize::MAX)
}
