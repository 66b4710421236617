//! Top-N sentence selection
//!
//! Picks the highest-scoring sentences. The sort is stable, so sentences with
//! equal scores keep the order in which they were first encountered.

use super::scorer::SentenceScores;
use crate::types::ScoredSentence;

/// Configuration for sentence selection
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self { num_sentences: 5 }
    }
}

/// Top-N sentence selector
#[derive(Debug, Clone, Default)]
pub struct SentenceSelector {
    config: SelectorConfig,
}

impl SentenceSelector {
    /// Create a new selector with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config
    pub fn with_config(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Set number of sentences to select
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    pub fn num_sentences(&self) -> usize {
        self.config.num_sentences
    }

    /// Select up to `num_sentences` entries, descending by score
    pub fn select(&self, scores: &SentenceScores) -> Vec<ScoredSentence> {
        select_top(scores.as_slice(), self.config.num_sentences)
    }
}

/// Up to `n` highest-scoring sentences, descending, ties in input order.
pub fn select_top(scores: &[ScoredSentence], n: usize) -> Vec<ScoredSentence> {
    if n == 0 || scores.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<&ScoredSentence> = scores.iter().collect();
    // sort_by is stable: equal scores stay in first-seen order
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(n);
    ranked.into_iter().cloned().collect()
}
