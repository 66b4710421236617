//! Sentence scoring
//!
//! A sentence scores the mean frequency of its tokens. Sentences are taken
//! from the original text, so the selected output is never normalized.

use rustc_hash::FxHashMap;

use super::frequency::WordFrequencyTable;
use crate::nlp::LinguisticResources;
use crate::types::ScoredSentence;

/// Scored sentences in first-seen order, keyed by exact sentence text.
///
/// A repeated sentence keeps the position of its first occurrence and takes
/// the score of its last; identical text always scores identically, so the
/// score never actually changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentenceScores {
    entries: Vec<ScoredSentence>,
    positions: FxHashMap<String, usize>,
}

impl SentenceScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the score for `text`.
    pub fn insert(&mut self, text: &str, score: f64) {
        if let Some(&pos) = self.positions.get(text) {
            self.entries[pos].score = score;
            return;
        }
        let index = self.entries.len();
        self.positions.insert(text.to_string(), index);
        self.entries.push(ScoredSentence::new(text, score, index));
    }

    pub fn get(&self, text: &str) -> Option<f64> {
        self.positions.get(text).map(|&pos| self.entries[pos].score)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.positions.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn as_slice(&self) -> &[ScoredSentence] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredSentence> {
        self.entries.iter()
    }
}

impl FromIterator<(String, f64)> for SentenceScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut scores = SentenceScores::new();
        for (text, score) in iter {
            scores.insert(&text, score);
        }
        scores
    }
}

/// Score every sentence of `original` with at most `max_words` tokens.
///
/// Sentences with no tokens or more than `max_words` tokens are left out
/// entirely rather than scored as zero.
pub fn score_sentences<R>(
    original: &str,
    table: &WordFrequencyTable,
    max_words: usize,
    resources: &R,
) -> SentenceScores
where
    R: LinguisticResources + ?Sized,
{
    let mut scores = SentenceScores::new();

    for sentence in resources.sentences(original) {
        let lowered = sentence.to_lowercase();
        let words = resources.words(&lowered);

        if words.is_empty() || words.len() > max_words {
            continue;
        }

        let total: usize = words.iter().map(|w| table.get(w)).sum();
        let score = total as f64 / words.len() as f64;
        scores.insert(sentence, score);
    }

    scores
}
