//! Word frequency table
//!
//! Counts lowercase tokens of normalized, stopword-filtered text. Built fresh
//! for every logical unit and read-only afterwards.

use rustc_hash::FxHashMap;

use crate::nlp::LinguisticResources;

/// Lowercase token -> occurrence count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: FxHashMap<String, usize>,
}

impl WordFrequencyTable {
    /// Count every token of `text`, case-insensitively.
    pub fn from_text<R>(text: &str, resources: &R) -> Self
    where
        R: LinguisticResources + ?Sized,
    {
        let lowered = text.to_lowercase();
        let words = resources.words(&lowered);
        let mut counts: FxHashMap<String, usize> =
            FxHashMap::with_capacity_and_hasher(words.len(), Default::default());

        for word in words {
            *counts.entry(word.to_string()).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// Frequency of a token; absent tokens count as zero.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
