//! Core data types shared by the pipeline stages.

use std::fmt;

/// Label a source attaches to each logical unit it yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitLabel {
    /// One page of a paginated document (1-based)
    Page(u32),
    /// The whole document as a single unit
    Document,
}

impl UnitLabel {
    /// Header line written above the unit's sentences
    pub fn header(&self) -> String {
        match self {
            UnitLabel::Page(n) => format!("Page {n}"),
            UnitLabel::Document => "TLDR:".to_string(),
        }
    }
}

impl fmt::Display for UnitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitLabel::Page(n) => write!(f, "page {n}"),
            UnitLabel::Document => f.write_str("document"),
        }
    }
}

/// One logical unit of raw input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    pub label: UnitLabel,
    pub text: String,
}

impl TextUnit {
    pub fn new(label: UnitLabel, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }

    /// A single-unit document
    pub fn document(text: impl Into<String>) -> Self {
        Self::new(UnitLabel::Document, text)
    }

    /// A page of a paginated document
    pub fn page(number: u32, text: impl Into<String>) -> Self {
        Self::new(UnitLabel::Page(number), text)
    }
}

/// A sentence drawn from the original text, with its frequency score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// Sentence text exactly as it appeared in the input (trimmed)
    pub text: String,
    /// Mean word frequency of the sentence's tokens
    pub score: f64,
    /// Position in first-seen order among scored sentences
    pub index: usize,
}

impl ScoredSentence {
    pub fn new(text: impl Into<String>, score: f64, index: usize) -> Self {
        Self {
            text: text.into(),
            score,
            index,
        }
    }
}

/// Selected sentences for one logical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryUnit {
    pub label: UnitLabel,
    /// Selected sentences, descending by score, ties in first-seen order
    pub sentences: Vec<ScoredSentence>,
    /// Number of sentences that were eligible for scoring
    pub eligible: usize,
}

impl SummaryUnit {
    /// Whether the unit yielded no eligible sentences at all
    pub fn is_degenerate(&self) -> bool {
        self.eligible == 0
    }

    /// Selected sentence texts in output order
    pub fn texts(&self) -> Vec<&str> {
        self.sentences.iter().map(|s| s.text.as_str()).collect()
    }
}
