//! Summarization components
//!
//! Provides frequency-based extractive summarization: a word frequency table,
//! mean-frequency sentence scoring and stable top-N selection.

pub mod frequency;
pub mod scorer;
pub mod selector;

pub use frequency::WordFrequencyTable;
pub use scorer::{score_sentences, SentenceScores};
pub use selector::{select_top, SelectorConfig, SentenceSelector};
