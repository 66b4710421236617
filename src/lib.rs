//! # tldr
//!
//! Extractive "TLDR" summaries of PDFs, text files, web pages and stdin.
//!
//! Each logical unit of a document (a PDF page, or the whole text) is
//! summarized independently:
//! 1. Normalize the text and strip stopwords
//! 2. Count word frequencies
//! 3. Score each sentence of the original text by mean word frequency,
//!    skipping sentences longer than the configured maximum
//! 4. Keep the top N sentences, highest score first
//!
//! ```rust
//! use tldr::{Summarizer, SummarizerConfig, TextUnit};
//!
//! let config = SummarizerConfig::default()
//!     .with_words_per_sentence(5)
//!     .with_sentences_per_unit(1);
//! let summarizer = Summarizer::from_config(config);
//!
//! let unit = TextUnit::document("The cat sat. A cat sat on the mat quietly today.");
//! let summary = summarizer.summarize_unit(&unit);
//! assert_eq!(summary.texts(), vec!["The cat sat."]);
//! ```

pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod source;
pub mod summarizer;
pub mod types;

pub use config::SummarizerConfig;
pub use emit::{emit, emit_to, Output, Sink, NO_SENTENCES};
pub use error::{Result, TldrError};
pub use nlp::{normalize, strip_stop_words, DefaultResources, LinguisticResources, StopwordFilter};
pub use pipeline::Summarizer;
pub use source::{SourceKind, TextSource};
pub use summarizer::{score_sentences, select_top, SentenceScores, WordFrequencyTable};
pub use types::{ScoredSentence, SummaryUnit, TextUnit, UnitLabel};
