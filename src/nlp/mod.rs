//! Natural Language Processing components
//!
//! This module provides normalization, tokenization and stopword filtering.

pub mod normalize;
pub mod stopwords;
pub mod tokenizer;

pub use normalize::{normalize, strip_stop_words};
pub use stopwords::StopwordFilter;
pub use tokenizer::{DefaultResources, LinguisticResources};
