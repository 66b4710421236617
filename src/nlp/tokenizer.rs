//! Word and sentence segmentation
//!
//! The pipeline never tokenizes directly; it goes through
//! [`LinguisticResources`] so the scoring algorithm can be exercised with a
//! deterministic stub independent of any particular segmenter.

use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopwordFilter;

/// A blank line: LF (or CRLF) twice, or CR twice, with only blanks between
fn paragraph_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n[ \t\r]*\n|\r[ \t]*\r").expect("valid regex"))
}

/// Tokenizer, sentence splitter and stopword set used by the pipeline.
pub trait LinguisticResources {
    /// Split text into word tokens. Punctuation-only segments are dropped.
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Split text into sentences. Returned slices are trimmed and non-empty.
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Whether the token is a stopword (case-insensitive)
    fn is_stopword(&self, word: &str) -> bool;
}

/// Unicode (UAX #29) word and sentence boundaries plus a stopword filter.
#[derive(Debug, Clone, Default)]
pub struct DefaultResources {
    stopwords: StopwordFilter,
}

impl DefaultResources {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}

impl LinguisticResources for DefaultResources {
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        // unicode_words keeps only segments containing a letter or digit
        text.unicode_words().collect()
    }

    /// Blank lines are hard boundaries. A single line break inside a
    /// paragraph is treated as a space, so hard-wrapped lines stay in one
    /// sentence. Returned slices still borrow `text` and keep their breaks.
    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        paragraph_break_re()
            .split(text)
            .flat_map(paragraph_sentences)
            .collect()
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.is_stopword(word)
    }
}

fn paragraph_sentences(paragraph: &str) -> Vec<&str> {
    // '\n' and '\r' are single bytes, so offsets into the unwrapped copy
    // are valid offsets into `paragraph`
    let unwrapped = paragraph.replace(['\n', '\r'], " ");
    let sentences: Vec<&str> = unwrapped
        .split_sentence_bound_indices()
        .map(|(start, segment)| paragraph[start..start + segment.len()].trim())
        .filter(|s| !s.is_empty())
        .collect();
    sentences
}

impl<R: LinguisticResources + ?Sized> LinguisticResources for &R {
    fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).words(text)
    }

    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        (**self).sentences(text)
    }

    fn is_stopword(&self, word: &str) -> bool {
        (**self).is_stopword(word)
    }
}
