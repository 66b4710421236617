//! Normalization of raw text into a frequency-analysis surface.
//!
//! The normalized text is only ever used to count words. Sentence text shown
//! to the user always comes from the original input.

use super::tokenizer::LinguisticResources;

/// Collapse whitespace runs to a single space, then blank out every
/// character that is not an ASCII letter.
///
/// Each blanked character becomes exactly one space, so `"a, b"` yields
/// `"a  b"`. Word tokenization downstream ignores the extra spaces.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        out.push(if ch.is_ascii_alphabetic() { ch } else { ' ' });
    }

    out
}

/// Remove stopwords, rejoining the surviving tokens with single spaces.
pub fn strip_stop_words<R>(text: &str, resources: &R) -> String
where
    R: LinguisticResources + ?Sized,
{
    resources
        .words(text)
        .into_iter()
        .filter(|word| !resources.is_stopword(word))
        .collect::<Vec<_>>()
        .join(" ")
}
