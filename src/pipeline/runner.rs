//! Pipeline runner: summarizes logical units one at a time.
//!
//! For each unit the [`Summarizer`] runs, in order:
//! 1. Normalize (collapse whitespace, blank non-letters)
//! 2. Strip stopwords
//! 3. Build the word frequency table
//! 4. Score sentences of the *original* text
//! 5. Select the top N
//!
//! Units share no state, so [`Summarizer::summarize_units`] may run them on
//! the rayon pool. Output order always matches input order.

use rayon::prelude::*;
use tracing::debug;

use crate::config::SummarizerConfig;
use crate::error::Result;
use crate::nlp::{
    normalize, strip_stop_words, DefaultResources, LinguisticResources, StopwordFilter,
};
use crate::source::TextSource;
use crate::summarizer::{score_sentences, SentenceSelector, WordFrequencyTable};
use crate::types::{SummaryUnit, TextUnit};

pub const STAGE_NORMALIZE: &str = "normalize";
pub const STAGE_STOPWORDS: &str = "stopwords";
pub const STAGE_FREQUENCIES: &str = "frequencies";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";

/// Enter a debug span for a pipeline stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Frequency-based extractive summarizer over injected linguistic resources.
#[derive(Debug, Clone)]
pub struct Summarizer<R = DefaultResources> {
    resources: R,
    config: SummarizerConfig,
    selector: SentenceSelector,
}

impl Summarizer<DefaultResources> {
    /// English stopwords plus any `extra_stopwords` from the config.
    pub fn from_config(config: SummarizerConfig) -> Self {
        let mut stopwords = StopwordFilter::english();
        stopwords.add_stopwords(&config.extra_stopwords);
        Self::new(DefaultResources::new(stopwords), config)
    }
}

impl Default for Summarizer<DefaultResources> {
    fn default() -> Self {
        Self::from_config(SummarizerConfig::default())
    }
}

impl<R: LinguisticResources> Summarizer<R> {
    pub fn new(resources: R, config: SummarizerConfig) -> Self {
        let selector = SentenceSelector::new().with_num_sentences(config.sentences_per_unit);
        Self {
            resources,
            config,
            selector,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn resources(&self) -> &R {
        &self.resources
    }

    /// Summarize a single logical unit.
    pub fn summarize_unit(&self, unit: &TextUnit) -> SummaryUnit {
        let _unit_span = tracing::debug_span!("unit", label = %unit.label).entered();

        let normalized = {
            trace_stage!(STAGE_NORMALIZE);
            normalize(&unit.text)
        };

        let filtered = {
            trace_stage!(STAGE_STOPWORDS);
            strip_stop_words(&normalized, &self.resources)
        };

        let table = {
            trace_stage!(STAGE_FREQUENCIES);
            WordFrequencyTable::from_text(&filtered, &self.resources)
        };

        let scores = {
            trace_stage!(STAGE_SCORE);
            score_sentences(
                &unit.text,
                &table,
                self.config.words_per_sentence,
                &self.resources,
            )
        };

        let sentences = {
            trace_stage!(STAGE_SELECT);
            self.selector.select(&scores)
        };

        debug!(
            label = %unit.label,
            distinct_words = table.len(),
            eligible = scores.len(),
            selected = sentences.len(),
            "unit summarized"
        );

        SummaryUnit {
            label: unit.label,
            sentences,
            eligible: scores.len(),
        }
    }

    /// Summarize every unit, preserving input order.
    pub fn summarize_units(&self, units: &[TextUnit]) -> Vec<SummaryUnit>
    where
        R: Sync,
    {
        if self.config.parallel && units.len() > 1 {
            units.par_iter().map(|u| self.summarize_unit(u)).collect()
        } else {
            units.iter().map(|u| self.summarize_unit(u)).collect()
        }
    }

    /// Acquire all units from `source` and summarize them.
    ///
    /// Acquisition errors abort before any unit is scored.
    pub fn summarize_source<S>(&self, source: &mut S) -> Result<Vec<SummaryUnit>>
    where
        S: TextSource + ?Sized,
        R: Sync,
    {
        let units = source.units()?;
        debug!(source = %source.describe(), units = units.len(), "text acquired");
        Ok(self.summarize_units(&units))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UnitLabel;

    /// Sentences end at every '.', words are alphanumeric runs.
    struct StubResources;

    impl LinguisticResources for StubResources {
        fn words<'a>(&self, text: &'a str) -> Vec<&'a str> {
            text.split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
                .collect()
        }

        fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
            text.split_inclusive('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect()
        }

        fn is_stopword(&self, word: &str) -> bool {
            matches!(word.to_lowercase().as_str(), "the" | "a" | "on")
        }
    }

    fn stub(words: usize, sentences: usize) -> Summarizer<StubResources> {
        let config = SummarizerConfig::default()
            .with_words_per_sentence(words)
            .with_sentences_per_unit(sentences);
        Summarizer::new(StubResources, config)
    }

    #[test]
    fn test_short_sentence_wins_when_long_one_is_ineligible() {
        let unit = TextUnit::document("The cat sat. A cat sat on the mat quietly today.");
        let summary = stub(5, 1).summarize_unit(&unit);

        assert_eq!(summary.texts(), vec!["The cat sat."]);
        assert_eq!(summary.eligible, 1);
    }

    #[test]
    fn test_default_resources_scenario() {
        let config = SummarizerConfig::default()
            .with_words_per_sentence(5)
            .with_sentences_per_unit(1);
        let summarizer = Summarizer::from_config(config);
        let unit = TextUnit::document("The cat sat. A cat sat on the mat quietly today.");

        assert_eq!(summarizer.summarize_unit(&unit).texts(), vec!["The cat sat."]);
    }

    #[test]
    fn test_sentences_keep_original_text() {
        let unit = TextUnit::document("Rust's borrow checker, v2.0, rocks. Rust rocks.");
        let summary = Summarizer::default().summarize_unit(&unit);

        assert!(summary
            .texts()
            .contains(&"Rust's borrow checker, v2.0, rocks."));
    }

    #[test]
    fn test_higher_frequency_sentence_ranks_first() {
        let unit = TextUnit::document("Dogs bark. Cats purr. Cats nap. Cats eat.");
        let summary = stub(20, 2).summarize_unit(&unit);

        assert_eq!(summary.texts(), vec!["Cats purr.", "Cats nap."]);
    }

    #[test]
    fn test_empty_unit_is_degenerate() {
        let summary = stub(20, 5).summarize_unit(&TextUnit::page(2, ""));

        assert!(summary.is_degenerate());
        assert!(summary.sentences.is_empty());
        assert_eq!(summary.label, UnitLabel::Page(2));
    }

    #[test]
    fn test_zero_sentences_requested() {
        let summary = stub(20, 0).summarize_unit(&TextUnit::document("Cats purr."));

        assert!(summary.sentences.is_empty());
        assert_eq!(summary.eligible, 1);
        assert!(!summary.is_degenerate());
    }

    #[test]
    fn test_parallel_preserves_order() {
        let units: Vec<_> = (1..=16)
            .map(|n| TextUnit::page(n, format!("Page {n} talks about topic {n}.")))
            .collect();

        let sequential = stub(20, 5).summarize_units(&units);
        let config = SummarizerConfig::default().with_parallel(true);
        let parallel = Summarizer::new(StubResources, config).summarize_units(&units);

        assert_eq!(sequential, parallel);
        for (n, unit) in parallel.iter().enumerate() {
            assert_eq!(unit.label, UnitLabel::Page(n as u32 + 1));
        }
    }

    #[test]
    fn test_extra_stopwords_from_config() {
        let config = SummarizerConfig {
            extra_stopwords: vec!["cats".to_string()],
            ..SummarizerConfig::default()
        };
        let summarizer = Summarizer::from_config(config);

        assert!(summarizer.resources().is_stopword("Cats"));
        assert!(summarizer.resources().is_stopword("the"));
    }
}
