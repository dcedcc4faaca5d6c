//! Whole-text analysis: tokenizer → cleaner → aggregator.

use crate::analyzer::{CleanerConfig, Tokenizer, WordCleaner};
use crate::frequency::WordFrequencies;
use tally_types::{AnalysisSummary, WordCount};

/// Word-frequency statistics for one body of text.
///
/// All words are added during construction; afterwards the analysis is
/// read-only.
///
/// # Examples
///
/// ```
/// use tally_core::TextAnalysis;
///
/// let analysis = TextAnalysis::new("He said, \"He said he is.\"");
///
/// assert_eq!(analysis.total_word_count(), 6);
/// assert_eq!(analysis.unique_word_count(), 4);
/// assert_eq!(analysis.unique_words(), ["He", "he", "is", "said"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextAnalysis {
    frequencies: WordFrequencies,
}

impl TextAnalysis {
    /// Analyzes `text` with the default cleaner configuration.
    pub fn new(text: &str) -> Self {
        Self::with_config(text, CleanerConfig::default())
    }

    /// Analyzes `text`, treating `None` as the empty string.
    pub fn from_optional(text: Option<&str>) -> Self {
        Self::new(text.unwrap_or_default())
    }

    /// Analyzes `text` with a custom cleaner configuration.
    pub fn with_config(text: &str, config: CleanerConfig) -> Self {
        let tokenizer = Tokenizer::new();
        let cleaner = WordCleaner::new(config);
        let mut frequencies = WordFrequencies::new();
        let mut word = String::with_capacity(32);
        let mut tokens = 0usize;

        tokenizer.split(text, |token| {
            tokens += 1;
            cleaner.clean_into(token, &mut word);
            if word.is_empty() {
                if !token.is_empty() {
                    log::trace!("analysis: dropped punctuation-only token {:?}", token);
                }
                return;
            }
            frequencies.add_word(&word);
        });

        debug_assert!(frequencies.is_consistent());

        log::debug!(
            "analysis: {} bytes, {} tokens, {}",
            text.len(),
            tokens,
            frequencies.summary()
        );

        Self { frequencies }
    }

    /// Total number of words, duplicates included.
    #[inline(always)]
    #[must_use]
    pub fn total_word_count(&self) -> usize {
        self.frequencies.total_word_count()
    }

    /// Number of distinct words.
    #[inline(always)]
    #[must_use]
    pub fn unique_word_count(&self) -> usize {
        self.frequencies.unique_word_count()
    }

    /// Distinct words in ordinal order.
    #[inline]
    pub fn unique_words(&self) -> &[String] {
        self.frequencies.alphabetized_words()
    }

    /// Distinct words with their counts, in the order of
    /// [`unique_words`](Self::unique_words).
    #[inline]
    pub fn unique_word_counts(&self) -> &[WordCount] {
        self.frequencies.alphabetized_word_counts()
    }

    /// Number of occurrences of `word`, `0` if it does not appear.
    #[inline]
    pub fn count_of(&self, word: &str) -> usize {
        self.frequencies.count_of(word)
    }

    /// Returns the headline counters as a copyable snapshot.
    #[inline]
    pub fn summary(&self) -> AnalysisSummary {
        self.frequencies.summary()
    }

    /// Returns the underlying aggregator.
    #[inline(always)]
    pub fn frequencies(&self) -> &WordFrequencies {
        &self.frequencies
    }
}

impl From<&str> for TextAnalysis {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let a = TextAnalysis::default();
        assert_eq!(a.total_word_count(), 0);
        assert!(a.unique_words().is_empty());
    }

    #[test]
    fn none_matches_empty_string() {
        let none = TextAnalysis::from_optional(None);
        let empty = TextAnalysis::new("");
        assert_eq!(none.summary(), empty.summary());
        assert_eq!(none.unique_words(), empty.unique_words());
    }

    #[test]
    fn whitespace_and_punctuation_only() {
        let a = TextAnalysis::new("  \r\n ... -- \"\" ");
        assert_eq!(a.total_word_count(), 1);
        assert_eq!(a.unique_words(), ["--"]);
    }

    #[test]
    fn legacy_config_merges_contractions() {
        let a = TextAnalysis::with_config(
            "we're were",
            CleanerConfig {
                keep_contractions: false,
            },
        );
        assert_eq!(a.total_word_count(), 2);
        assert_eq!(a.unique_word_count(), 1);
        assert_eq!(a.count_of("were"), 2);
    }

    #[test]
    fn from_str_conversion() {
        let a: TextAnalysis = "a b a".into();
        assert_eq!(a.count_of("a"), 2);
        assert_eq!(a.frequencies().count_of("b"), 1);
    }
}
