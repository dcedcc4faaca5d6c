//! Core types shared by the Tally word-frequency analyzer.
//!
//! This crate holds the value types that cross crate boundaries:
//!
//! - **[`WordCount`]**: a unique word paired with its occurrence count
//! - **[`AnalysisSummary`]**: a copyable snapshot of the headline numbers
//!
//! Keeping them here lets the analyzer core and its front ends agree on the
//! same shapes without the front ends depending on analyzer internals.

#![warn(missing_docs)]

use core::fmt;

/// A unique word and the number of times it occurs in the analyzed text.
///
/// Equality is structural: two values are equal when both the word and the
/// count are equal.
///
/// Ordering follows the alphabetized views of the analyzer: ordinal
/// (byte-wise) comparison of the word, then the count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordCount {
    /// The cleaned word, case preserved.
    pub word: String,
    /// Number of occurrences, always at least 1 when produced by an analysis.
    pub count: usize,
}

impl WordCount {
    /// Creates a new word/count pair.
    #[inline]
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    /// Returns the word as a string slice.
    #[inline(always)]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Returns the occurrence count.
    #[inline(always)]
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl PartialOrd for WordCount {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordCount {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Words are unique within one analysis, so the count only matters
        // when comparing pairs drawn from different analyses.
        match self.word.as_bytes().cmp(other.word.as_bytes()) {
            core::cmp::Ordering::Equal => self.count.cmp(&other.count),
            ord => ord,
        }
    }
}

impl<W: Into<String>> From<(W, usize)> for WordCount {
    #[inline]
    fn from((word, count): (W, usize)) -> Self {
        Self::new(word, count)
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// A snapshot of the headline statistics of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisSummary {
    /// Number of accepted words, duplicates included.
    pub total_words: usize,
    /// Number of distinct words.
    pub unique_words: usize,
}

impl AnalysisSummary {
    /// Creates a summary from the two counters.
    #[inline(always)]
    pub const fn new(total_words: usize, unique_words: usize) -> Self {
        Self {
            total_words,
            unique_words,
        }
    }

    /// Returns `true` if no word was accepted.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// Number of occurrences beyond the first of each word.
    #[inline(always)]
    pub const fn repeated_words(&self) -> usize {
        self.total_words.saturating_sub(self.unique_words)
    }

    /// Ratio of unique words to total words (type/token ratio).
    ///
    /// Returns `0.0` for an empty analysis.
    pub fn lexical_diversity(&self) -> f32 {
        if self.total_words == 0 {
            0.0
        } else {
            self.unique_words as f32 / self.total_words as f32
        }
    }
}

impl fmt::Display for AnalysisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} words, {} unique",
            self.total_words, self.unique_words
        )?;

        if self.total_words > 0 {
            write!(f, " ({:.1}% diverse)", self.lexical_diversity() * 100.0)?;
        }

        Ok(())
    }
}
