//! Aggregator state.

use core::cell::OnceCell;

use rustc_hash::FxHashMap;
use tally_types::WordCount;

/// Accumulates cleaned words into per-word counts.
///
/// The two alphabetized views are cached. Adding a word clears both caches;
/// the next read recomputes them once.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencies {
    pub(crate) counts: FxHashMap<String, usize>,
    pub(crate) total: usize,
    pub(crate) sorted_words: OnceCell<Vec<String>>,
    pub(crate) sorted_counts: OnceCell<Vec<WordCount>>,
}

impl WordFrequencies {
    /// Creates a new, empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregator with room for `capacity` distinct words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            ..Self::default()
        }
    }

    /// Total number of words added, duplicates included.
    #[inline(always)]
    #[must_use]
    pub fn total_word_count(&self) -> usize {
        self.total
    }

    /// Number of distinct words.
    #[inline(always)]
    #[must_use]
    pub fn unique_word_count(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no word has been added.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of times `word` was added, `0` if never.
    #[inline]
    #[must_use]
    pub fn count_of(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub(crate) fn invalidate(&mut self) {
        self.sorted_words.take();
        self.sorted_counts.take();
    }
}
