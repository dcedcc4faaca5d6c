//! Alphabetized views.
//!
//! Ordering is ordinal: `str`'s `Ord`, which compares UTF-8 bytes and is
//! therefore code-point order. Uppercase ASCII sorts before lowercase, and
//! `'` (U+0027) sorts before every letter.

use crate::frequency::types::WordFrequencies;
use tally_types::WordCount;

impl WordFrequencies {
    /// Unique words in ordinal order.
    ///
    /// Computed on the first call after a mutation and cached until the next
    /// one.
    pub fn alphabetized_words(&self) -> &[String] {
        self.sorted_words.get_or_init(|| Self::sort_words(self.counts.keys()))
    }

    /// Unique words with their counts, in the same order as
    /// [`alphabetized_words`](Self::alphabetized_words).
    pub fn alphabetized_word_counts(&self) -> &[WordCount] {
        self.sorted_counts.get_or_init(|| {
            self.alphabetized_words()
                .iter()
                .map(|word| WordCount::new(word.clone(), self.count_of(word)))
                .collect()
        })
    }

    pub(crate) fn sort_words<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<String> {
        let mut words: Vec<String> = keys.cloned().collect();
        // Keys are unique, so stability is irrelevant.
        words.sort_unstable();
        words
    }
}
