//! Public API for adding words.

use crate::frequency::types::WordFrequencies;

impl WordFrequencies {
    /// Adds one occurrence of `word`.
    ///
    /// The word is counted as given: no cleaning, no validation. Callers are
    /// expected to drop empty words before they get here.
    #[inline]
    pub fn add_word(&mut self, word: &str) {
        debug_assert!(!word.is_empty(), "add_word: empty word reached the aggregator");

        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_owned(), 1);
            }
        }

        self.total += 1;
        self.invalidate();
    }
}

impl<'w> Extend<&'w str> for WordFrequencies {
    fn extend<I: IntoIterator<Item = &'w str>>(&mut self, words: I) {
        for word in words {
            self.add_word(word);
        }
    }
}

impl<'w> FromIterator<&'w str> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = &'w str>>(words: I) -> Self {
        let mut frequencies = Self::new();
        frequencies.extend(words);
        frequencies
    }
}
