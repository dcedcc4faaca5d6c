//! Word cleaning: turns a raw token into a countable word.
//!
//! Every punctuation character (see [`classify`](super::classify)) is removed
//! except:
//!
//! - the hyphen `-`, which is always kept (`"hyphenated-word"`)
//! - the apostrophe `'`, which is kept only when it looks like a contraction
//!
//! ## The Apostrophe Rule
//!
//! An apostrophe survives when it is neither the first nor the last character
//! of the word and both of its neighbours are letters: `"aren't"` keeps it,
//! `"'quoted'"` and `"90's"` lose it.
//!
//! The word is processed right to left and the rule is applied to the word
//! as it stands at that moment. The left neighbour is always the original
//! preceding character; the right neighbour is the nearest character to the
//! right that survived. So `"a'.b"` cleans to `"a'b"` (the period goes first,
//! leaving the apostrophe between two letters) while `"''word''"` cleans to
//! `"word"`.
//!
//! Only the ASCII apostrophe U+0027 is special. Typographic quotes such as
//! `’` (U+2019) are ordinary punctuation and are always removed.

use smallvec::SmallVec;

use super::classify::{is_letter, is_punctuation};

const APOSTROPHE: char = '\'';
const HYPHEN: char = '-';

/// Configuration options for word cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanerConfig {
    /// When enabled, contraction apostrophes (`"we're"`) are preserved.
    /// When disabled, every apostrophe is stripped like any other
    /// punctuation mark, so `"we're"` becomes `"were"`.
    pub keep_contractions: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            keep_contractions: true,
        }
    }
}

/// Strips unwanted punctuation from raw tokens.
///
/// # Examples
///
/// ```
/// use tally_core::analyzer::WordCleaner;
///
/// let cleaner = WordCleaner::default();
/// assert_eq!(cleaner.clean("World!"), "World");
/// assert_eq!(cleaner.clean("\"aren't\""), "aren't");
/// assert_eq!(cleaner.clean("..."), "");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordCleaner {
    config: CleanerConfig,
}

impl WordCleaner {
    /// Creates a new cleaner with the specified configuration.
    pub const fn new(config: CleanerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this cleaner was built with.
    #[inline(always)]
    pub const fn config(&self) -> CleanerConfig {
        self.config
    }

    /// Cleans `raw` into a freshly allocated `String`.
    #[must_use]
    pub fn clean(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        self.clean_into(raw, &mut out);
        out
    }

    /// Cleans `raw` into an existing buffer.
    ///
    /// Clears the buffer before writing and reuses its capacity. The result
    /// may be empty when the token was nothing but punctuation.
    pub fn clean_into(&self, raw: &str, out: &mut String) {
        out.clear();
        if raw.is_empty() {
            return;
        }

        let chars: SmallVec<[char; 32]> = raw.chars().collect();
        // Survivors in reverse order; `last()` is the right neighbour of the
        // character being evaluated.
        let mut kept: SmallVec<[char; 32]> = SmallVec::with_capacity(chars.len());

        for i in (0..chars.len()).rev() {
            let ch = chars[i];
            let keep = if ch == APOSTROPHE {
                self.keeps_apostrophe(&chars, i, kept.last().copied())
            } else {
                ch == HYPHEN || !is_punctuation(ch)
            };

            if keep {
                kept.push(ch);
            }
        }

        out.reserve(kept.len());
        out.extend(kept.iter().rev());
    }

    #[inline]
    fn keeps_apostrophe(&self, chars: &[char], index: usize, next: Option<char>) -> bool {
        if !self.config.keep_contractions || index == 0 {
            return false;
        }

        match next {
            Some(next) => is_letter(chars[index - 1]) && is_letter(next),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(input: &str) -> String {
        WordCleaner::default().clean(input)
    }

    fn clean_legacy(input: &str) -> String {
        WordCleaner::new(CleanerConfig {
            keep_contractions: false,
        })
        .clean(input)
    }

    #[test]
    fn plain_word_unchanged() {
        assert_eq!(clean("Hello"), "Hello");
    }

    #[test]
    fn trailing_punctuation_removed() {
        assert_eq!(clean("World!"), "World");
        assert_eq!(clean("said,"), "said");
        assert_eq!(clean("is.\""), "is");
    }

    #[test]
    fn leading_punctuation_removed() {
        assert_eq!(clean("\"He"), "He");
        assert_eq!(clean("(aside"), "aside");
    }

    #[test]
    fn interior_punctuation_removed() {
        assert_eq!(clean("e.g."), "eg");
        assert_eq!(clean("and/or"), "andor");
        assert_eq!(clean("snake_case"), "snakecase");
    }

    #[test]
    fn hyphen_always_kept() {
        assert_eq!(clean("hyphenated-word"), "hyphenated-word");
        assert_eq!(clean("-"), "-");
        assert_eq!(clean("--"), "--");
        assert_eq!(clean("-leading"), "-leading");
    }

    #[test]
    fn dashes_other_than_hyphen_removed() {
        assert_eq!(clean("pause\u{2014}then"), "pausethen");
        assert_eq!(clean("1990\u{2013}2000"), "19902000");
    }

    #[test]
    fn punctuation_only_cleans_to_empty() {
        assert_eq!(clean("..."), "");
        assert_eq!(clean("\"!?\""), "");
        assert_eq!(clean("'"), "");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn symbols_survive() {
        assert_eq!(clean("$5"), "$5");
        assert_eq!(clean("a+b=c"), "a+b=c");
        assert_eq!(clean("x^2"), "x^2");
    }

    #[test]
    fn contraction_apostrophes_kept() {
        assert_eq!(clean("we're"), "we're");
        assert_eq!(clean("aren't"), "aren't");
        assert_eq!(clean("ain't"), "ain't");
        assert_eq!(clean("rock'n'roll"), "rock'n'roll");
    }

    #[test]
    fn quotation_apostrophes_removed() {
        assert_eq!(clean("'quoted'"), "quoted");
        assert_eq!(clean("'tis"), "tis");
        assert_eq!(clean("dogs'"), "dogs");
    }

    #[test]
    fn apostrophe_next_to_digit_removed() {
        assert_eq!(clean("90's"), "90s");
        assert_eq!(clean("rock'9"), "rock9");
    }

    #[test]
    fn apostrophe_between_letter_and_punctuation_at_end() {
        // The period is removed first, which leaves the apostrophe last.
        assert_eq!(clean("don'."), "don");
        assert_eq!(clean("don't."), "don't");
    }

    #[test]
    fn right_neighbour_is_the_surviving_character() {
        assert_eq!(clean("a'.b"), "a'b");
        assert_eq!(clean("a'\"b"), "a'b");
    }

    #[test]
    fn left_neighbour_is_the_original_character() {
        assert_eq!(clean("a.'b"), "ab");
    }

    #[test]
    fn doubled_apostrophes() {
        // The right apostrophe sees another apostrophe on its left and goes;
        // the left one then sits between two letters.
        assert_eq!(clean("a''b"), "a'b");
        assert_eq!(clean("a'''b"), "a'b");
    }

    #[test]
    fn surrounding_apostrophe_pairs() {
        assert_eq!(clean("''word''"), "word");
        assert_eq!(clean("''"), "");
        assert_eq!(clean("'''"), "");
    }

    #[test]
    fn typographic_apostrophe_is_plain_punctuation() {
        assert_eq!(clean("don\u{2019}t"), "dont");
        assert_eq!(clean("\u{201C}quoted\u{201D}"), "quoted");
    }

    #[test]
    fn unicode_letters_count_as_neighbours() {
        assert_eq!(clean("l'\u{00E9}t\u{00E9}"), "l'\u{00E9}t\u{00E9}");
        assert_eq!(clean("\u{00AB}bonjour\u{00BB}"), "bonjour");
    }

    #[test]
    fn case_preserved() {
        assert_eq!(clean("HeLLo!"), "HeLLo");
    }

    #[test]
    fn legacy_mode_strips_every_apostrophe() {
        assert_eq!(clean_legacy("we're"), "were");
        assert_eq!(clean_legacy("'tis"), "tis");
        assert_eq!(clean_legacy("hyphenated-word"), "hyphenated-word");
        assert_eq!(clean_legacy("World!"), "World");
    }

    #[test]
    fn clean_into_reuses_capacity() {
        let cleaner = WordCleaner::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        cleaner.clean_into("Hello!", &mut buf);
        assert_eq!(buf, "Hello");
        assert_eq!(buf.capacity(), cap);

        cleaner.clean_into("...", &mut buf);
        assert_eq!(buf, "");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn long_tokens_spill_without_loss() {
        let input = format!("\"{}'s\"", "a".repeat(100));
        assert_eq!(clean(&input), format!("{}'s", "a".repeat(100)));
    }

    #[test]
    fn cleaning_is_idempotent() {
        let samples = ["He", "said,", "''word''", "a'.b", "rock'n'roll", "90's", "e.g."];
        for s in samples {
            let once = clean(s);
            assert_eq!(clean(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn default_config_keeps_contractions() {
        assert!(CleanerConfig::default().keep_contractions);
        assert!(WordCleaner::default().config().keep_contractions);
    }
}
