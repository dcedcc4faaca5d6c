//! Delimiter Tokenizer Module
//!
//! Splits raw text into candidate tokens. This is the first stage of the
//! analysis pipeline: tokens come out exactly as they appear in the input,
//! punctuation and all, and are handed to the [`WordCleaner`] next.
//!
//! ## What It Does
//!
//! The delimiter set is fixed: space (`0x20`), line-feed (`0x0A`) and
//! carriage-return (`0x0D`). Given `"line\nline\rtaboo\r\nline"` it emits:
//!
//! ```text
//! "line", "line", "taboo", "", "line"
//! ```
//!
//! ## Empty Tokens
//!
//! Consecutive delimiters (an empty line, or a `"\r\n"` pair) produce empty
//! tokens. They are *not* filtered here: an empty token cleans to an empty
//! word, and empty words are dropped before counting. An empty input yields
//! exactly one empty token.
//!
//! Tabs and other whitespace are not delimiters. `"a\tb"` is one token.
//!
//! ## Zero Allocation
//!
//! Tokens are slices of the input. Delimiters are located with
//! `memchr3`, so the scan is a vectorized byte search.
//!
//! [`WordCleaner`]: crate::analyzer::WordCleaner

use memchr::{memchr3_iter, Memchr3};

/// The bytes that separate tokens.
pub const DELIMITERS: [u8; 3] = [b' ', b'\n', b'\r'];

/// Returns `true` if `ch` is one of the token delimiters.
#[inline(always)]
pub const fn is_delimiter(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\r')
}

/// Splits raw text on the fixed delimiter set.
///
/// ## Example
///
/// ```
/// use tally_core::analyzer::Tokenizer;
///
/// let mut tokens = Vec::new();
/// Tokenizer::new().split("Hello World!", |token| tokens.push(token));
///
/// assert_eq!(tokens, ["Hello", "World!"]);
/// ```
#[derive(Debug, Copy, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Emits every token of `text`, left to right, including empty ones.
    #[inline]
    pub fn split<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str),
    {
        for token in self.tokens(text) {
            emit(token);
        }
    }

    /// Returns an iterator over the tokens of `text`.
    #[inline]
    pub fn tokens<'t>(&self, text: &'t str) -> Tokens<'t> {
        let [a, b, c] = DELIMITERS;
        Tokens {
            text,
            delimiters: memchr3_iter(a, b, c, text.as_bytes()),
            start: 0,
            finished: false,
        }
    }
}

/// Iterator over the tokens of a text, produced by [`Tokenizer::tokens`].
pub struct Tokens<'t> {
    text: &'t str,
    delimiters: Memchr3<'t>,
    start: usize,
    finished: bool,
}

impl<'t> Iterator for Tokens<'t> {
    type Item = &'t str;

    #[inline]
    fn next(&mut self) -> Option<&'t str> {
        if self.finished {
            return None;
        }

        // Delimiters are ASCII and can never fall inside a multi-byte
        // sequence, so both slice bounds are char boundaries.
        match self.delimiters.next() {
            Some(i) => {
                let token = &self.text[self.start..i];
                self.start = i + 1;
                Some(token)
            }
            None => {
                self.finished = true;
                Some(&self.text[self.start..])
            }
        }
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<&str> {
        let mut out = Vec::new();
        Tokenizer::new().split(input, |token| out.push(token));
        out
    }

    #[test]
    fn single_word() {
        assert_eq!(collect("hello"), ["hello"]);
    }

    #[test]
    fn two_words() {
        assert_eq!(collect("Hello World!"), ["Hello", "World!"]);
    }

    #[test]
    fn empty_input_yields_one_empty_token() {
        assert_eq!(collect(""), [""]);
    }

    #[test]
    fn consecutive_delimiters_yield_empty_tokens() {
        assert_eq!(
            collect("line\nline\rtaboo\r\nline"),
            ["line", "line", "taboo", "", "line"]
        );
        assert_eq!(collect("a  b"), ["a", "", "b"]);
    }

    #[test]
    fn leading_and_trailing_delimiters() {
        assert_eq!(collect(" a "), ["", "a", ""]);
        assert_eq!(collect("\n"), ["", ""]);
    }

    #[test]
    fn tab_is_not_a_delimiter() {
        assert_eq!(collect("a\tb c"), ["a\tb", "c"]);
    }

    #[test]
    fn punctuation_is_left_in_place() {
        assert_eq!(
            collect("He said, \"He said he is.\""),
            ["He", "said,", "\"He", "said", "he", "is.\""]
        );
    }

    #[test]
    fn multibyte_tokens() {
        assert_eq!(collect("café 你好\r\nżółć"), ["café", "你好", "", "żółć"]);
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().split(&input, |token| {
            let ptr = token.as_ptr() as usize;
            assert!(ptr >= base && ptr <= end);
        });
    }

    #[test]
    fn iterator_is_fused() {
        let mut tokens = Tokenizer::new().tokens("a b");
        assert_eq!(tokens.next(), Some("a"));
        assert_eq!(tokens.next(), Some("b"));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }

    #[test]
    fn delimiter_predicate_matches_table() {
        for b in DELIMITERS {
            assert!(is_delimiter(b as char));
        }
        assert!(!is_delimiter('\t'));
        assert!(!is_delimiter('a'));
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::new();
        assert_eq!(t.tokens("one two").count(), 2);
        assert_eq!(t.tokens("one two three").count(), 3);
    }
}
