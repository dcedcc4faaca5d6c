//! Word-frequency analysis.
//!
//! Turns a body of text into three numbers and two sorted lists:
//!
//! - total word count (duplicates included)
//! - unique word count
//! - unique words, ordinal order
//! - unique words with their occurrence counts, same order
//!
//! ```
//! let analysis = tally_core::analyze(Some("Hello World!"));
//!
//! assert_eq!(analysis.total_word_count(), 2);
//! assert_eq!(analysis.unique_words(), ["Hello", "World"]);
//! ```
//!
//! Words are case-sensitive. Punctuation is stripped except for hyphens and
//! apostrophes inside contractions; see [`analyzer::cleaner`].

pub mod analysis;
pub mod analyzer;
pub mod frequency;

pub use analysis::TextAnalysis;
pub use analyzer::{CleanerConfig, Tokenizer, WordCleaner};
pub use frequency::WordFrequencies;
pub use tally_types::{AnalysisSummary, WordCount};

/// Analyzes `text`, treating an absent text as empty.
#[inline]
pub fn analyze(text: Option<&str>) -> TextAnalysis {
    TextAnalysis::from_optional(text)
}
