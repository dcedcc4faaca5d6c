//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Tokenizer**: Splits raw text on space, line-feed and carriage-return
//! - **Cleaner**: Strips punctuation from each token, keeping hyphens and
//!   contraction apostrophes
//! - **Classify**: Unicode general-category predicates used by the cleaner

pub mod classify;
pub mod cleaner;
pub mod tokenizer;

pub use classify::{is_letter, is_punctuation};
pub use cleaner::{CleanerConfig, WordCleaner};
pub use tokenizer::{Tokenizer, Tokens};
