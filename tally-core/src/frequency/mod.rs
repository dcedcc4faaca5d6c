//! Word frequency aggregation.
//!
//! Counts are kept in an unordered `FxHashMap`; the alphabetized views are
//! derived from it on demand and cached in `OnceCell` slots.
//!
//! Cache contract:
//! - every [`WordFrequencies::add_word`] clears both views
//! - a read after a mutation sorts once; further reads return the cached
//!   slice until the next mutation
//!
//! Threading:
//! - [`WordFrequencies`] is `Send` but not `Sync`. The lazily filled caches
//!   are not safe to share across threads.

mod api;
mod sorted;
mod stats;
mod types;

pub use types::WordFrequencies;
