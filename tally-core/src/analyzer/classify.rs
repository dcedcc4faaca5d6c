//! Character classification for word cleaning.
//!
//! Punctuation and letters are defined by Unicode general category, not by
//! any platform notion of "ASCII punctuation":
//!
//! | group       | categories                     |
//! |-------------|--------------------------------|
//! | punctuation | Pc, Pd, Ps, Pe, Pi, Pf, Po     |
//! | letter      | Lu, Ll, Lt, Lm, Lo             |
//!
//! Note that several characters commonly thought of as punctuation are
//! *symbols* in Unicode and therefore survive cleaning: `$`, `+`, `<`, `=`,
//! `>`, `^`, `|`, `~` and the backtick.
//! Conversely `§`, `¶` and `¿` are punctuation.
//!
//! ASCII input takes a table-free fast path; everything else goes through
//! the general category lookup.

use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// ASCII characters in a Unicode `P*` category.
#[inline(always)]
const fn is_ascii_punctuation(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'"'
            | b'#'
            | b'%'
            | b'&'
            | b'\''
            | b'('
            | b')'
            | b'*'
            | b','
            | b'-'
            | b'.'
            | b'/'
            | b':'
            | b';'
            | b'?'
            | b'@'
            | b'['
            | b'\\'
            | b']'
            | b'_'
            | b'{'
            | b'}'
    )
}

/// Returns `true` if `ch` belongs to the Unicode Punctuation group.
#[inline]
pub fn is_punctuation(ch: char) -> bool {
    if ch.is_ascii() {
        return is_ascii_punctuation(ch as u8);
    }
    ch.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// Returns `true` if `ch` belongs to the Unicode Letter group.
///
/// Combining marks (category M*) are not letters.
#[inline]
pub fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }
    ch.general_category_group() == GeneralCategoryGroup::Letter
}
