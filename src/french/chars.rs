//! Character classes for French punctuation spacing
//!
//! Built once on first use; every predicate is a pure membership test on a
//! code point.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Opening guillemet «
pub const LEFT_GUILLEMET: char = '\u{00AB}';

/// Closing guillemet »
pub const RIGHT_GUILLEMET: char = '\u{00BB}';

/// No-break space
pub const NBSP: char = '\u{00A0}';

/// Narrow no-break space
pub const NARROW_NBSP: char = '\u{202F}';

static THIN_SPACE_PUNCT: Lazy<HashSet<char>> = Lazy::new(|| ['!', '?', ';'].into_iter().collect());

static THICK_SPACE_PUNCT: Lazy<HashSet<char>> = Lazy::new(|| [':'].into_iter().collect());

static LEFT_SPACED_PUNCT: Lazy<HashSet<char>> = Lazy::new(|| {
    THIN_SPACE_PUNCT
        .iter()
        .chain(THICK_SPACE_PUNCT.iter())
        .copied()
        .chain(std::iter::once(LEFT_GUILLEMET))
        .collect()
});

static RIGHT_SPACED_PUNCT: Lazy<HashSet<char>> =
    Lazy::new(|| [RIGHT_GUILLEMET].into_iter().collect());

// After these, no space is added before `! ? ;` (e.g. `?!`, `(!)`, `[?]`)
static NULL_CONTEXT_CHARS: Lazy<HashSet<char>> =
    Lazy::new(|| ['!', '?', '[', '(', NBSP, NARROW_NBSP].into_iter().collect());

static GUILLEMET_NULL_CONTEXT_CHARS: Lazy<HashSet<char>> =
    Lazy::new(|| [NBSP, NARROW_NBSP].into_iter().collect());

pub fn is_thin_space_punct(c: char) -> bool {
    THIN_SPACE_PUNCT.contains(&c)
}

pub fn is_thick_space_punct(c: char) -> bool {
    THICK_SPACE_PUNCT.contains(&c)
}

/// Punctuation that takes a space on its left
pub fn is_left_spaced_punct(c: char) -> bool {
    LEFT_SPACED_PUNCT.contains(&c)
}

/// Punctuation that takes a space on its right
pub fn is_right_spaced_punct(c: char) -> bool {
    RIGHT_SPACED_PUNCT.contains(&c)
}

pub fn is_null_context(c: char) -> bool {
    NULL_CONTEXT_CHARS.contains(&c)
}

pub fn is_guillemet_null_context(c: char) -> bool {
    GUILLEMET_NULL_CONTEXT_CHARS.contains(&c)
}
