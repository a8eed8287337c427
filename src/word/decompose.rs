//! Character decomposition for accent-insensitive guessing.
//!
//! A composed character such as `é` can be revealed by guessing either `é`
//! or its base letter `e`.

use unicode_normalization::char::{compose, decompose_canonical};
use unicode_normalization::UnicodeNormalization;

/// Hangul syllables decompose algorithmically into jamo, which are not a
/// meaningful "base letter" for guessing.
const HANGUL_SYLLABLES: std::ops::RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

/// Characters accepted as a guess for one position of the secret word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessSet {
    /// The character exactly as it appears in the word
    pub literal: char,
    /// Its base character, when the literal is a canonical composition
    pub base: Option<char>,
}

impl GuessSet {
    pub fn for_char(c: char) -> Self {
        Self {
            literal: c,
            base: base_char(c),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.literal == c || self.base == Some(c)
    }

    pub fn len(&self) -> usize {
        if self.base.is_some() {
            2
        } else {
            1
        }
    }

    /// Never empty: the literal character is always accepted.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Base character of a canonically composed character, if any.
///
/// This is the first scalar of the single-level canonical mapping, so
/// `ǖ` gives `ü` rather than `u`.
fn base_char(c: char) -> Option<char> {
    if HANGUL_SYLLABLES.contains(&c) {
        return None;
    }
    let mut full = Vec::new();
    decompose_canonical(c, |d| full.push(d));
    if full == [c] {
        return None;
    }

    // Singleton mappings (U+212B ANGSTROM SIGN -> U+00C5) recompose to their target
    let recomposed: Vec<char> = full.iter().copied().nfc().collect();
    if let [d] = recomposed.as_slice() {
        if *d != c {
            return Some(*d);
        }
    }

    // Otherwise c is a head plus one mark: find the mark that composes back to c
    (1..full.len())
        .rev()
        .find_map(|j| head_without(&full, j, c))
        .or_else(|| full[..full.len() - 1].iter().copied().nfc().next())
}

/// The single character left after removing `full[j]`, if it composes
/// with that mark into `c`.
fn head_without(full: &[char], j: usize, c: char) -> Option<char> {
    let rest = full[..j].iter().chain(&full[j + 1..]).copied();
    let mut head = rest.nfc();
    match (head.next(), head.next()) {
        (Some(h), None) if compose(h, full[j]) == Some(c) => Some(h),
        _ => None,
    }
}

/// One guess set per character of `word`, in order.
pub fn decompose(word: &str) -> Vec<GuessSet> {
    word.chars().map(GuessSet::for_char).collect()
}
