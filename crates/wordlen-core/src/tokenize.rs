//! Text to words.
//!
//! The text is split at every single non-letter character (`\P{L}`), so runs of
//! punctuation or whitespace leave empty fragments behind. Fragments shorter than
//! [`MIN_WORD_CHARS`] are dropped; that one rule removes both the empty fragments
//! and one-letter words. Survivors are uppercased with the locale-independent
//! Unicode mapping.

use regex::Regex;
use std::sync::OnceLock;

/// Shortest fragment (in chars) kept as a word.
pub const MIN_WORD_CHARS: usize = 2;

fn non_letter() -> &'static Regex {
    static NON_LETTER: OnceLock<Regex> = OnceLock::new();
    NON_LETTER.get_or_init(|| Regex::new(r"\P{L}").expect("non-letter regex is valid"))
}

/// Lazily yields the words of `text`.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    non_letter()
        .split(text)
        .filter(|fragment| fragment.chars().count() >= MIN_WORD_CHARS)
        .map(str::to_uppercase)
}

/// All words of `text`, in order of appearance.
pub fn tokenize(text: &str) -> Vec<String> {
    words(text).collect()
}
