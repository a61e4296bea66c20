//! Word counting and per-length winners.
//!
//! Two phases: an order-independent count (sequential or rayon fold/reduce,
//! identical results), then a selection pass that keeps, for every word length,
//! the word with the highest count. Equal counts go to the lexicographically
//! smallest word, so the outcome never depends on hash-map iteration order.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::HashMap;

/// Occurrences of each word.
pub type WordCount = HashMap<String, u64>;

/// The most frequent word of one length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthWinner {
    pub word: String,
    pub count: u64,
}

impl LengthWinner {
    /// True if `(word, count)` should replace this winner.
    fn is_beaten_by(&self, word: &str, count: u64) -> bool {
        count > self.count || (count == self.count && word < self.word.as_str())
    }
}

/// Word length (in chars) to its winner, ascending by length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthResult {
    by_length: BTreeMap<usize, LengthWinner>,
}

impl LengthResult {
    /// Pick the winner of every length present in `counts`.
    pub fn from_counts(counts: &WordCount) -> Self {
        let mut by_length: BTreeMap<usize, LengthWinner> = BTreeMap::new();
        for (word, &count) in counts {
            match by_length.entry(word.chars().count()) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(LengthWinner {
                        word: word.clone(),
                        count,
                    });
                }
                btree_map::Entry::Occupied(mut slot) => {
                    if slot.get().is_beaten_by(word, count) {
                        slot.insert(LengthWinner {
                            word: word.clone(),
                            count,
                        });
                    }
                }
            }
        }
        Self { by_length }
    }

    /// Winning word for `length`, if any word of that length was seen.
    pub fn get(&self, length: usize) -> Option<&str> {
        self.by_length.get(&length).map(|w| w.word.as_str())
    }

    pub fn winner(&self, length: usize) -> Option<&LengthWinner> {
        self.by_length.get(&length)
    }

    /// Entries in ascending length order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &LengthWinner)> + '_ {
        self.by_length.iter().map(|(len, w)| (*len, w))
    }

    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.by_length.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_length.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }
}

/// Count occurrences of each word.
pub fn count_words<I>(words: I) -> WordCount
where
    I: IntoIterator<Item = String>,
{
    let mut counts = WordCount::new();
    for word in words {
        *counts.entry(word).or_insert(0) += 1;
    }
    counts
}

/// Same counts as [`count_words`], built from per-thread partial maps merged by summation.
pub fn count_words_parallel(words: &[String]) -> WordCount {
    words
        .par_iter()
        .fold(WordCount::new, |mut counts, word| {
            *counts.entry(word.clone()).or_insert(0) += 1;
            counts
        })
        .reduce(WordCount::new, merge_counts)
}

/// Sum two partial counts.
pub fn merge_counts(a: WordCount, b: WordCount) -> WordCount {
    let (mut into, from) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    for (word, n) in from {
        *into.entry(word).or_insert(0) += n;
    }
    into
}

/// Count `words`, then pick the most frequent word of each length.
pub fn aggregate<I>(words: I) -> LengthResult
where
    I: IntoIterator<Item = String>,
{
    LengthResult::from_counts(&count_words(words))
}

/// [`aggregate`] with the rayon counting phase.
pub fn aggregate_parallel(words: &[String]) -> LengthResult {
    LengthResult::from_counts(&count_words_parallel(words))
}
