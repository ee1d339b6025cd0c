//! Case-insensitive word frequencies
use log::warn;
use std::collections::btree_map::{self, BTreeMap};
use std::io::{self, BufRead};
use std::iter::FromIterator;

/// True if a token is made only of alphabetic characters
///
/// # Examples
///
/// ```
/// assert!(text_stats::is_word("Cat"));
/// assert!(text_stats::is_word("café"));
/// assert!(!text_stats::is_word("cat3"));
/// assert!(!text_stats::is_word("don't"));
/// assert!(!text_stats::is_word(""));
/// ```
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Word counts keyed by lowercase word, iterated in lexicographic order
///
/// It implements `FromIterator` so it can be collected from tokens, silently skipping the ones
/// that aren't words.
///
/// # Examples
///
/// ```
/// let counts: text_stats::WordCounts = "Cat cat CAT dog".split_whitespace().collect();
/// assert_eq!(3, counts.get("cat"));
/// assert_eq!(2, counts.unique());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCounts {
    counts: BTreeMap<String, u64>,
}

impl WordCounts {
    /// Create empty counts
    pub fn new() -> Self {
        WordCounts {
            counts: BTreeMap::new(),
        }
    }

    /// Count a token, returning false without counting if it isn't a word
    pub fn add(&mut self, token: &str) -> bool {
        if !is_word(token) {
            return false;
        }
        *self.counts.entry(token.to_lowercase()).or_insert(0) += 1;
        true
    }

    /// Count every whitespace separated token of a reader
    ///
    /// Returns the rejected tokens in input order.
    pub fn add_lines<R: BufRead>(&mut self, reader: R) -> io::Result<Vec<String>> {
        let mut invalid = Vec::new();
        for line in reader.lines() {
            for token in line?.split_whitespace() {
                if !self.add(token) {
                    warn!("rejected token {:?}", token);
                    invalid.push(token.to_owned());
                }
            }
        }
        Ok(invalid)
    }

    /// Get the count of a word, matched case-insensitively
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn unique(&self) -> usize {
        self.counts.len()
    }

    /// Total number of counted words
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(word, count)` in lexicographic order of the word
    pub fn iter(&self) -> btree_map::Iter<'_, String, u64> {
        self.counts.iter()
    }
}

impl<'a> FromIterator<&'a str> for WordCounts {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = WordCounts::new();
        for token in iter {
            counts.add(token);
        }
        counts
    }
}

impl<'a> IntoIterator for &'a WordCounts {
    type Item = (&'a String, &'a u64);
    type IntoIter = btree_map::Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
