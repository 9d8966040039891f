//! Clue lookup with a guaranteed fallback
//!
//! Clue text comes from a [`ClueSource`]. Lookups are case-insensitive, and a
//! word the source cannot answer still gets a templated clue so that a missing
//! definition never fails puzzle output.

use std::collections::{BTreeMap, HashMap};

/// Supplies clue text for words
pub trait ClueSource {
    /// Clue for `word`, or `None` if the source has nothing for it
    fn lookup(&self, word: &str) -> Option<String>;
}

/// Clues held in memory, keyed case-insensitively
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueSheet {
    entries: HashMap<String, String>,
}

impl ClueSheet {
    /// Create an empty clue sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the clue for a word
    pub fn insert(&mut self, word: &str, clue: &str) {
        self.entries
            .insert(word.trim().to_lowercase(), clue.trim().to_string());
    }

    /// Whether the sheet holds no clues
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ClueSource for ClueSheet {
    fn lookup(&self, word: &str) -> Option<String> {
        self.entries
            .get(&word.trim().to_lowercase())
            .filter(|clue| !clue.is_empty())
            .cloned()
    }
}

/// Uses the word itself as its clue
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoClues;

impl ClueSource for EchoClues {
    fn lookup(&self, word: &str) -> Option<String> {
        Some(word.to_lowercase())
    }
}

/// Templated clue used when a source has nothing for a word
pub fn fallback_clue(word: &str) -> String {
    format!("What does \"{}\" mean?", word.to_lowercase())
}

/// Resolved clue for every word of a puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueSet {
    /// Clue text keyed by lowercase word
    pub clues: BTreeMap<String, String>,
}

impl ClueSet {
    /// Clue for a placed or input word, case-insensitive
    pub fn get(&self, word: &str) -> Option<&str> {
        self.clues.get(&word.to_lowercase()).map(String::as_str)
    }
}

/// Resolve a clue for each word, substituting the fallback template where needed
pub fn collect_clues<S, C>(words: &[S], source: &C) -> ClueSet
where
    S: AsRef<str>,
    C: ClueSource + ?Sized,
{
    let clues = words
        .iter()
        .map(|word| {
            let word = word.as_ref().trim();
            let clue = source
                .lookup(word)
                .unwrap_or_else(|| fallback_clue(word));
            (word.to_lowercase(), clue)
        })
        .collect();

    ClueSet { clues }
}
