//! Clue numbering for placed words
//!
//! Entries are numbered in layout order starting at 1. When several entries
//! start on the same cell, that cell shows the number met first.

use std::collections::HashMap;

use crate::spatial::{Direction, PlacedWord};

/// A placed word with its clue number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedEntry {
    /// One-based position in the layout
    pub number: usize,
    /// The placed word
    pub placed: PlacedWord,
}

/// Number entries in layout order, first entry = 1
pub fn number_layout(layout: &[PlacedWord]) -> Vec<NumberedEntry> {
    layout
        .iter()
        .enumerate()
        .map(|(index, placed)| NumberedEntry {
            number: index + 1,
            placed: placed.clone(),
        })
        .collect()
}

/// Number shown in each start cell
pub fn start_numbers(entries: &[NumberedEntry]) -> HashMap<[usize; 2], usize> {
    let mut numbers = HashMap::with_capacity(entries.len());
    for entry in entries {
        numbers
            .entry([entry.placed.row, entry.placed.col])
            .or_insert(entry.number);
    }
    numbers
}

/// Partition entries into (across, down), each keeping layout order
pub fn split_by_direction(entries: &[NumberedEntry]) -> (Vec<&NumberedEntry>, Vec<&NumberedEntry>) {
    entries
        .iter()
        .partition(|entry| entry.placed.direction == Direction::Across)
}
