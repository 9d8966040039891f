//! Square letter grid backing a crossword under construction
//!
//! Cells hold an optional letter. The grid is sized once at construction and
//! never resized; placement operations only ever fill cells.

use ndarray::Array2;

use crate::spatial::placement::{Direction, Placement};

/// Fixed-size square grid of optional letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    /// Cell contents indexed by `[row, col]` (`None` = no letter)
    cells: Array2<Option<char>>,
    size: usize,
}

impl LetterGrid {
    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
            size,
        }
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Letter at a position, `None` for empty or out-of-bounds cells
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get([row, col]).copied().flatten()
    }

    /// Whether a position lies inside the grid
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Check that a word fits at a placement without contradicting existing letters
    ///
    /// The whole extent must lie inside the grid and every covered cell must be
    /// empty or already hold the same letter.
    pub fn fits(&self, word: &str, placement: Placement) -> bool {
        let Placement {
            row,
            col,
            direction,
        } = placement;
        if !self.contains(row, col) {
            return false;
        }

        let length = word.chars().count();
        let end = match direction {
            Direction::Across => col + length,
            Direction::Down => row + length,
        };
        if end > self.size {
            return false;
        }

        word.chars().enumerate().all(|(offset, letter)| {
            direction
                .step(row, col, offset)
                .and_then(|position| self.cells.get(position))
                .is_some_and(|cell| cell.is_none_or(|existing| existing == letter))
        })
    }

    /// Write a word's letters starting at a placement
    ///
    /// Does not validate; cells beyond the grid edge are skipped.
    pub fn write(&mut self, word: &str, placement: Placement) {
        let Placement {
            row,
            col,
            direction,
        } = placement;
        for (offset, letter) in word.chars().enumerate() {
            let Some(position) = direction.step(row, col, offset) else {
                break;
            };
            if let Some(cell) = self.cells.get_mut(position) {
                *cell = Some(letter);
            }
        }
    }

    /// Copy of the grid as rows of one-letter strings, `""` for empty cells
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| self.get(row, col).map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
