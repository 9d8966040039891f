//! Word orientation and placement records

use serde::Serialize;
use std::fmt;

/// Orientation of a word on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
}

impl Direction {
    /// The orientation crossing this one
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Grid position of the `offset`-th letter of a word starting at `(row, col)`
    ///
    /// `None` when the position is not representable.
    pub const fn step(self, row: usize, col: usize, offset: usize) -> Option<[usize; 2]> {
        match self {
            Self::Across => match col.checked_add(offset) {
                Some(col) => Some([row, col]),
                None => None,
            },
            Self::Down => match row.checked_add(offset) {
                Some(row) => Some([row, col]),
                None => None,
            },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// Start position and orientation for a word that has not been written yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Row of the first letter
    pub row: usize,
    /// Column of the first letter
    pub col: usize,
    /// Orientation
    pub direction: Direction,
}

/// A word that has been written into the grid
///
/// Stores coordinates only; cell contents live in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedWord {
    /// Uppercase word text
    pub word: String,
    /// Row of the first letter
    pub row: usize,
    /// Column of the first letter
    pub col: usize,
    /// Orientation
    pub direction: Direction,
}

impl PlacedWord {
    /// Record a word at the given placement
    pub fn new(word: &str, placement: Placement) -> Self {
        Self {
            word: word.to_string(),
            row: placement.row,
            col: placement.col,
            direction: placement.direction,
        }
    }

    /// Number of letters
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Whether the word has no letters
    pub const fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Grid positions paired with the letter stored there, in reading order
    pub fn cells(&self) -> impl Iterator<Item = ([usize; 2], char)> + '_ {
        self.word.chars().enumerate().filter_map(|(offset, letter)| {
            self.direction
                .step(self.row, self.col, offset)
                .map(|position| (position, letter))
        })
    }
}
