//! JSON document export
//!
//! Body shape: `{ size, grid, layout, clues, unplaced }` with `""` for empty
//! grid cells and lowercase directions.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::algorithm::builder::Crossword;
use crate::io::error::{CrosswordError, Result};
use crate::puzzle::clues::ClueSet;
use crate::spatial::PlacedWord;

/// Serializable view of a finished puzzle and its clues
#[derive(Debug, Serialize)]
pub struct PuzzleDocument<'a> {
    /// Grid side length
    pub size: usize,
    /// Rows of one-letter strings
    pub grid: &'a [Vec<String>],
    /// Placed words in placement order
    pub layout: &'a [PlacedWord],
    /// Clue text keyed by lowercase word
    pub clues: &'a BTreeMap<String, String>,
    /// Words that could not be placed
    pub unplaced: &'a [String],
}

impl<'a> PuzzleDocument<'a> {
    /// Borrow a crossword and its clues as a document
    pub fn new(crossword: &'a Crossword, clues: &'a ClueSet) -> Self {
        Self {
            size: crossword.size,
            grid: &crossword.grid,
            layout: &crossword.layout,
            clues: &clues.clues,
            unplaced: &crossword.unplaced,
        }
    }

    /// Pretty-printed JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Write the puzzle document as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written
pub fn export_json(crossword: &Crossword, clues: &ClueSet, output_path: &Path) -> Result<()> {
    let json = PuzzleDocument::new(crossword, clues)
        .to_json()
        .map_err(|e| CrosswordError::Serialization {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CrosswordError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, json).map_err(|e| CrosswordError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write file",
        source: e,
    })
}
