//! Plain-text rendering of a finished puzzle

use std::fmt::Write as _;
use std::path::Path;

use crate::algorithm::builder::Crossword;
use crate::io::configuration::EMPTY_CELL_SYMBOL;
use crate::io::error::{CrosswordError, Result};
use crate::puzzle::clues::{ClueSet, fallback_clue};
use crate::puzzle::numbering::{NumberedEntry, number_layout, split_by_direction};

/// Grid rows with letters separated by spaces and a dot for empty cells
pub fn render_grid_text(grid: &[Vec<String>]) -> String {
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|cell| {
                    if cell.is_empty() {
                        EMPTY_CELL_SYMBOL.to_string()
                    } else {
                        cell.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_clue_group(out: &mut String, title: &str, entries: &[&NumberedEntry], clues: &ClueSet) {
    let _ = writeln!(out, "{title}");
    for entry in entries {
        let word = &entry.placed.word;
        let clue = clues
            .get(word)
            .map_or_else(|| fallback_clue(word), str::to_string);
        let _ = writeln!(out, "  {}. {clue} ({})", entry.number, entry.placed.len());
    }
}

/// Full puzzle sheet: grid, numbered clues by direction, then any unplaced words
pub fn render_puzzle(crossword: &Crossword, clues: &ClueSet) -> String {
    let mut out = render_grid_text(&crossword.grid);
    out.push_str("\n\n");

    let entries = number_layout(&crossword.layout);
    let (across, down) = split_by_direction(&entries);
    render_clue_group(&mut out, "Across", &across, clues);
    out.push('\n');
    render_clue_group(&mut out, "Down", &down, clues);

    if !crossword.unplaced.is_empty() {
        out.push_str("\nUnplaced\n");
        for word in &crossword.unplaced {
            let _ = writeln!(out, "  - {word}");
        }
    }

    out
}

/// Write a rendered puzzle sheet to disk
///
/// # Errors
///
/// Returns an error if the parent directory or the file cannot be written
pub fn export_text(crossword: &Crossword, clues: &ClueSet, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CrosswordError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, render_puzzle(crossword, clues)).map_err(|e| {
        CrosswordError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "write file",
            source: e,
        }
    })
}
