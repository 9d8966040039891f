//! Word list and clue sheet file loading

use std::path::Path;

use crate::io::configuration::CLUE_SEPARATOR;
use crate::io::error::{CrosswordError, Result, invalid_word_list};
use crate::puzzle::clues::ClueSheet;

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CrosswordError::FileSystem {
        path: path.to_path_buf(),
        operation: "read file",
        source: e,
    })
}

/// Parse one word per line, skipping blank lines
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a word list file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file contains no words
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let words = parse_words(&read_file(path)?);
    if words.is_empty() {
        return Err(invalid_word_list(&format!(
            "'{}' contains no words",
            path.display()
        )));
    }
    Ok(words)
}

/// Parse `word: clue` lines; lines without a separator or with an empty side are skipped
pub fn parse_clue_sheet(content: &str) -> ClueSheet {
    let mut sheet = ClueSheet::new();
    for line in content.lines() {
        let Some((word, clue)) = line.split_once(CLUE_SEPARATOR) else {
            continue;
        };
        if word.trim().is_empty() || clue.trim().is_empty() {
            continue;
        }
        sheet.insert(word, clue);
    }
    sheet
}

/// Load a clue sheet file
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub fn load_clue_sheet(path: &Path) -> Result<ClueSheet> {
    Ok(parse_clue_sheet(&read_file(path)?))
}
