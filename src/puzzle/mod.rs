//! Puzzle presentation concerns layered on top of a finished grid

/// Clue sources and fallback clue text
pub mod clues;
/// Clue numbering in layout order
pub mod numbering;
