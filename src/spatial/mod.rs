//! Spatial data structures for crossword construction
//!
//! This module contains:
//! - The fixed-size letter grid
//! - Word orientation and placement records

/// Fixed-size square letter grid
pub mod grid;
/// Directions, pending placements and placed word records
pub mod placement;

pub use grid::LetterGrid;
pub use placement::{Direction, PlacedWord, Placement};
