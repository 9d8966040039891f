//! Crossword grid construction by greedy first-fit letter crossing
//!
//! Words are placed in input order on a fixed square grid. Each word after the
//! first crosses an already placed word at a shared letter where possible, and
//! otherwise falls back to a bounded number of seeded random placements.

#![forbid(unsafe_code)]

/// Grid construction: crossing search, random fallback and the builder
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Clue lookup and numbering for finished puzzles
pub mod puzzle;
/// Letter grid and placement records
pub mod spatial;

pub use algorithm::builder::{Crossword, GridBuilder, generate_crossword};
pub use io::error::{CrosswordError, Result};
