//! File formats, command-line handling and shared error types

/// Command-line parsing and batch processing
pub mod cli;
/// Constants and generation defaults
pub mod configuration;
/// Error types
pub mod error;
/// JSON document export
pub mod export;
/// PNG grid rendering
pub mod image;
/// Progress display for batches of word lists
pub mod progress;
/// Plain-text puzzle sheets
pub mod text;
/// Placement playback as animated GIF
pub mod visualization;
/// Word list and clue sheet loading
pub mod wordlist;
