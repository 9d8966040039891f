//! Placement capture and GIF generation for construction playback

use std::collections::HashMap;

use image::{Delay, Frame};

use crate::io::configuration::FINAL_FRAME_HOLD;
use crate::io::error::{CrosswordError, Result};
use crate::io::image::render_grid;
use crate::spatial::PlacedWord;

/// Captures word placements for visualization
///
/// Records placement events during construction so the fill order can be
/// replayed as an animation afterwards.
pub struct VisualizationCapture {
    placements: Vec<PlacedWord>,
    size: usize,
}

impl VisualizationCapture {
    /// Create a capture for a `size` x `size` grid expecting about `expected_words` placements
    pub fn new(size: usize, expected_words: usize) -> Self {
        Self {
            placements: Vec::with_capacity(expected_words),
            size,
        }
    }

    /// Records a word placement
    pub fn record_placement(&mut self, placed: &PlacedWord) {
        self.placements.push(placed.clone());
    }

    /// Export the captured placements as a GIF, one frame per word
    ///
    /// Frames are rendered one at a time while encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No placements were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.placements.is_empty() {
            return Err(CrosswordError::InvalidWordList {
                reason: "No word placements captured for visualization".to_string(),
            });
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| CrosswordError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| CrosswordError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(Playback::new(self, frame_delay_ms))
            .map_err(|e| CrosswordError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}

/// Replays placements frame by frame: blank grid, one frame per word, then the
/// finished grid held for `FINAL_FRAME_HOLD` frame delays
struct Playback<'a> {
    remaining: std::slice::Iter<'a, PlacedWord>,
    grid: Vec<Vec<String>>,
    starts: HashMap<[usize; 2], usize>,
    placed: usize,
    delay_ms: u32,
    started: bool,
    finished: bool,
}

impl<'a> Playback<'a> {
    fn new(capture: &'a VisualizationCapture, delay_ms: u32) -> Self {
        Self {
            remaining: capture.placements.iter(),
            grid: vec![vec![String::new(); capture.size]; capture.size],
            starts: HashMap::new(),
            placed: 0,
            delay_ms,
            started: false,
            finished: false,
        }
    }

    fn apply(&mut self, placed: &PlacedWord) {
        for ([row, col], letter) in placed.cells() {
            if let Some(cell) = self.grid.get_mut(row).and_then(|r| r.get_mut(col)) {
                *cell = letter.to_string();
            }
        }
        self.placed += 1;
        self.starts
            .entry([placed.row, placed.col])
            .or_insert(self.placed);
    }

    fn frame(&self, delay_ms: u32) -> Frame {
        Frame::from_parts(
            render_grid(&self.grid, &self.starts),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}

impl Iterator for Playback<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.frame(self.delay_ms));
        }

        if let Some(placed) = self.remaining.next() {
            self.apply(placed);
            Some(self.frame(self.delay_ms))
        } else {
            self.finished = true;
            Some(self.frame(self.delay_ms.saturating_mul(FINAL_FRAME_HOLD)))
        }
    }
}
