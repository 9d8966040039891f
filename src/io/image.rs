//! PNG export of the blank puzzle grid

use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crate::algorithm::builder::Crossword;
use crate::io::configuration::{CELL_PIXELS, MAX_IMAGE_EDGE, MIN_CELL_PIXELS};
use crate::io::error::{CrosswordError, Result};
use crate::puzzle::numbering::{number_layout, start_numbers};

const BLOCK_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const OPEN_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);
const LINE_COLOR: Rgba<u8> = Rgba([128, 128, 128, 255]);
const MARKER_COLOR: Rgba<u8> = Rgba([176, 176, 176, 255]);

// Marker square drawn in the corner of cells that start a numbered entry
const MARKER_INSET: u32 = 2;
const MARKER_SIZE: u32 = 5;

/// Cell edge in pixels for a `size` x `size` grid
///
/// Full size cells until the image would pass `MAX_IMAGE_EDGE`, then shrunk,
/// never below `MIN_CELL_PIXELS`.
pub fn cell_pixels(size: usize) -> u32 {
    let size = u32::try_from(size.max(1)).unwrap_or(u32::MAX);
    ((MAX_IMAGE_EDGE - 1) / size).clamp(MIN_CELL_PIXELS, CELL_PIXELS)
}

/// Paint a grid snapshot: letter cells white, empty cells black
///
/// Cells present in `starts` get a corner marker where a clue number would go,
/// when cells are large enough to hold one.
pub fn render_grid(grid: &[Vec<String>], starts: &HashMap<[usize; 2], usize>) -> RgbaImage {
    let cell = cell_pixels(grid.len());
    let edge = (grid.len() as u32).saturating_mul(cell).saturating_add(1);
    let interior = cell - 1;
    let draw_markers = interior > MARKER_INSET + MARKER_SIZE;
    let mut img = RgbaImage::from_pixel(edge, edge, LINE_COLOR);

    for (row, row_data) in grid.iter().enumerate() {
        for (col, letter) in row_data.iter().enumerate() {
            let fill = if letter.is_empty() {
                BLOCK_COLOR
            } else {
                OPEN_COLOR
            };
            let x0 = (col as u32).saturating_mul(cell);
            let y0 = (row as u32).saturating_mul(cell);

            // Interior only; the outermost pixel row/column stays as grid line
            fill_rect(&mut img, x0 + 1, y0 + 1, interior, interior, fill);

            if draw_markers && !letter.is_empty() && starts.contains_key(&[row, col]) {
                fill_rect(
                    &mut img,
                    x0 + 1 + MARKER_INSET,
                    y0 + 1 + MARKER_INSET,
                    MARKER_SIZE,
                    MARKER_SIZE,
                    MARKER_COLOR,
                );
            }
        }
    }

    img
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    for py in y..y.saturating_add(height).min(img.height()) {
        for px in x..x.saturating_add(width).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

/// Export the puzzle grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - No words have been placed in the grid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(crossword: &Crossword, output_path: &str) -> Result<()> {
    if crossword.layout.is_empty() {
        return Err(CrosswordError::InvalidWordList {
            reason: "No words have been placed in the grid".to_string(),
        });
    }

    let starts = start_numbers(&number_layout(&crossword.layout));
    let img = render_grid(&crossword.grid, &starts);

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| CrosswordError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| CrosswordError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
