//! Tests for PNG grid rendering and export

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use wordgrid::io::configuration::{
        CELL_PIXELS, MAX_GRID_SIZE, MAX_IMAGE_EDGE, MIN_CELL_PIXELS,
    };
    use wordgrid::io::image::{cell_pixels, export_grid_as_png, render_grid};
    use wordgrid::{Crossword, CrosswordError, generate_crossword};

    // Tests image dimensions and cell colours
    // Verified by painting letter cells black
    #[test]
    fn test_render_grid_colors() {
        let grid = vec![
            vec!["A".to_string(), String::new()],
            vec![String::new(), String::new()],
        ];
        let img = render_grid(&grid, &HashMap::new());

        assert_eq!(img.width(), 2 * CELL_PIXELS + 1);
        assert_eq!(img.height(), 2 * CELL_PIXELS + 1);

        let centre = CELL_PIXELS / 2;
        assert_eq!(img.get_pixel(centre, centre).0, [255, 255, 255, 255]);
        assert_eq!(
            img.get_pixel(CELL_PIXELS + centre, centre).0,
            [0, 0, 0, 255]
        );
        assert_eq!(img.get_pixel(0, 0).0, [128, 128, 128, 255]);
    }

    // Tests start cells get a corner marker
    // Verified by ignoring the start map
    #[test]
    fn test_render_grid_start_marker() {
        let grid = vec![vec!["A".to_string()]];
        let mut starts = HashMap::new();
        starts.insert([0, 0], 1);

        let marked = render_grid(&grid, &starts);
        let plain = render_grid(&grid, &HashMap::new());

        assert_ne!(marked.get_pixel(4, 4), plain.get_pixel(4, 4));
    }

    // Tests cells keep full size on small grids and shrink on large ones
    // Verified by always returning CELL_PIXELS
    #[test]
    fn test_cell_pixels_scaling() {
        assert_eq!(cell_pixels(12), CELL_PIXELS);
        assert_eq!(cell_pixels(0), CELL_PIXELS);
        assert!(cell_pixels(200) < CELL_PIXELS);
        assert_eq!(cell_pixels(usize::MAX), MIN_CELL_PIXELS);

        for size in [50, 85, 100, 500, MAX_GRID_SIZE] {
            let edge = size as u32 * cell_pixels(size) + 1;
            assert!(edge <= MAX_IMAGE_EDGE, "size {size} renders {edge} pixels");
        }
    }

    // Tests the largest accepted grid renders within the pixel budget
    // Verified by rendering at full cell size
    #[test]
    fn test_render_largest_grid_is_bounded() {
        let grid = vec![vec![String::new(); MAX_GRID_SIZE]; MAX_GRID_SIZE];
        let img = render_grid(&grid, &HashMap::new());

        assert!(img.width() <= MAX_IMAGE_EDGE);
        assert_eq!(img.width(), img.height());
        assert_eq!(img.get_pixel(1, 1).0, [0, 0, 0, 255]);
    }

    // Tests PNG file creation
    // Verified by disabling file save operation
    #[test]
    fn test_export_grid_as_png_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fruit_crossword.png");
        let crossword = generate_crossword(&["APPLE", "PEACH"], 12, 0).unwrap();

        export_grid_as_png(&crossword, path.to_str().unwrap()).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), 12 * CELL_PIXELS + 1);
    }

    // Tests error when no words placed
    // Verified by ignoring empty layout check
    #[test]
    fn test_export_grid_as_png_empty_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.png");
        let crossword = Crossword {
            size: 2,
            grid: vec![vec![String::new(); 2]; 2],
            layout: Vec::new(),
            unplaced: Vec::new(),
        };

        assert!(matches!(
            export_grid_as_png(&crossword, path.to_str().unwrap()),
            Err(CrosswordError::InvalidWordList { .. })
        ));
        assert!(!path.exists());
    }
}
