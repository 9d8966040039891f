//! Tests for plain-text puzzle sheets

#[cfg(test)]
mod tests {
    use wordgrid::generate_crossword;
    use wordgrid::io::text::{export_text, render_grid_text, render_puzzle};
    use wordgrid::puzzle::clues::{ClueSheet, collect_clues};

    // Tests empty cells render as dots and letters are space separated
    // Verified by rendering empty cells as spaces
    #[test]
    fn test_render_grid_text() {
        let grid = vec![
            vec!["A".to_string(), String::new()],
            vec![String::new(), "B".to_string()],
        ];

        assert_eq!(render_grid_text(&grid), "A .\n. B");
    }

    // Tests clues are numbered in layout order and grouped by direction
    // Verified by numbering across and down separately
    #[test]
    fn test_render_puzzle_groups_clues() {
        let crossword = generate_crossword(&["APPLE", "PEACH"], 12, 0).unwrap();
        let mut sheet = ClueSheet::new();
        sheet.insert("apple", "Red fruit");
        let clues = collect_clues(&["APPLE", "PEACH"], &sheet);

        let text = render_puzzle(&crossword, &clues);

        assert!(text.contains("Across\n  1. Red fruit (5)"));
        assert!(text.contains("Down\n  2. What does \"peach\" mean? (5)"));
        assert!(!text.contains("Unplaced"));
    }

    // Tests unplaced words are listed after the clues
    // Verified by omitting the unplaced section
    #[test]
    fn test_render_puzzle_lists_unplaced() {
        let crossword = generate_crossword(&["ABC", "ABCDEFGH"], 4, 0).unwrap();
        let clues = collect_clues(&["ABC", "ABCDEFGH"], &ClueSheet::new());

        let text = render_puzzle(&crossword, &clues);

        assert!(text.contains("Unplaced\n  - ABCDEFGH"));
    }

    // Tests the sheet is written to disk, creating parent directories
    // Verified by skipping directory creation
    #[test]
    fn test_export_text_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("fruit_crossword.txt");
        let crossword = generate_crossword(&["APPLE"], 7, 0).unwrap();
        let clues = collect_clues(&["APPLE"], &ClueSheet::new());

        export_text(&crossword, &clues, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(". . . . . . ."));
        assert!(content.contains("A P P L E"));
    }
}
