//! Tests for command-line interface parsing and word list processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::ffi::OsStr;
    use std::fs;
    use std::path::{Path, PathBuf};
    use wordgrid::io::cli::{Cli, FileProcessor};
    use wordgrid::io::configuration::{DEFAULT_GRID_SIZE, DEFAULT_SEED};

    fn cli_for(args: &[&OsStr]) -> Cli {
        Cli::parse_from(std::iter::once(OsStr::new("program")).chain(args.iter().copied()))
    }

    // Tests CLI parsing with only required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "words.txt"]);

        assert_eq!(cli.target, PathBuf::from("words.txt"));
        assert_eq!(cli.size, DEFAULT_GRID_SIZE);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(cli.clues.is_none());
        assert!(!cli.echo_clues);
        assert!(!cli.visualize);
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "lists",
            "--size",
            "15",
            "--seed",
            "123",
            "--clues",
            "clues.txt",
            "--visualize",
            "--json",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(cli.target, PathBuf::from("lists"));
        assert_eq!(cli.size, 15);
        assert_eq!(cli.seed, 123);
        assert_eq!(cli.clues, Some(PathBuf::from("clues.txt")));
        assert!(cli.visualize);
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(!cli.skip_existing());
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "words.txt", "-n", "9", "-s", "7", "-q", "-j"]);

        assert_eq!(cli.size, 9);
        assert_eq!(cli.seed, 7);
        assert!(cli.quiet);
        assert!(cli.json);
        assert!(!cli.should_show_progress());
    }

    // Tests echo clues cannot be combined with a clue sheet
    // Verified by removing the argument conflict
    #[test]
    fn test_cli_echo_clues_conflicts_with_sheet() {
        let cli = Cli::parse_from(["program", "words.txt", "--echo-clues"]);
        assert!(cli.echo_clues);

        assert!(
            Cli::try_parse_from(["program", "words.txt", "--echo-clues", "-c", "clues.txt"])
                .is_err()
        );
    }

    // Tests echo clues use each word as its own clue
    // Verified by always reading the clue sheet
    #[test]
    fn test_process_with_echo_clues() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("fruit.txt");
        fs::write(&list, "apple
peach
").unwrap();

        let cli = cli_for(&[list.as_os_str(), OsStr::new("--echo-clues"), OsStr::new("-q")]);
        FileProcessor::new(cli).process().unwrap();

        let sheet = fs::read_to_string(FileProcessor::get_output_path(&list, "txt")).unwrap();
        assert!(sheet.contains("1. apple (5)"));
        assert!(sheet.contains("2. peach (5)"));
        assert!(!sheet.contains("What does"));
    }

    // Tests output naming next to the input
    // Verified by dropping the output suffix
    #[test]
    fn test_get_output_path() {
        assert_eq!(
            FileProcessor::get_output_path(Path::new("lists/fruit.txt"), "png"),
            PathBuf::from("lists/fruit_crossword.png")
        );
        assert_eq!(
            FileProcessor::get_output_path(Path::new("fruit.txt"), "txt"),
            PathBuf::from("fruit_crossword.txt")
        );
    }

    // Tests directory scans skip outputs, the clue sheet and other extensions
    // Verified by collecting every file in the directory
    #[test]
    fn test_collect_files_filters_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "pear\n").unwrap();
        fs::write(dir.path().join("a.txt"), "apple\n").unwrap();
        fs::write(dir.path().join("a_crossword.txt"), "output\n").unwrap();
        fs::write(dir.path().join("clues.txt"), "apple: fruit\n").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored\n").unwrap();

        let clue_path = dir.path().join("clues.txt");
        let cli = cli_for(&[
            dir.path().as_os_str(),
            OsStr::new("--clues"),
            clue_path.as_os_str(),
            OsStr::new("--no-skip"),
            OsStr::new("--quiet"),
        ]);
        let processor = FileProcessor::new(cli);

        let files = processor.collect_files().unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
        );
    }

    // Tests lists with existing output are skipped by default
    // Verified by inverting skip logic
    #[test]
    fn test_collect_files_skips_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("fruit.txt");
        fs::write(&list, "apple\n").unwrap();
        fs::write(dir.path().join("fruit_crossword.txt"), "done\n").unwrap();

        let cli = cli_for(&[list.as_os_str(), OsStr::new("-q")]);
        let processor = FileProcessor::new(cli);

        assert!(processor.collect_files().unwrap().is_empty());
    }

    // Tests a missing target is an error
    // Verified by treating missing targets as empty
    #[test]
    fn test_collect_files_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let cli = cli_for(&[missing.as_os_str(), OsStr::new("-q")]);
        let processor = FileProcessor::new(cli);

        assert!(processor.collect_files().is_err());
    }

    // Tests end-to-end processing writes every requested output
    // Verified by skipping the JSON export
    #[test]
    fn test_process_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("fruit.txt");
        fs::write(&list, "apple\npeach\npear\nfig\n").unwrap();
        let clues = dir.path().join("clues.txt");
        fs::write(&clues, "apple: Keeps the doctor away\n").unwrap();

        let cli = cli_for(&[
            list.as_os_str(),
            OsStr::new("-c"),
            clues.as_os_str(),
            OsStr::new("-j"),
            OsStr::new("-v"),
            OsStr::new("-q"),
        ]);
        let mut processor = FileProcessor::new(cli);
        processor.process().unwrap();

        for extension in ["txt", "png", "json", "gif"] {
            let output = FileProcessor::get_output_path(&list, extension);
            assert!(output.exists(), "missing {}", output.display());
        }

        let sheet = fs::read_to_string(FileProcessor::get_output_path(&list, "txt")).unwrap();
        assert!(sheet.contains("1. Keeps the doctor away (5)"));
    }
}
