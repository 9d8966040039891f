//! Command-line interface for batch crossword construction from word list files

use crate::algorithm::builder::{GridBuilder, PlacementOutcome};
use crate::algorithm::fallback::RandomSelector;
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_SEED, GIF_FRAME_DELAY_MS, GeneratorConfig, OUTPUT_SUFFIX,
    WORD_LIST_EXTENSION,
};
use crate::io::error::{CrosswordError, Result};
use crate::io::export::export_json;
use crate::io::image::export_grid_as_png;
use crate::io::progress::{OutcomeTally, ProgressManager};
use crate::io::text::export_text;
use crate::io::wordlist::{load_clue_sheet, load_words};
use crate::puzzle::clues::{ClueSheet, ClueSource, EchoClues, collect_clues};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "wordgrid")]
#[command(
    author,
    version,
    about = "Build crossword grids from word lists by greedy letter crossing"
)]
/// Command-line arguments for the crossword construction tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Word list file (one word per line) or directory of word lists
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid side length
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Random seed for reproducible fallback placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Clue sheet with one `word: clue` pair per line
    #[arg(short, long, value_name = "FILE")]
    pub clues: Option<PathBuf>,

    /// Use each word as its own clue instead of the clue sheet
    #[arg(long, conflicts_with = "clues")]
    pub echo_clues: bool,

    /// Enable construction playback output as animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Also write the puzzle as a JSON document
    #[arg(short, long)]
    pub json: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process word lists even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch processing of word lists with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    clue_sheet: ClueSheet,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
            clue_sheet: ClueSheet::new(),
        }
    }

    /// Process word lists according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, clue loading or puzzle construction fails
    pub fn process(&mut self) -> Result<()> {
        if let Some(ref clue_path) = self.cli.clues {
            self.clue_sheet = load_clue_sheet(clue_path)?;
            if self.clue_sheet.is_empty() {
                self.warn(&format!(
                    "{}: no `word: clue` lines, using fallback clues",
                    clue_path.display()
                ));
            }
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Word lists selected by the target argument
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a word list file nor a directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.should_process_file(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Ok(vec![])
            }
        } else if self.cli.target.is_dir() {
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| CrosswordError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if self.is_word_list(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a word list file or directory",
            ))
        }
    }

    // Our own outputs and the clue sheet share the extension, so they are excluded
    fn is_word_list(&self, path: &Path) -> bool {
        let has_extension =
            path.extension().and_then(|s| s.to_str()) == Some(WORD_LIST_EXTENSION);
        let is_output = path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX));
        let is_clue_sheet = self.cli.clues.as_deref() == Some(path);

        has_extension && !is_output && !is_clue_sheet
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path, "txt");
        if output_path.exists() {
            self.warn(&format!("Skipping: {} (output exists)", input_path.display()));
            false
        } else {
            true
        }
    }

    // Allow print for user feedback when no progress display is active
    #[allow(clippy::print_stderr)]
    fn warn(&self, message: &str) {
        match self.progress_manager {
            Some(ref pm) => pm.println(message),
            None if !self.cli.quiet => eprintln!("{message}"),
            None => {}
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let words = load_words(input_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_list(input_path, words.len());
        }

        let config = GeneratorConfig::with_size(self.cli.size);
        let mut builder = GridBuilder::from_config(&words, config)?;

        if self.cli.visualize {
            builder.enable_visualization();
        }

        let mut rng = RandomSelector::new(self.cli.seed);
        let mut tally = OutcomeTally::default();
        while let Some(outcome) = builder.place_next(&mut rng) {
            tally.record(&outcome);
            if let Some(ref pm) = self.progress_manager {
                pm.record(&outcome, &tally);
            }
            if let PlacementOutcome::Dropped(word) = outcome {
                self.warn(&format!("{}: could not place {word}", input_path.display()));
            }
        }

        let visualization = builder.visualization.take();
        let crossword = builder.into_crossword();
        let source: &dyn ClueSource = if self.cli.echo_clues {
            &EchoClues
        } else {
            &self.clue_sheet
        };
        let clues = collect_clues(&words, source);

        export_text(
            &crossword,
            &clues,
            &Self::get_output_path(input_path, "txt"),
        )?;

        let png_path = Self::get_output_path(input_path, "png");
        export_grid_as_png(
            &crossword,
            png_path
                .to_str()
                .ok_or_else(|| crate::io::error::io_error("Invalid output path"))?,
        )?;

        if self.cli.json {
            export_json(
                &crossword,
                &clues,
                &Self::get_output_path(input_path, "json"),
            )?;
        }

        if let Some(viz) = visualization {
            let gif_path = Self::get_output_path(input_path, "gif");
            viz.export_gif(
                gif_path
                    .to_str()
                    .ok_or_else(|| crate::io::error::io_error("Invalid visualization path"))?,
                GIF_FRAME_DELAY_MS,
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish_list(&tally);
        }

        Ok(())
    }

    /// Output path next to the input: `<stem>_crossword.<extension>`
    pub fn get_output_path(input_path: &Path, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
