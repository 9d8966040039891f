//! Per-list progress bars driven by placement outcomes
//!
//! Each word list gets its own bar advancing one step per attempted word. The
//! bar message names the word just attempted and the running outcome counts.
//! A second bar tracks finished lists when more than one list is processed.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::algorithm::builder::PlacementOutcome;

static WORDS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>16} [{bar:30.cyan/blue}] {pos:>3}/{len:3} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static LISTS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Word lists: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Running count of placement outcomes for one word list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    /// Words written into the grid, anchor included
    pub placed: usize,
    /// Words placed across an earlier word
    pub crossed: usize,
    /// Words placed by the random fallback
    pub scattered: usize,
    /// Words left out of the puzzle
    pub dropped: usize,
}

impl OutcomeTally {
    /// Count one outcome
    pub const fn record(&mut self, outcome: &PlacementOutcome) {
        match outcome {
            PlacementOutcome::Anchored(_) => self.placed += 1,
            PlacementOutcome::Crossed(_) => {
                self.placed += 1;
                self.crossed += 1;
            }
            PlacementOutcome::Scattered(_) => {
                self.placed += 1;
                self.scattered += 1;
            }
            PlacementOutcome::Dropped(_) => self.dropped += 1,
        }
    }

    /// Number of words attempted so far
    pub const fn attempted(&self) -> usize {
        self.placed + self.dropped
    }
}

impl fmt::Display for OutcomeTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} placed ({} crossed, {} scattered), {} dropped",
            self.placed, self.crossed, self.scattered, self.dropped
        )
    }
}

/// Progress bars for a run over one or more word lists
pub struct ProgressManager {
    multi_progress: MultiProgress,
    lists_bar: Option<ProgressBar>,
    words_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            lists_bar: None,
            words_bar: None,
        }
    }

    /// Prepare for `list_count` word lists; a list counter appears for more than one
    pub fn initialize(&mut self, list_count: usize) {
        if list_count > 1 {
            let bar = ProgressBar::new(list_count as u64);
            bar.set_style(LISTS_STYLE.clone());
            self.lists_bar = Some(self.multi_progress.add(bar));
        }
    }

    /// Open a bar for a word list of `word_count` words
    pub fn start_list(&mut self, path: &Path, word_count: usize) {
        let bar = ProgressBar::new(word_count as u64);
        bar.set_style(WORDS_STYLE.clone());
        bar.set_prefix(
            path.file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );

        let bar = match self.lists_bar {
            Some(ref lists_bar) => self.multi_progress.insert_before(lists_bar, bar),
            None => self.multi_progress.add(bar),
        };
        if let Some(previous) = self.words_bar.replace(bar) {
            previous.abandon();
        }
    }

    /// Advance the current list by one attempted word
    pub fn record(&self, outcome: &PlacementOutcome, tally: &OutcomeTally) {
        if let Some(ref bar) = self.words_bar {
            bar.set_position(tally.attempted() as u64);
            bar.set_message(format!("{:<12} {tally}", outcome.word()));
        }
    }

    /// Close the current list's bar with its final counts
    pub fn finish_list(&mut self, tally: &OutcomeTally) {
        if let Some(bar) = self.words_bar.take() {
            bar.finish_with_message(tally.to_string());
        }
        if let Some(ref lists_bar) = self.lists_bar {
            lists_bar.inc(1);
        }
    }

    /// Print a line above the bars, or straight to stderr if the terminal refuses it
    // Allow print for user feedback when the bar display cannot take the line
    #[allow(clippy::print_stderr)]
    pub fn println(&self, message: &str) {
        if self.multi_progress.println(message).is_err() {
            eprintln!("{message}");
        }
    }

    /// Close the list counter
    pub fn finish(&self) {
        if let Some(ref lists_bar) = self.lists_bar {
            lists_bar.finish_with_message("All word lists processed");
        }
    }
}
