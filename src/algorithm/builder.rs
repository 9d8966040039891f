//! Sequential crossword construction over a fixed-size grid
//!
//! The first word anchors the puzzle across the middle row. Every later word is
//! placed at the first crossing found against earlier placements, or failing
//! that at a random spot that fits. Words that fit nowhere are recorded as
//! unplaced; earlier placements are never revisited.

use rand::Rng;

use crate::algorithm::fallback::{RandomSelector, scatter};
use crate::algorithm::intersection::find_crossing;
use crate::io::configuration::{GeneratorConfig, MAX_GRID_SIZE};
use crate::io::error::{Result, invalid_parameter, invalid_word_list};
use crate::io::visualization::VisualizationCapture;
use crate::spatial::{Direction, LetterGrid, PlacedWord, Placement};

/// How a single word ended up after its placement attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// First word, placed across the middle row
    Anchored(PlacedWord),
    /// Placed crossing an earlier word on a shared letter
    Crossed(PlacedWord),
    /// Placed by the random fallback
    Scattered(PlacedWord),
    /// Fit nowhere; the word is left out of the puzzle
    Dropped(String),
}

impl PlacementOutcome {
    /// The placed record, if the word made it onto the grid
    pub const fn placed(&self) -> Option<&PlacedWord> {
        match self {
            Self::Anchored(placed) | Self::Crossed(placed) | Self::Scattered(placed) => {
                Some(placed)
            }
            Self::Dropped(_) => None,
        }
    }

    /// The word this outcome is about
    pub fn word(&self) -> &str {
        match self {
            Self::Anchored(placed) | Self::Crossed(placed) | Self::Scattered(placed) => {
                &placed.word
            }
            Self::Dropped(word) => word,
        }
    }
}

/// Finished construction: grid snapshot, layout and the words left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    /// Grid side length
    pub size: usize,
    /// Rows of one-letter strings, `""` where no letter was placed
    pub grid: Vec<Vec<String>>,
    /// Placed words in placement order
    pub layout: Vec<PlacedWord>,
    /// Words that could not be placed, in input order
    pub unplaced: Vec<String>,
}

/// Builds a crossword from an ordered word list
///
/// Owns its grid exclusively; construct one builder per puzzle.
pub struct GridBuilder {
    grid: LetterGrid,
    words: Vec<String>,
    placed_words: Vec<PlacedWord>,
    unplaced_words: Vec<String>,
    next_word: usize,
    config: GeneratorConfig,
    /// Optional placement capture for animation export
    pub visualization: Option<VisualizationCapture>,
}

impl GridBuilder {
    /// Create a builder for `words` on a `size` x `size` grid
    ///
    /// Words are trimmed and uppercased.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is zero or above the grid size limit
    /// - The word list is empty or contains a blank word
    /// - The first word is longer than `size`
    pub fn new<S: AsRef<str>>(words: &[S], size: usize) -> Result<Self> {
        Self::from_config(words, GeneratorConfig::with_size(size))
    }

    /// Create a builder with explicit generation parameters
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`GridBuilder::new`]
    pub fn from_config<S: AsRef<str>>(words: &[S], config: GeneratorConfig) -> Result<Self> {
        let size = config.size;
        if size == 0 || size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("must be between 1 and {MAX_GRID_SIZE}"),
            ));
        }

        let words: Vec<String> = words
            .iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .collect();

        let Some(anchor) = words.first() else {
            return Err(invalid_word_list(&"no words to place"));
        };
        if let Some(position) = words.iter().position(String::is_empty) {
            return Err(invalid_word_list(&format!(
                "word {} is blank",
                position + 1
            )));
        }

        let anchor_length = anchor.chars().count();
        if anchor_length > size {
            return Err(invalid_parameter(
                "words[0]",
                anchor,
                &format!("{anchor_length} letters do not fit a {size}x{size} grid"),
            ));
        }

        Ok(Self {
            grid: LetterGrid::new(size),
            words,
            placed_words: Vec::new(),
            unplaced_words: Vec::new(),
            next_word: 0,
            config,
            visualization: None,
        })
    }

    /// Grid side length
    pub const fn size(&self) -> usize {
        self.grid.size()
    }

    /// Record each placement for later animation export
    pub fn enable_visualization(&mut self) {
        self.visualization = Some(VisualizationCapture::new(self.size(), self.words.len()));
    }

    /// Check whether `word` fits at `(row, col)` without contradicting placed letters
    pub fn can_place(&self, word: &str, row: usize, col: usize, direction: Direction) -> bool {
        self.grid.fits(
            word,
            Placement {
                row,
                col,
                direction,
            },
        )
    }

    /// Write `word` into the grid and append it to the layout
    ///
    /// Does not re-check [`GridBuilder::can_place`]; callers must have done so.
    pub fn place_word(&mut self, word: &str, row: usize, col: usize, direction: Direction) {
        let placement = Placement {
            row,
            col,
            direction,
        };
        self.grid.write(word, placement);

        let placed = PlacedWord::new(word, placement);
        if let Some(ref mut viz) = self.visualization {
            viz.record_placement(&placed);
        }
        self.placed_words.push(placed);
    }

    /// Attempt the next unprocessed word
    ///
    /// Returns `None` once every word has been attempted.
    pub fn place_next<R: Rng>(&mut self, rng: &mut R) -> Option<PlacementOutcome> {
        let index = self.next_word;
        let word = self.words.get(index)?.clone();
        self.next_word += 1;

        if index == 0 {
            let row = self.size() / 2;
            let col = self.size().saturating_sub(word.chars().count()) / 2;
            return Some(PlacementOutcome::Anchored(self.commit(
                &word,
                Placement {
                    row,
                    col,
                    direction: Direction::Across,
                },
            )));
        }

        if let Some(placement) = find_crossing(&self.grid, &self.placed_words, &word) {
            return Some(PlacementOutcome::Crossed(self.commit(&word, placement)));
        }

        if let Some(placement) = scatter(&self.grid, &word, rng, self.config.fallback_trials) {
            return Some(PlacementOutcome::Scattered(self.commit(&word, placement)));
        }

        self.unplaced_words.push(word.clone());
        Some(PlacementOutcome::Dropped(word))
    }

    fn commit(&mut self, word: &str, placement: Placement) -> PlacedWord {
        self.place_word(word, placement.row, placement.col, placement.direction);
        PlacedWord::new(word, placement)
    }

    /// Attempt every remaining word in input order
    pub fn generate<R: Rng>(&mut self, rng: &mut R) {
        while self.place_next(rng).is_some() {}
    }

    /// Snapshot of the grid as one-letter strings, `""` for empty cells
    pub fn to_grid(&self) -> Vec<Vec<String>> {
        self.grid.to_rows()
    }

    /// Placed words in placement order
    pub fn layout(&self) -> &[PlacedWord] {
        &self.placed_words
    }

    /// Words that fit nowhere, in input order
    pub fn unplaced_words(&self) -> &[String] {
        &self.unplaced_words
    }

    /// Consume the builder into its finished output
    pub fn into_crossword(self) -> Crossword {
        Crossword {
            size: self.grid.size(),
            grid: self.to_grid(),
            layout: self.placed_words,
            unplaced: self.unplaced_words,
        }
    }
}

/// Build a complete crossword with a seeded fallback generator
///
/// # Errors
///
/// Returns an error if the word list or size is rejected by [`GridBuilder::new`]
pub fn generate_crossword<S: AsRef<str>>(words: &[S], size: usize, seed: u64) -> Result<Crossword> {
    let mut builder = GridBuilder::new(words, size)?;
    let mut rng = RandomSelector::new(seed);
    builder.generate(&mut rng);
    Ok(builder.into_crossword())
}
