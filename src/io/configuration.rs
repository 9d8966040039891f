//! Construction constants and runtime configuration defaults

// Placement parameters
/// Side length used when none is requested
pub const DEFAULT_GRID_SIZE: usize = 12;
/// Random placement attempts per word once crossing search fails
pub const FALLBACK_TRIALS: usize = 100;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid side length
pub const MAX_GRID_SIZE: usize = 1_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Input settings
/// Extension of word list files picked up from a directory target
pub const WORD_LIST_EXTENSION: &str = "txt";
/// Separator between word and clue in a clue sheet line
pub const CLUE_SEPARATOR: char = ':';

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_crossword";
/// Placeholder for empty cells in text output
pub const EMPTY_CELL_SYMBOL: char = '.';
/// Edge length of one grid cell in rendered images
pub const CELL_PIXELS: u32 = 24;
/// Smallest cell edge used when shrinking large grids (one line pixel plus interior)
pub const MIN_CELL_PIXELS: u32 = 2;
/// Largest rendered image edge; cells shrink to stay within it
pub const MAX_IMAGE_EDGE: u32 = 2_048;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 400;
/// Multiplier applied to the final GIF frame so the finished grid stays visible
pub const FINAL_FRAME_HOLD: u32 = 5;

/// Tunable parameters for a single construction pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Grid side length
    pub size: usize,
    /// Random placement attempts per word
    pub fallback_trials: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            fallback_trials: FALLBACK_TRIALS,
        }
    }
}

impl GeneratorConfig {
    /// Default configuration with a custom grid size
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}
