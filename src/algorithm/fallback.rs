//! Seeded random placement used when no crossing exists

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

use crate::spatial::{Direction, LetterGrid, Placement};

/// Seeded random source for reproducible fallback placement
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RngCore for RandomSelector {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst);
    }
}

/// Draw direction, then row, then column, each uniformly
pub fn random_placement<R: Rng>(rng: &mut R, size: usize) -> Placement {
    let direction = if rng.random_bool(0.5) {
        Direction::Across
    } else {
        Direction::Down
    };
    let row = rng.random_range(0..size);
    let col = rng.random_range(0..size);

    Placement {
        row,
        col,
        direction,
    }
}

/// Try up to `trials` independent random placements, returning the first that fits
pub fn scatter<R: Rng>(
    grid: &LetterGrid,
    word: &str,
    rng: &mut R,
    trials: usize,
) -> Option<Placement> {
    if grid.size() == 0 {
        return None;
    }

    (0..trials)
        .map(|_| random_placement(rng, grid.size()))
        .find(|&candidate| grid.fits(word, candidate))
}
