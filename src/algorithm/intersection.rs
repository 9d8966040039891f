//! First-fit crossing search against already placed words

use crate::spatial::{Direction, LetterGrid, PlacedWord, Placement};

/// Start position for `word` crossing `anchor` where `anchor[i] == word[j]`
///
/// Returns `None` when the start would fall outside the grid.
pub fn crossing_start(
    anchor: &PlacedWord,
    i: usize,
    j: usize,
    size: usize,
) -> Option<Placement> {
    let (row, col) = match anchor.direction {
        Direction::Across => (anchor.row.checked_sub(j)?, anchor.col + i),
        Direction::Down => (anchor.row + i, anchor.col.checked_sub(j)?),
    };

    (row < size && col < size).then_some(Placement {
        row,
        col,
        direction: anchor.direction.perpendicular(),
    })
}

/// Find the first placement where `word` crosses a placed word on a shared letter
///
/// Scan order is fixed: placed words in placement order, then letters of the
/// placed word, then letters of `word`. The first candidate that fits wins;
/// alternatives are never compared.
pub fn find_crossing(grid: &LetterGrid, placed: &[PlacedWord], word: &str) -> Option<Placement> {
    let letters: Vec<char> = word.chars().collect();

    for anchor in placed {
        for (i, shared) in anchor.word.chars().enumerate() {
            for (j, _) in letters
                .iter()
                .enumerate()
                .filter(|&(_, &letter)| letter == shared)
            {
                let Some(candidate) = crossing_start(anchor, i, j, grid.size()) else {
                    continue;
                };
                if grid.fits(word, candidate) {
                    return Some(candidate);
                }
            }
        }
    }

    None
}
