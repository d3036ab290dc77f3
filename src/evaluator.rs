//! Static evaluation of a position from player one's point of view

use crate::grid::{Cell, Grid, DIRECTIONS};
use crate::{HEIGHT, INF, WIDTH};

/// Returns true for scores that can only come from a finished game
pub fn is_terminal_score(score: i32) -> bool {
    score <= -INF || score >= INF
}

/// Scores a position for player one
///
/// A completed four returns `INF + empty cells` (negated for player two), so
/// wins reached with more of the board still open score higher. Otherwise the
/// score is the number of windows player one could still complete minus the
/// number player two could still complete.
pub fn evaluate(grid: &Grid) -> i32 {
    let empty = grid.empty_cells() as i32;

    let mut score = 0;
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            for &(dr, dc) in DIRECTIONS.iter() {
                if !Grid::in_bounds(row as i32 + 3 * dr, column as i32 + 3 * dc) {
                    continue;
                }

                let (mut own, mut opponent) = (0, 0);
                for k in 0..4 {
                    let r = (row as i32 + k * dr) as usize;
                    let c = (column as i32 + k * dc) as usize;
                    match grid.cell(r, c) {
                        Cell::PlayerOne => own += 1,
                        Cell::PlayerTwo => opponent += 1,
                        Cell::Empty => {}
                    }
                }

                if own == 4 {
                    return INF + empty;
                }
                if opponent == 4 {
                    return -(INF + empty);
                }

                // windows holding both marks are dead for both sides
                if opponent == 0 {
                    score += 1;
                }
                if own == 0 {
                    score -= 1;
                }
            }
        }
    }
    score
}
