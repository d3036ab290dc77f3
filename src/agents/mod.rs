//! The agents that can be seated at a game
//!
//! Every agent implements [`Agent`]. The search agents ([`Negamax`] and
//! [`AlphaBeta`]) always reason as player one: when asked to move for player
//! two they flip the grid's marks, search, and flip them back.

use rand::{rngs::StdRng, Rng};

use crate::grid::{Grid, Player};
use crate::{Error, Result, WIDTH};

mod alpha_beta;
mod greedy;
mod interactive;
mod negamax;
mod random;

pub use alpha_beta::{move_order, AlphaBeta};
pub use greedy::Greedy;
pub use interactive::{Interactive, LineSource};
pub use negamax::Negamax;
pub use random::UniformRandom;

/// Anything that can pick a column to play
pub trait Agent {
    /// Chooses a playable column for `turn`
    ///
    /// The grid may be used as scratch space but must be returned exactly as
    /// it was received.
    fn choose(&mut self, grid: &mut Grid, turn: Player) -> Result<usize>;

    fn name(&self) -> &str;

    /// The number of positions searched by this agent so far
    fn node_count(&self) -> u64 {
        0
    }
}

/// The scores a search assigned to each column at the root
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// `None` for columns that were full or cut off before being scored
    pub scores: [Option<i32>; WIDTH],
    pub best_score: i32,
    pub column: usize,
}

impl SearchReport {
    /// Picks uniformly among the columns sharing the best recorded score
    pub(crate) fn from_scores(scores: [Option<i32>; WIDTH], rng: &mut StdRng) -> Result<Self> {
        let best_score = scores
            .iter()
            .flatten()
            .copied()
            .max()
            .ok_or(Error::NoLegalMoves)?;

        let best: Vec<usize> = (0..WIDTH)
            .filter(|&column| scores[column] == Some(best_score))
            .collect();
        let column = pick(rng, &best)?;

        Ok(Self {
            scores,
            best_score,
            column,
        })
    }

    pub fn is_terminal(&self) -> bool {
        crate::evaluator::is_terminal_score(self.best_score)
    }
}

/// Picks one of `columns` uniformly at random
pub(crate) fn pick(rng: &mut StdRng, columns: &[usize]) -> Result<usize> {
    if columns.is_empty() {
        return Err(Error::NoLegalMoves);
    }
    Ok(columns[rng.gen_range(0..columns.len())])
}

/// Runs `search` with the grid relabeled so that `turn` owns the player one marks
pub(crate) fn canonical<T>(
    grid: &mut Grid,
    turn: Player,
    search: impl FnOnce(&mut Grid) -> T,
) -> T {
    if turn == Player::Two {
        grid.flip_perspective();
    }
    let result = search(grid);
    if turn == Player::Two {
        grid.flip_perspective();
    }
    result
}
