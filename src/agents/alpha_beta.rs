//! Fixed-depth negamax search with alpha-beta pruning

use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use super::{canonical, Agent, SearchReport};
use crate::evaluator::{evaluate, is_terminal_score};
use crate::grid::{Grid, Player};
use crate::{Result, INF, WIDTH};

/// Bound of the search window at the root, wider than any score
const WINDOW: i32 = 4 * INF;

/// Returns the columns ordered from the middle outwards, as
/// the middle columns take part in more lines of four
pub const fn move_order() -> [usize; WIDTH] {
    let mut move_order = [0; WIDTH];
    let mut i = 0;
    while i < WIDTH {
        move_order[i] = (WIDTH / 2) + (1 - i % 2) * (i / 2) - (i % 2) * (i / 2 + 1);
        i += 1;
    }
    move_order
}

const MOVE_ORDER: [usize; WIDTH] = move_order();

/// A [`Negamax`](super::Negamax) search that skips lines which cannot change the result
///
/// # Notes
/// Columns are tried from the middle outwards. Each call carries a window
/// `(alpha, beta)`; once a column scores above `beta` the opponent already has
/// a better alternative elsewhere, so the remaining columns are not searched.
/// The value found at the root is the same as the unpruned search, although
/// ties may be broken between a different set of columns.
pub struct AlphaBeta {
    depth: usize,
    /// The number of positions searched by this agent so far (for diagnostics only)
    pub node_count: u64,
    rng: StdRng,
}

impl AlphaBeta {
    /// Creates a new agent searching `depth` plies, breaking ties with `rng`
    pub fn new(depth: usize, rng: StdRng) -> Self {
        Self {
            depth: depth.max(1),
            node_count: 0,
            rng,
        }
    }

    pub fn with_seed(depth: usize, seed: u64) -> Self {
        Self::new(depth, StdRng::seed_from_u64(seed))
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Scores the playable columns for `turn` and picks the best one
    pub fn analyse(&mut self, grid: &mut Grid, turn: Player) -> Result<SearchReport> {
        let depth = self.depth;
        let scores = canonical(grid, turn, |grid| {
            self.score_columns(grid, depth, -WINDOW, WINDOW)
        })?;
        SearchReport::from_scores(scores, &mut self.rng)
    }

    /// Plays each column in turn and scores the resulting position until a cutoff
    ///
    /// The column that triggers a cutoff is still recorded, so at least one
    /// column is always scored when any is playable.
    fn score_columns(
        &mut self,
        grid: &mut Grid,
        depth: usize,
        mut alpha: i32,
        beta: i32,
    ) -> Result<[Option<i32>; WIDTH]> {
        let mut scores = [None; WIDTH];

        for &column in MOVE_ORDER.iter() {
            if !grid.playable(column) {
                continue;
            }

            grid.place(column, Player::One)?;
            self.node_count += 1;

            let mut score = evaluate(grid);
            if depth > 1 && !is_terminal_score(score) {
                grid.flip_perspective();
                // the search window is flipped for the other player
                let reply = self.alpha_beta(grid, depth - 1, -beta, -alpha);
                grid.flip_perspective();
                score = -reply?;
            }

            grid.undo_last(column)?;
            scores[column] = Some(score);

            if score > beta {
                break;
            }
            if score > alpha {
                alpha = score;
            }
        }
        Ok(scores)
    }

    /// Returns the value of the position to player one within `(alpha, beta)`
    fn alpha_beta(&mut self, grid: &mut Grid, depth: usize, alpha: i32, beta: i32) -> Result<i32> {
        let scores = self.score_columns(grid, depth, alpha, beta)?;
        // a full board has nothing left to search
        Ok(scores
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or_else(|| evaluate(grid)))
    }
}

impl Agent for AlphaBeta {
    fn choose(&mut self, grid: &mut Grid, turn: Player) -> Result<usize> {
        let report = self.analyse(grid, turn)?;
        debug!(
            "alpha-beta({}) scores {:?}, playing {} after {} nodes",
            self.depth, report.scores, report.column, self.node_count
        );
        Ok(report.column)
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn node_count(&self) -> u64 {
        self.node_count
    }
}
