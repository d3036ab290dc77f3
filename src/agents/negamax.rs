//! Fixed-depth negamax search without pruning

use log::debug;
use rand::{rngs::StdRng, SeedableRng};

use super::{canonical, Agent, SearchReport};
use crate::evaluator::{evaluate, is_terminal_score};
use crate::grid::{Grid, Player};
use crate::{Result, WIDTH};

/// Searches every line of play to a fixed depth
///
/// # Notes
/// The search always plays as player one: the grid is flipped on entry for
/// player two and after every hypothetical move, so the value of a position to
/// the side to move is the negation of its value to the opponent. Positions
/// that are already won or lost are scored directly and never searched past.
pub struct Negamax {
    depth: usize,
    /// The number of positions searched by this agent so far (for diagnostics only)
    pub node_count: u64,
    rng: StdRng,
}

impl Negamax {
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

    /// Scores every playable column for `turn` and picks the best one
    pub fn analyse(&mut self, grid: &mut Grid, turn: Player) -> Result<SearchReport> {
        let depth = self.depth;
        let scores = canonical(grid, turn, |grid| self.score_columns(grid, depth))?;
        SearchReport::from_scores(scores, &mut self.rng)
    }

    /// Plays each column in turn and scores the resulting position, left to right
    fn score_columns(&mut self, grid: &mut Grid, depth: usize) -> Result<[Option<i32>; WIDTH]> {
        let mut scores = [None; WIDTH];

        for column in 0..WIDTH {
            if !grid.playable(column) {
                continue;
            }

            grid.place(column, Player::One)?;
            self.node_count += 1;

            let mut score = evaluate(grid);
            if depth > 1 && !is_terminal_score(score) {
                grid.flip_perspective();
                let reply = self.negamax(grid, depth - 1);
                grid.flip_perspective();
                score = -reply?;
            }

            grid.undo_last(column)?;
            scores[column] = Some(score);
        }
        Ok(scores)
    }

    /// Returns the value of the position to player one
    fn negamax(&mut self, grid: &mut Grid, depth: usize) -> Result<i32> {
        let scores = self.score_columns(grid, depth)?;
        // a full board has nothing left to search
        Ok(scores
            .iter()
            .flatten()
            .copied()
            .max()
            .unwrap_or_else(|| evaluate(grid)))
    }
}

impl Agent for Negamax {
    fn choose(&mut self, grid: &mut Grid, turn: Player) -> Result<usize> {
        let report = self.analyse(grid, turn)?;
        debug!(
            "negamax({}) scores {:?}, playing {} after {} nodes",
            self.depth, report.scores, report.column, self.node_count
        );
        Ok(report.column)
    }

    fn name(&self) -> &str {
        "Negamax"
    }

    fn node_count(&self) -> u64 {
        self.node_count
    }
}
