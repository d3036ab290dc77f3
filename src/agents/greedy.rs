//! One-ply lookahead: win if possible, block if needed, otherwise stay safe

use rand::{rngs::StdRng, SeedableRng};

use super::{pick, Agent};
use crate::grid::{Grid, Outcome, Player};
use crate::{Result, HEIGHT, WIDTH};

/// Looks a single move ahead for each side
///
/// In order of preference the agent plays
/// 1. a column that wins on the spot,
/// 2. a column the opponent would win with on their next move,
/// 3. a column that doesn't hand the opponent a win on top of our piece,
/// 4. anything legal.
///
/// Ties within a class are broken uniformly at random.
pub struct Greedy {
    rng: StdRng,
}

impl Greedy {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

/// Collects the playable columns passing `test`, left to right
fn columns_where<F>(grid: &mut Grid, mut test: F) -> Result<Vec<usize>>
where
    F: FnMut(&mut Grid, usize) -> Result<bool>,
{
    let mut columns = Vec::with_capacity(WIDTH);
    for column in 0..WIDTH {
        if grid.playable(column) && test(grid, column)? {
            columns.push(column);
        }
    }
    Ok(columns)
}

fn wins_immediately(grid: &mut Grid, column: usize, player: Player) -> Result<bool> {
    grid.place(column, player)?;
    let won = grid.terminal_status() == player.win();
    grid.undo_last(column)?;
    Ok(won)
}

/// Checks that playing `column` doesn't lose to a reply in the same column
fn is_safe(grid: &mut Grid, column: usize, player: Player) -> Result<bool> {
    let height = grid.column_height(column)?;
    let opponent = player.other();

    if height + 2 <= HEIGHT {
        grid.place(column, player)?;
        grid.place(column, opponent)?;
        let lost = grid.terminal_status() == opponent.win();
        grid.undo_last(column)?;
        grid.undo_last(column)?;
        Ok(!lost)
    } else {
        // last cell of the column, there is no reply on top of it
        grid.place(column, player)?;
        let open = grid.terminal_status() == Outcome::Playing;
        grid.undo_last(column)?;
        Ok(open)
    }
}

impl Agent for Greedy {
    fn choose(&mut self, grid: &mut Grid, turn: Player) -> Result<usize> {
        let wins = columns_where(grid, |grid, column| wins_immediately(grid, column, turn))?;
        if !wins.is_empty() {
            return pick(&mut self.rng, &wins);
        }

        let blocks = columns_where(grid, |grid, column| {
            wins_immediately(grid, column, turn.other())
        })?;
        if !blocks.is_empty() {
            return pick(&mut self.rng, &blocks);
        }

        let safe = columns_where(grid, |grid, column| is_safe(grid, column, turn))?;
        if !safe.is_empty() {
            return pick(&mut self.rng, &safe);
        }

        // every move loses, give up gracefully
        let legal: Vec<usize> = grid.legal_moves().collect();
        pick(&mut self.rng, &legal)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
