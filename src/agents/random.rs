use rand::{rngs::StdRng, SeedableRng};

use super::{pick, Agent};
use crate::grid::{Grid, Player};
use crate::Result;

/// An agent that selects uniformly at random from the playable columns
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Agent for UniformRandom {
    fn choose(&mut self, grid: &mut Grid, _turn: Player) -> Result<usize> {
        let legal: Vec<usize> = grid.legal_moves().collect();
        pick(&mut self.rng, &legal)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
