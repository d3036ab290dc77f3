//! Search-based agents for playing the board game 'Connect 4' against each other
//!
//! Two agents are seated at a shared [`Grid`](grid::Grid) and take turns
//! choosing columns. The interesting agents are the fixed-depth game tree
//! searches built on the static [`evaluate`](evaluator::evaluate) function;
//! the [`Arena`](arena::Arena) plays a series of games between any two of
//! them and tallies the results.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_ai::{agents::{Agent, AlphaBeta}, grid::{Grid, Player}};
//!
//!# fn main() -> Result<(), connect4_ai::Error> {
//! let mut grid = Grid::from_moves("112233")?;
//! let mut agent = AlphaBeta::with_seed(4, 0);
//!
//! // player one completes the bottom row
//! assert_eq!(agent.choose(&mut grid, Player::One)?, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;
pub use error::{Error, Result};

pub mod grid;

pub mod evaluator;

pub mod agents;

pub mod config;

pub mod render;

pub mod arena;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The magnitude at and above which a score denotes a finished game
pub const INF: i32 = 100;

// a window of four must fit in every direction
const_assert!(WIDTH >= 4 && HEIGHT >= 4);
// terminal scores stay below the search window bounds
const_assert!(((WIDTH * HEIGHT) as i32) < INF);
