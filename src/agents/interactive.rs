//! A human player typing column numbers

use log::warn;

use std::io::{self, stdout, BufRead, Cursor, Write};

use super::Agent;
use crate::grid::{Grid, Player};
use crate::{Error, Result};

/// A source of input lines
///
/// Implemented for [`io::Stdin`], which locks itself per line so several
/// interactive agents can share the terminal, and for in-memory cursors.
pub trait LineSource {
    /// Appends the next line to `buf`, returning 0 at end of input
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Asks for a 0-indexed column until a playable one is given
pub struct Interactive<S: LineSource = io::Stdin> {
    input: S,
}

impl Interactive<io::Stdin> {
    pub fn stdin() -> Self {
        Self::new(io::stdin())
    }
}

impl<S: LineSource> Interactive<S> {
    pub fn new(input: S) -> Self {
        Self { input }
    }
}

impl<S: LineSource> Agent for Interactive<S> {
    fn choose(&mut self, grid: &mut Grid, turn: Player) -> Result<usize> {
        loop {
            let player = if turn == Player::One { 1 } else { 2 };
            print!("Player {} move > ", player);
            stdout().flush()?;

            let mut input_str = String::new();
            if self.input.read_line(&mut input_str)? == 0 {
                return Err(Error::InputClosed);
            }

            let input_str = input_str.trim();
            match input_str.parse::<usize>() {
                Ok(column) if grid.playable(column) => return Ok(column),
                _ => {
                    warn!("rejected move input '{}'", input_str);
                    println!("Column {} is full or invalid", input_str);
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
