//! A dense array board supporting in-place play and undo

use std::fmt;

use crate::{Error, Result, HEIGHT, WIDTH};

/// Row and column steps of the four line directions: right, up-left, up, up-right
///
/// Each line through the board is covered exactly once when every cell is
/// taken as the start of a window in each of these directions.
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Swaps the two player marks, leaving empty cells alone
    pub fn flipped(self) -> Self {
        match self {
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
            Cell::Empty => Cell::Empty,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::PlayerOne => 'o',
            Cell::PlayerTwo => 'x',
            Cell::Empty => '.',
        }
    }
}

/// The side to move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The mark this player drops into the grid
    pub fn cell(self) -> Cell {
        match self {
            Player::One => Cell::PlayerOne,
            Player::Two => Cell::PlayerTwo,
        }
    }

    /// The outcome recorded when this player connects four
    pub fn win(self) -> Outcome {
        match self {
            Player::One => Outcome::PlayerOneWin,
            Player::Two => Outcome::PlayerTwoWin,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::Playing)
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: [Cell; WIDTH * HEIGHT], // cells are stored left-to-right, bottom-to-top
    heights: [usize; WIDTH],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
            heights: [0; WIDTH],
        }
    }

    /// Builds a grid from a string of 1-indexed column digits, player one moving first
    ///
    /// Play continues through finished positions, so the caller is responsible
    /// for only passing move strings of games that are still running if that matters.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut grid = Self::new();
        let mut player = Player::One;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => grid.place(column - 1, player)?,
                _ => {
                    return Err(Error::InvalidConfiguration(format!(
                        "could not parse '{}' as a valid move",
                        column_char
                    )))
                }
            }
            player = player.other();
        }
        Ok(grid)
    }

    pub fn in_bounds(row: i32, column: i32) -> bool {
        0 <= row && row < HEIGHT as i32 && 0 <= column && column < WIDTH as i32
    }

    fn index(row: usize, column: usize) -> usize {
        column + WIDTH * row
    }

    /// Returns the cell at (row, column), row 0 being the bottom of the board
    pub fn query(&self, row: usize, column: usize) -> Result<Cell> {
        if row >= HEIGHT || column >= WIDTH {
            return Err(Error::OutOfRange { row, column });
        }
        Ok(self.cells[Self::index(row, column)])
    }

    pub fn column_height(&self, column: usize) -> Result<usize> {
        self.heights
            .get(column)
            .copied()
            .ok_or(Error::ColumnOutOfRange(column))
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    /// Iterates over the playable columns from left to right
    pub fn legal_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.playable(column))
    }

    pub fn num_moves(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn empty_cells(&self) -> usize {
        WIDTH * HEIGHT - self.num_moves()
    }

    /// Drops a mark for `player` on top of `column`
    pub fn place(&mut self, column: usize, player: Player) -> Result<()> {
        let height = self.column_height(column)?;
        if height >= HEIGHT {
            return Err(Error::ColumnFull(column));
        }
        self.cells[Self::index(height, column)] = player.cell();
        self.heights[column] += 1;
        Ok(())
    }

    /// Takes the top mark back off `column`
    pub fn undo_last(&mut self, column: usize) -> Result<()> {
        let height = self.column_height(column)?;
        if height == 0 {
            return Err(Error::ColumnEmpty(column));
        }
        self.heights[column] -= 1;
        self.cells[Self::index(height - 1, column)] = Cell::Empty;
        Ok(())
    }

    /// Swaps the two players' marks over the whole board
    pub fn flip_perspective(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = cell.flipped();
        }
    }

    /// Raw cell access for scans that have already bounds-checked the square
    pub(crate) fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[Self::index(row, column)]
    }

    /// Scans the board for four in a row, then for a full board
    pub fn terminal_status(&self) -> Outcome {
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let cell = self.cell(row, column);
                if cell.is_empty() {
                    continue;
                }

                for &(dr, dc) in DIRECTIONS.iter() {
                    let (end_row, end_column) = (row as i32 + 3 * dr, column as i32 + 3 * dc);
                    if !Self::in_bounds(end_row, end_column) {
                        continue;
                    }

                    let connected = (1..4).all(|k| {
                        let r = (row as i32 + k * dr) as usize;
                        let c = (column as i32 + k * dc) as usize;
                        self.cell(r, c) == cell
                    });

                    if connected {
                        return match cell {
                            Cell::PlayerOne => Outcome::PlayerOneWin,
                            _ => Outcome::PlayerTwoWin,
                        };
                    }
                }
            }
        }

        if self.cells.iter().any(Cell::is_empty) {
            Outcome::Playing
        } else {
            Outcome::Draw
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            let line: String = (0..WIDTH).map(|c| self.cell(row, c).glyph()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
