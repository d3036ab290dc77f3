//! Error types shared by the board, the agents and the configuration layer

use thiserror::Error;

/// Errors raised by the library
///
/// Apart from [`Error::InputClosed`] and [`Error::Io`], every variant is a
/// caller error: correct use of the board and agents never produces them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("square ({row}, {column}) is outside the board")]
    OutOfRange { row: usize, column: usize },

    #[error("column {0} is outside the board")]
    ColumnOutOfRange(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is empty")]
    ColumnEmpty(usize),

    #[error("no legal column to play")]
    NoLegalMoves,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("input closed while waiting for a move")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
