//! Printing boards and running tallies to the terminal

use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::Write;

use crate::grid::{Cell, Grid};
use crate::{HEIGHT, WIDTH};

/// Writes the board top row first followed by a blank line
///
/// With `color` set each glyph is styled with the owning player's colour,
/// otherwise the plain [`Display`](std::fmt::Display) form of the grid is used.
pub fn draw_board<W: Write>(out: &mut W, grid: &Grid, color: bool) -> Result<()> {
    if !color {
        writeln!(out, "{}", grid)?;
        return Ok(());
    }

    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            let cell = grid.query(row, column)?;
            out.queue(PrintStyledContent(
                style(cell.glyph())
                    .attribute(Attribute::Bold)
                    .with(match cell {
                        Cell::PlayerOne => Color::Red,
                        Cell::PlayerTwo => Color::Yellow,
                        Cell::Empty => Color::DarkGrey,
                    }),
            ))?;
        }
        out.queue(PrintStyledContent(style("\n")))?;
    }
    out.queue(PrintStyledContent(style("\n")))?;
    out.flush()?;
    Ok(())
}

/// Writes `wins losses draws` on a single line
pub fn draw_tally<W: Write>(out: &mut W, wins: u32, losses: u32, draws: u32) -> Result<()> {
    writeln!(out, "{} {} {}", wins, losses, draws)?;
    Ok(())
}
