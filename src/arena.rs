//! Plays series of games between two agents and keeps score

use anyhow::{anyhow, Context, Result};
use indicatif::*;
use log::{debug, info};

use std::io::stdout;

use crate::agents::Agent;
use crate::grid::{Grid, Outcome, Player};
use crate::render;

/// Results of a series from the point of view of the first seat
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    /// Counts a finished game, ignoring games still in progress
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerOneWin => self.wins += 1,
            Outcome::PlayerTwoWin => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Playing => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

#[derive(Copy, Clone, Default, Debug)]
pub struct ArenaOptions {
    /// Print every board as it is played, and the tally after every game
    pub print_boards: bool,
    pub color: bool,
    /// Show a progress bar while boards are not being printed
    pub progress: bool,
}

/// Two seated agents, the first of which always moves first
pub struct Arena {
    players: [Box<dyn Agent>; 2],
    options: ArenaOptions,
    tally: Tally,
}

impl Arena {
    pub fn new(players: [Box<dyn Agent>; 2], options: ArenaOptions) -> Self {
        Self {
            players,
            options,
            tally: Tally::default(),
        }
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn players(&self) -> &[Box<dyn Agent>; 2] {
        &self.players
    }

    /// Plays one game on a fresh grid and returns how it ended
    pub fn play_game(&mut self) -> Result<Outcome> {
        let mut grid = Grid::new();
        let mut turn = Player::One;

        loop {
            let seat = match turn {
                Player::One => 0,
                Player::Two => 1,
            };
            let agent = &mut self.players[seat];

            let before = grid.clone();
            let column = agent
                .choose(&mut grid, turn)
                .with_context(|| format!("{} failed to choose a move", agent.name()))?;
            if grid != before {
                return Err(anyhow!("{} left the board modified", agent.name()));
            }

            grid.place(column, turn)
                .with_context(|| format!("{} chose column {}", agent.name(), column))?;
            debug!(
                "{} ({:?}) plays column {}, {} nodes searched so far",
                agent.name(),
                turn,
                column,
                agent.node_count()
            );

            if self.options.print_boards {
                render::draw_board(&mut stdout(), &grid, self.options.color)?;
            }

            let outcome = grid.terminal_status();
            if outcome.is_over() {
                return Ok(outcome);
            }

            turn = turn.other();
        }
    }

    /// Plays `games` games in a row, adding each result to the running tally
    pub fn run(&mut self, games: u32) -> Result<Tally> {
        info!(
            "playing {} games: {} vs {}",
            games,
            self.players[0].name(),
            self.players[1].name()
        );

        let progress = if self.options.progress && !self.options.print_boards {
            let progress = ProgressBar::new(games as u64);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("Playing games: {bar:40.cyan/blue} {pos}/{len} {msg} ~{eta} remaining")
                    .progress_chars("█▓▒░  "),
            );
            Some(progress)
        } else {
            None
        };

        for game in 0..games {
            let outcome = self.play_game()?;
            self.tally.record(outcome);
            info!("game {} finished: {:?}", game + 1, outcome);

            let Tally {
                wins,
                losses,
                draws,
            } = self.tally;
            if self.options.print_boards {
                render::draw_tally(&mut stdout(), wins, losses, draws)?;
            }
            if let Some(progress) = &progress {
                progress.inc(1);
                progress.set_message(&format!("({} {} {})", wins, losses, draws));
            }
        }

        if let Some(progress) = progress {
            progress.finish_and_clear();
        }
        info!(
            "finished: {} wins, {} losses, {} draws",
            self.tally.wins, self.tally.losses, self.tally.draws
        );
        Ok(self.tally)
    }
}
