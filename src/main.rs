use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

use std::io::{stdin, stdout, Write};
use std::time::Instant;

use connect4_ai::arena::{Arena, ArenaOptions};
use connect4_ai::config::MatchConfig;
use connect4_ai::render;

/// Play a series of Connect 4 games between two agents.
///
/// Reads `type depth type depth games` from standard input, where type is
/// 0 (human), 1 (random), 2 (greedy), 3 (negamax) or 4 (alpha-beta) and the
/// depth is only used by the search agents. Human players then enter one
/// 0-indexed column per line.
#[derive(Parser)]
#[command(name = "connect4_arena", version)]
struct Cli {
    /// Seed for every random choice, making the run reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Don't print the boards, show a progress bar instead
    #[arg(long, short)]
    quiet: bool,

    /// Print plain glyphs without terminal colours
    #[arg(long)]
    no_color: bool,

    /// Log the score of every column considered by the search agents
    #[arg(long)]
    show_eval: bool,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let cli = Cli::parse();

    let default_filter = if cli.show_eval { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = MatchConfig::read(&mut stdin()).context("reading match configuration")?;
    info!(
        "{} vs {}, {} games",
        config.players[0], config.players[1], config.games
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut arena = Arena::new(
        config.build_agents(&mut rng),
        ArenaOptions {
            print_boards: !cli.quiet,
            color: !cli.no_color,
            progress: cli.quiet,
        },
    );
    let tally = arena.run(config.games)?;

    let mut stdout = stdout();
    render::draw_tally(&mut stdout, tally.wins, tally.losses, tally.draws)?;
    writeln!(stdout, "{}", start.elapsed().as_millis())?;
    Ok(())
}
