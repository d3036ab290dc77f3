//! Parsing of the match configuration and construction of the agents it names
//!
//! The configuration is a stream of whitespace separated integers:
//! `type depth type depth games`, one `type depth` pair per seat followed by
//! the number of games to play. The depth is read for every agent but only
//! matters to the search agents.

use rand::{rngs::StdRng, Rng, SeedableRng};

use std::fmt;

use crate::agents::{Agent, AlphaBeta, Greedy, Interactive, LineSource, Negamax, UniformRandom};
use crate::{Error, Result};

/// The number of tokens making up a full configuration
const NUM_TOKENS: usize = 5;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AgentKind {
    Interactive,
    UniformRandom,
    Greedy,
    Negamax,
    AlphaBeta,
}

impl AgentKind {
    pub fn is_search(&self) -> bool {
        matches!(self, AgentKind::Negamax | AgentKind::AlphaBeta)
    }
}

impl TryFrom<i64> for AgentKind {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self> {
        match code {
            0 => Ok(AgentKind::Interactive),
            1 => Ok(AgentKind::UniformRandom),
            2 => Ok(AgentKind::Greedy),
            3 => Ok(AgentKind::Negamax),
            4 => Ok(AgentKind::AlphaBeta),
            _ => Err(Error::InvalidConfiguration(format!(
                "unknown agent type {} (expected 0-4)",
                code
            ))),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentKind::Interactive => "interactive",
            AgentKind::UniformRandom => "random",
            AgentKind::Greedy => "greedy",
            AgentKind::Negamax => "negamax",
            AgentKind::AlphaBeta => "alpha-beta",
        };
        f.write_str(name)
    }
}

/// The type and search depth of one seat
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct AgentSpec {
    pub kind: AgentKind,
    pub depth: usize,
}

impl AgentSpec {
    pub fn new(kind: AgentKind, depth: i64) -> Result<Self> {
        if !kind.is_search() {
            return Ok(Self { kind, depth: 0 });
        }
        match usize::try_from(depth) {
            Ok(depth) if depth >= 1 => Ok(Self { kind, depth }),
            _ => Err(Error::InvalidConfiguration(format!(
                "search depth must be a positive integer, got {}",
                depth
            ))),
        }
    }

    /// Constructs the agent, handing it `rng` for any random choices it makes
    pub fn build(&self, rng: StdRng) -> Box<dyn Agent> {
        match self.kind {
            AgentKind::Interactive => Box::new(Interactive::stdin()),
            AgentKind::UniformRandom => Box::new(UniformRandom::new(rng)),
            AgentKind::Greedy => Box::new(Greedy::new(rng)),
            AgentKind::Negamax => Box::new(Negamax::new(self.depth, rng)),
            AgentKind::AlphaBeta => Box::new(AlphaBeta::new(self.depth, rng)),
        }
    }
}

impl fmt::Display for AgentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_search() {
            write!(f, "{}({})", self.kind, self.depth)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

/// The two seats and the number of games to play between them
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MatchConfig {
    /// Seat one always moves first
    pub players: [AgentSpec; 2],
    pub games: u32,
}

fn next_int<'a, I>(tokens: &mut I, what: &str) -> Result<i64>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or_else(|| {
        Error::InvalidConfiguration(format!("missing {}", what))
    })?;
    token.parse::<i64>().map_err(|_| {
        Error::InvalidConfiguration(format!("could not parse '{}' as the {}", token, what))
    })
}

impl MatchConfig {
    /// Parses `type depth type depth games` from whitespace separated tokens
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = input.split_whitespace();

        let mut players = [AgentSpec {
            kind: AgentKind::Interactive,
            depth: 0,
        }; 2];
        for (seat, player) in players.iter_mut().enumerate() {
            let kind = next_int(&mut tokens, &format!("type of agent {}", seat + 1))?;
            let depth = next_int(&mut tokens, &format!("depth of agent {}", seat + 1))?;
            *player = AgentSpec::new(AgentKind::try_from(kind)?, depth)?;
        }

        let games = next_int(&mut tokens, "number of games")?;
        let games = match u32::try_from(games) {
            Ok(games) if games >= 1 => games,
            _ => {
                return Err(Error::InvalidConfiguration(format!(
                    "number of games must be a positive integer, got {}",
                    games
                )))
            }
        };

        Ok(Self { players, games })
    }

    /// Reads lines from `input` until a full configuration has been seen
    ///
    /// Only whole lines are consumed, so moves typed for an interactive agent
    /// on later lines stay in the input.
    pub fn read<S: LineSource>(input: &mut S) -> Result<Self> {
        let mut buffer = String::new();
        while buffer.split_whitespace().count() < NUM_TOKENS {
            if input.read_line(&mut buffer)? == 0 {
                break;
            }
            // keep tokens on separate lines apart
            buffer.push(' ');
        }
        Self::parse(&buffer)
    }

    /// Builds both agents, each with its own generator seeded from `rng`
    pub fn build_agents(&self, rng: &mut StdRng) -> [Box<dyn Agent>; 2] {
        let first = self.players[0].build(StdRng::seed_from_u64(rng.gen()));
        let second = self.players[1].build(StdRng::seed_from_u64(rng.gen()));
        [first, second]
    }
}
