//! Cube game records and their evaluation.
//!
//! A record like `Game 1: 3 blue, 4 red; 1 red, 2 green` names a game and the
//! handfuls of cubes shown during it. A game is feasible under a [`Budget`]
//! when every sample fits within it, and [`Game::minimal_budget`] is the
//! smallest budget that would make it feasible.

use thiserror::Error;

/// Error raised when a game record does not parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing `: ` separator")]
    MissingSeparator,
    #[error("bad game id in `{0}`")]
    BadId(String),
    #[error("game has no samples")]
    NoSamples,
    #[error("expected `<count> <color>` pair, got `{0}`")]
    BadPair(String),
    #[error("bad count `{0}`")]
    BadCount(String),
    #[error("unknown color `{0}`")]
    UnknownColor(String),
}

/// One observed handful of cubes. Colors not mentioned in the source clause
/// are zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

/// A per-color cube budget.
///
/// Same shape as [`Sample`], but kept as its own type: one is a limit being
/// tested against, the other an observation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Budget {
    /// Construct a new budget.
    #[inline]
    pub fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    /// Test if the sample fits within this budget for every color.
    #[inline]
    pub fn allows(&self, sample: &Sample) -> bool {
        sample.red <= self.red && sample.green <= self.green && sample.blue <= self.blue
    }

    /// The product of the three per-color counts.
    #[inline]
    pub fn power(&self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

/// One game record: an id and the samples drawn during the game, in input
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub samples: Vec<Sample>,
}

impl Game {
    /// Test if every sample in the game fits within the given budget.
    pub fn is_feasible(&self, budget: &Budget) -> bool {
        self.samples.iter().all(|sample| budget.allows(sample))
    }

    /// The smallest budget under which this game is feasible, the per-color
    /// maximum across all samples.
    pub fn minimal_budget(&self) -> Budget {
        let mut budget = Budget::default();

        for sample in &self.samples {
            budget.red = budget.red.max(sample.red);
            budget.green = budget.green.max(sample.green);
            budget.blue = budget.blue.max(sample.blue);
        }

        budget
    }
}

/// Parse one `Game <id>: <clause>; <clause>; ...` record.
pub fn parse_game(line: &str) -> Result<Game, ParseError> {
    let (header, rest) = line.split_once(": ").ok_or(ParseError::MissingSeparator)?;

    let id = header
        .strip_prefix("Game ")
        .and_then(|id| id.parse().ok())
        .ok_or_else(|| ParseError::BadId(header.to_owned()))?;

    if rest.trim().is_empty() {
        return Err(ParseError::NoSamples);
    }

    let mut samples = Vec::new();

    for clause in rest.split("; ") {
        samples.push(parse_sample(clause)?);
    }

    Ok(Game { id, samples })
}

/// Parse one clause of comma-separated `<count> <color>` pairs, like
/// `3 blue, 4 red`.
pub fn parse_sample(clause: &str) -> Result<Sample, ParseError> {
    let mut sample = Sample::default();

    for pair in clause.split(", ") {
        let (count, color) = pair
            .split_once(' ')
            .ok_or_else(|| ParseError::BadPair(pair.to_owned()))?;

        let count = count
            .parse()
            .map_err(|_| ParseError::BadCount(count.to_owned()))?;

        match color {
            "red" => sample.red = count,
            "green" => sample.green = count,
            "blue" => sample.blue = count,
            _ => return Err(ParseError::UnknownColor(color.to_owned())),
        }
    }

    Ok(sample)
}

/// Sum of ids over the games feasible under `budget`.
pub fn sum_feasible_ids(games: &[Game], budget: &Budget) -> u32 {
    games
        .iter()
        .filter(|game| game.is_feasible(budget))
        .map(|game| game.id)
        .sum()
}

/// Sum of minimal-budget powers over all games.
pub fn sum_powers(games: &[Game]) -> u64 {
    games
        .iter()
        .map(|game| game.minimal_budget().power())
        .sum()
}
