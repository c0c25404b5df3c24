//! # Player Strategies Module
//!
//! Interchangeable policies for choosing one of the legal successor
//! positions each turn. The referee treats every strategy identically: it
//! hands over the current position plus the enumerated options and takes
//! back the chosen option.
//!
//! Strategy construction goes through [`PlayerKind`] and
//! [`build_gomoku_strategy`], an explicit enum-keyed factory. The seat a
//! strategy plays is fixed at construction time.

pub mod human;
pub mod random;

use crate::games::gomoku::GomokuPosition;
use crate::{CombinatorialGame, PlayerId};

use human::HumanStrategy;
use random::RandomStrategy;

/// A policy for selecting a successor position.
pub trait Strategy<G: CombinatorialGame> {
    /// Short display name for prompts and transcripts.
    fn name(&self) -> &'static str;

    /// Picks one of `options` as the move to make from `position`.
    ///
    /// Returns `None` only when `options` is empty (the strategy has lost)
    /// or when an interactive strategy resigns (e.g. end of input).
    fn choose(&mut self, position: &G, options: &[G]) -> Option<G>;
}

/// Kinds of players that can occupy a seat, selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    /// Interactive player reading coordinates from stdin.
    Human,
    /// Uniform-random choice over the legal options.
    Random,
}

impl std::fmt::Display for PlayerKind {
    /// Matches the command-line value names so clap can round-trip defaults.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Random => write!(f, "random"),
        }
    }
}

/// Builds the strategy for one seat of a five-in-a-row game.
///
/// `seed` only affects [`PlayerKind::Random`]; `None` seeds from the
/// operating system.
pub fn build_gomoku_strategy(
    kind: PlayerKind,
    player: PlayerId,
    seed: Option<u64>,
) -> Box<dyn Strategy<GomokuPosition>> {
    match kind {
        PlayerKind::Human => Box::new(HumanStrategy::new(player)),
        PlayerKind::Random => Box::new(match seed {
            Some(seed) => RandomStrategy::seeded(seed),
            None => RandomStrategy::new(),
        }),
    }
}
