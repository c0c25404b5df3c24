//! # Combinatorial Game Arena
//!
//! A small combinatorial-game-theory engine: a *position* type that can
//! enumerate its own legal successor positions, plus a game-agnostic referee
//! that drives play between interchangeable player strategies.
//!
//! In the combinatorial-game model a "move" is not a separate datum: making a
//! move means replacing the current position with one of its *options* (legal
//! successor positions). A player whose position has no options loses: the
//! normal play convention. This keeps the referee fully game-agnostic: it only
//! needs to enumerate options, compare positions for equality, and hand them
//! to whichever strategy is on turn.
//!
//! ## Modules
//! - [`games`]: position implementations (currently five-in-a-row)
//! - [`referee`]: the authoritative turn-loop orchestrator
//! - [`players`]: interchangeable strategies (human, random)

pub mod games;
pub mod players;
pub mod referee;

use std::fmt;

/// Identity of one of the two players.
///
/// Black moves first. The enum doubles as an index into two-element
/// name/strategy tables via [`PlayerId::index`] (Black = 0, White = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// First player (index 0).
    Black,
    /// Second player (index 1).
    White,
}

impl PlayerId {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::Black => PlayerId::White,
            PlayerId::White => PlayerId::Black,
        }
    }

    /// Index into a two-element player table (Black = 0, White = 1).
    pub fn index(self) -> usize {
        match self {
            PlayerId::Black => 0,
            PlayerId::White => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Black => write!(f, "Black"),
            PlayerId::White => write!(f, "White"),
        }
    }
}

/// Errors produced by position construction and cell access.
///
/// Both kinds are caller-input errors with no retry semantics. Note that
/// placing a stone on an occupied cell is *not* an error; see
/// `GomokuPosition::option_for` for the documented no-op contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A row/column index fell outside `[0, size)`.
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board dimension.
        size: usize,
    },
    /// A supplied source grid does not match the declared board dimension.
    InvalidBoard {
        /// Declared board dimension.
        expected: usize,
        /// Number of rows actually supplied.
        rows: usize,
        /// Widest row actually supplied.
        cols: usize,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col, size } => {
                write!(f, "cell ({}, {}) is outside the {2}x{2} board", row, col, size)
            }
            GameError::InvalidBoard { expected, rows, cols } => {
                write!(
                    f,
                    "source grid is {}x{} but the declared size is {}",
                    rows, cols, expected
                )
            }
        }
    }
}

impl std::error::Error for GameError {}

/// A position in a two-player combinatorial game.
///
/// Positions are values: every transform returns a brand-new position and no
/// operation mutates an existing one, so sharing a position across threads
/// for concurrent reads is always safe. Equality is structural.
///
/// The referee and all strategies operate purely through this trait, so any
/// game can be plugged in by implementing it.
pub trait CombinatorialGame: Clone + PartialEq {
    /// Enumerates every legal successor position for `player`.
    ///
    /// An empty result means the position is terminal for `player`: under the
    /// normal play convention, `player` loses. The ordering must be
    /// deterministic and stable so game trees are reproducible.
    fn options(&self, player: PlayerId) -> Vec<Self>;

    /// A stable, human-readable label for logging and transcripts.
    /// Display text only; never semantically load-bearing.
    fn describe(&self) -> String;

    /// Display names for the two players, indexed by [`PlayerId::index`].
    fn player_names() -> [&'static str; 2] {
        ["Black", "White"]
    }
}
