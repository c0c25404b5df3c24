//! # Referee Module - Authoritative Game Orchestration
//!
//! The [`Referee`] is the single source of truth for the current position of
//! a game in progress. Strategies and views only ever see clones; every
//! proposed move comes back to the referee, which validates it by membership
//! in the legal option set before it becomes authoritative.
//!
//! A move in a combinatorial game is a successor *position*, so validation is
//! pure structural equality against the enumerated options. The referee also
//! keeps a timestamped history of accepted positions and decides the end of
//! the game: under the normal play convention the player left without
//! options loses, and the player who made the last move wins.

use crate::{CombinatorialGame, PlayerId};
use std::time::SystemTime;

/// Result of proposing a successor position to the referee.
#[derive(Debug, Clone)]
pub enum MoveOutcome {
    /// The position was accepted and is now authoritative.
    Accepted {
        /// Player who made the move.
        player: PlayerId,
        /// Move number (1-indexed).
        move_number: usize,
        /// Whether the game ended with this move.
        game_over: bool,
        /// Winner if the game is over.
        winner: Option<PlayerId>,
    },
    /// The position was rejected as invalid.
    Rejected {
        /// Reason the position was rejected.
        reason: MoveValidationError,
    },
}

/// Reasons a proposed position can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveValidationError {
    /// The proposed position is not among the mover's legal options.
    NotAnOption,
    /// The game is already in a terminal state.
    GameAlreadyOver,
}

impl std::fmt::Display for MoveValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveValidationError::NotAnOption => {
                write!(f, "position is not a legal option for the player to move")
            }
            MoveValidationError::GameAlreadyOver => write!(f, "game is already over"),
        }
    }
}

/// A single accepted move in the game history.
#[derive(Debug, Clone)]
pub struct HistoryEntry<G> {
    /// When the move was accepted.
    pub timestamp: SystemTime,
    /// Player who made the move.
    pub player: PlayerId,
    /// Move number (1-indexed).
    pub move_number: usize,
    /// The position the move produced.
    pub position: G,
}

impl<G> HistoryEntry<G> {
    fn new(player: PlayerId, move_number: usize, position: G) -> Self {
        Self {
            timestamp: SystemTime::now(),
            player,
            move_number,
            position,
        }
    }
}

/// Current game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is still in progress.
    InProgress,
    /// Game ended; the named player made the last move and wins.
    Win(PlayerId),
}

impl GameStatus {
    /// Check if the game is over.
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The game-agnostic orchestrator owning the authoritative position.
///
/// # Usage
/// ```rust,ignore
/// let mut referee = Referee::new(GomokuPosition::new(15, false));
///
/// let options = referee.legal_options();
/// match referee.try_move_to(options[0].clone()) {
///     MoveOutcome::Accepted { game_over, winner, .. } => { /* advance */ }
///     MoveOutcome::Rejected { reason } => { /* re-prompt */ }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Referee<G: CombinatorialGame> {
    /// The authoritative position.
    position: G,
    /// Player to move. Black moves first.
    to_move: PlayerId,
    /// Complete history of accepted moves.
    history: Vec<HistoryEntry<G>>,
    /// Current game status.
    status: GameStatus,
}

impl<G: CombinatorialGame> Referee<G> {
    /// Creates a referee over the given initial position, Black to move.
    ///
    /// If the initial position is already terminal for Black (for example a
    /// board where White holds a completed run), the status is an immediate
    /// win for White.
    pub fn new(initial: G) -> Self {
        let status = if initial.options(PlayerId::Black).is_empty() {
            GameStatus::Win(PlayerId::White)
        } else {
            GameStatus::InProgress
        };
        Self {
            position: initial,
            to_move: PlayerId::Black,
            history: Vec::new(),
            status,
        }
    }

    /// The authoritative position, for rendering. Do not store the reference
    /// across turns; it changes whenever a move is accepted.
    pub fn position(&self) -> &G {
        &self.position
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> PlayerId {
        self.to_move
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is over.
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// The winner, if the game is over.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Win(player) => Some(player),
            GameStatus::InProgress => None,
        }
    }

    /// Legal successor positions for the player to move. Empty once the game
    /// is over.
    pub fn legal_options(&self) -> Vec<G> {
        if self.status.is_game_over() {
            Vec::new()
        } else {
            self.position.options(self.to_move)
        }
    }

    /// Validates a proposed position without applying it.
    pub fn validate(&self, next: &G) -> Result<(), MoveValidationError> {
        if self.status.is_game_over() {
            return Err(MoveValidationError::GameAlreadyOver);
        }
        if !self.position.options(self.to_move).iter().any(|option| option == next) {
            return Err(MoveValidationError::NotAnOption);
        }
        Ok(())
    }

    /// Proposes `next` as the move of the player on turn.
    ///
    /// On acceptance the position becomes authoritative, the history grows
    /// by one entry, and the turn passes. If the new player to move has no
    /// options, the mover wins and the game is over.
    pub fn try_move_to(&mut self, next: G) -> MoveOutcome {
        if let Err(reason) = self.validate(&next) {
            return MoveOutcome::Rejected { reason };
        }

        let player = self.to_move;
        let move_number = self.history.len() + 1;

        self.position = next;
        self.history
            .push(HistoryEntry::new(player, move_number, self.position.clone()));
        self.to_move = player.opponent();

        // Normal play convention: no options means the new mover has lost.
        let game_over = self.position.options(self.to_move).is_empty();
        let winner = if game_over {
            self.status = GameStatus::Win(player);
            Some(player)
        } else {
            None
        };

        MoveOutcome::Accepted {
            player,
            move_number,
            game_over,
            winner,
        }
    }

    /// The complete history of accepted moves.
    pub fn history(&self) -> &[HistoryEntry<G>] {
        &self.history
    }

    /// Number of accepted moves so far.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Formats the move history as a displayable transcript.
    pub fn transcript(&self) -> String {
        if self.history.is_empty() {
            return String::from("No moves made yet.");
        }

        let names = G::player_names();
        let mut output = format!("=== {} transcript ===\n\n", self.position.describe());

        for entry in &self.history {
            output.push_str(&format!(
                "{}. {} -> {}\n",
                entry.move_number,
                names[entry.player.index()],
                entry.position.describe()
            ));
        }

        match self.status {
            GameStatus::Win(winner) => {
                output.push_str(&format!("\nResult: {} wins!\n", names[winner.index()]));
            }
            GameStatus::InProgress => {
                output.push_str(&format!(
                    "\n(Game in progress, {} to move)\n",
                    names[self.to_move.index()]
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::gomoku::{Cell, GomokuPosition};

    #[test]
    fn test_accepts_legal_option() {
        let mut referee = Referee::new(GomokuPosition::new(7, false));
        let next = referee.position().option_for(3, 3, PlayerId::Black).unwrap();

        match referee.try_move_to(next) {
            MoveOutcome::Accepted { player, move_number, game_over, .. } => {
                assert_eq!(player, PlayerId::Black);
                assert_eq!(move_number, 1);
                assert!(!game_over);
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
        assert_eq!(referee.to_move(), PlayerId::White);
        assert_eq!(referee.position().get(3, 3).unwrap(), Cell::Black);
    }

    #[test]
    fn test_rejects_position_that_is_not_an_option() {
        let mut referee = Referee::new(GomokuPosition::new(7, false));
        // Two stones at once is not reachable in one move.
        let bogus = referee
            .position()
            .option_for(0, 0, PlayerId::Black)
            .unwrap()
            .option_for(0, 1, PlayerId::Black)
            .unwrap();

        match referee.try_move_to(bogus) {
            MoveOutcome::Rejected { reason: MoveValidationError::NotAnOption } => {}
            other => panic!("expected rejection, got {:?}", other),
        }
        assert_eq!(referee.move_count(), 0);
    }

    #[test]
    fn test_rejects_wrong_color_placement() {
        let mut referee = Referee::new(GomokuPosition::new(7, false));
        // White stone while Black is on turn.
        let bogus = referee.position().option_for(3, 3, PlayerId::White).unwrap();
        match referee.try_move_to(bogus) {
            MoveOutcome::Rejected { reason: MoveValidationError::NotAnOption } => {}
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    /// Plays a full game on a 5x5 board where Black builds row 0 and White
    /// answers in row 1.
    fn play_black_win() -> Referee<GomokuPosition> {
        let mut referee = Referee::new(GomokuPosition::new(5, false));
        for c in 0..5 {
            let black = referee.position().option_for(0, c, PlayerId::Black).unwrap();
            match referee.try_move_to(black) {
                MoveOutcome::Accepted { .. } => {}
                other => panic!("black move rejected: {:?}", other),
            }
            if c < 4 {
                let white = referee.position().option_for(1, c, PlayerId::White).unwrap();
                match referee.try_move_to(white) {
                    MoveOutcome::Accepted { .. } => {}
                    other => panic!("white move rejected: {:?}", other),
                }
            }
        }
        referee
    }

    #[test]
    fn test_declares_winner_when_opponent_runs_out_of_options() {
        let referee = play_black_win();
        assert!(referee.is_game_over());
        assert_eq!(referee.winner(), Some(PlayerId::Black));
        assert_eq!(referee.status(), GameStatus::Win(PlayerId::Black));
        assert!(referee.legal_options().is_empty());
        assert_eq!(referee.move_count(), 9);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut referee = play_black_win();
        let stale = referee.position().option_for(4, 4, PlayerId::White).unwrap();
        match referee.try_move_to(stale) {
            MoveOutcome::Rejected { reason: MoveValidationError::GameAlreadyOver } => {}
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_terminal_position_is_an_immediate_win() {
        // White already holds a completed run, so Black starts with no options.
        let mut rows = vec![vec![Cell::Empty; 5]; 5];
        for c in 0..5 {
            rows[2][c] = Cell::White;
        }
        let position = GomokuPosition::from_rows(5, &rows, false).unwrap();
        let referee = Referee::new(position);
        assert_eq!(referee.winner(), Some(PlayerId::White));
    }

    #[test]
    fn test_history_records_players_in_turn_order() {
        let referee = play_black_win();
        let history = referee.history();
        assert_eq!(history[0].player, PlayerId::Black);
        assert_eq!(history[1].player, PlayerId::White);
        assert_eq!(history[0].move_number, 1);
        assert_eq!(history[8].player, PlayerId::Black);
    }

    #[test]
    fn test_transcript_formatting() {
        let referee = play_black_win();
        let transcript = referee.transcript();
        assert!(transcript.contains("Gomoku 5x5"));
        assert!(transcript.contains("1. Black ->"));
        assert!(transcript.contains("Result: Black wins!"));

        let fresh: Referee<GomokuPosition> = Referee::new(GomokuPosition::new(5, false));
        assert_eq!(fresh.transcript(), "No moves made yet.");
    }

    #[test]
    fn test_pie_rule_swap_is_accepted() {
        let mut referee = Referee::new(GomokuPosition::new(5, true));
        let black = referee.position().option_for(2, 2, PlayerId::Black).unwrap();
        referee.try_move_to(black);

        // White answers with the swap instead of a placement.
        let swap = referee.position().negate();
        match referee.try_move_to(swap) {
            MoveOutcome::Accepted { player, .. } => assert_eq!(player, PlayerId::White),
            other => panic!("expected acceptance, got {:?}", other),
        }
        assert_eq!(referee.position().get(2, 2).unwrap(), Cell::White);
    }
}
