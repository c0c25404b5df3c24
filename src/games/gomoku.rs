//! # Gomoku (Five in a Row) Position
//!
//! Players alternate placing stones on an N×N grid; the first player to line
//! up five or more consecutive stones horizontally, vertically, or along
//! either diagonal wins. An optional *pie rule* lets the player to move swap
//! colors (take over the opponent's stones) instead of placing a stone, which
//! compensates for the first-move advantage.
//!
//! A position is a value: every operation that "changes the board" clones and
//! returns a new position. Terminality is expressed through option
//! enumeration, as the generic engine expects: once a player has completed a
//! run of five, the opponent has no options and has lost.

use crate::{CombinatorialGame, GameError, PlayerId};
use std::fmt;

/// Number of consecutive stones required to win.
pub const WIN_LENGTH: usize = 5;

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No stone.
    Empty,
    /// Stone of the first player.
    Black,
    /// Stone of the second player.
    White,
}

impl Cell {
    /// True if no stone occupies the cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Swaps stone colors; empty cells are fixed.
    fn negated(self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
        }
    }
}

impl From<PlayerId> for Cell {
    fn from(player: PlayerId) -> Self {
        match player {
            PlayerId::Black => Cell::Black,
            PlayerId::White => Cell::White,
        }
    }
}

/// A five-in-a-row position on an N×N board.
///
/// The grid is stored row-major in a flat vector of exactly `size * size`
/// cells, exclusively owned by this position. `Clone` therefore yields a
/// fully independent deep copy.
///
/// Equality compares the board dimension and every cell; the pie-rule flag
/// is a rules setting, not board state, and does not participate.
#[derive(Debug, Clone)]
pub struct GomokuPosition {
    /// Board dimension N.
    size: usize,
    /// Cells in row-major order, always exactly `size * size` long.
    board: Vec<Cell>,
    /// Whether the pie-rule swap is offered as an option.
    pie_rule: bool,
}

impl GomokuPosition {
    /// Creates an empty position of the given dimension.
    pub fn new(size: usize, pie_rule: bool) -> Self {
        GomokuPosition {
            size,
            board: vec![Cell::Empty; size * size],
            pie_rule,
        }
    }

    /// Creates a position from an existing grid, deep-copying it.
    ///
    /// The grid must be exactly `size` rows of `size` cells each; anything
    /// else is rejected with [`GameError::InvalidBoard`] rather than clamped
    /// or padded.
    pub fn from_rows(size: usize, rows: &[Vec<Cell>], pie_rule: bool) -> Result<Self, GameError> {
        if rows.len() != size || rows.iter().any(|row| row.len() != size) {
            return Err(GameError::InvalidBoard {
                expected: size,
                rows: rows.len(),
                cols: rows.iter().map(Vec::len).max().unwrap_or(0),
            });
        }
        Ok(GomokuPosition {
            size,
            board: rows.iter().flatten().copied().collect(),
            pie_rule,
        })
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the pie-rule swap is offered in [`CombinatorialGame::options`].
    pub fn pie_rule(&self) -> bool {
        self.pie_rule
    }

    /// Reads the cell at `(row, col)`, failing outside `[0, size)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds { row, col, size: self.size });
        }
        Ok(self.cell(row, col))
    }

    /// Unchecked cell read. Callers guarantee both indices are in range.
    fn cell(&self, row: usize, col: usize) -> Cell {
        self.board[row * self.size + col]
    }

    /// The successor reached by `player` placing a stone at `(row, col)`.
    ///
    /// If the cell is already occupied the result is an unmodified clone, a
    /// deliberate no-op that keeps view-driven interaction simple. Callers
    /// that need strict rejection of illegal moves must check
    /// `get(row, col)` themselves beforehand. Out-of-range coordinates fail
    /// with [`GameError::OutOfBounds`].
    pub fn option_for(
        &self,
        row: usize,
        col: usize,
        player: PlayerId,
    ) -> Result<GomokuPosition, GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds { row, col, size: self.size });
        }
        let mut option = self.clone();
        let idx = row * self.size + col;
        if option.board[idx].is_empty() {
            option.board[idx] = Cell::from(player);
        }
        Ok(option)
    }

    /// The color-inverted position: Black and White stones swap, empty cells
    /// stay empty. An involution, `p.negate().negate() == p`. Doubles as the
    /// pie-rule option and as a view-triggered transform.
    pub fn negate(&self) -> GomokuPosition {
        GomokuPosition {
            size: self.size,
            board: self.board.iter().map(|cell| cell.negated()).collect(),
            pie_rule: self.pie_rule,
        }
    }

    /// True iff `player` has a run of [`WIN_LENGTH`] or more consecutive
    /// stones along any row, column, or diagonal.
    ///
    /// Every diagonal of length >= 5 is scanned in both orientations,
    /// enumerated from its starting edge cell, so winning runs away from the
    /// main diagonals are found on boards of any size. Boards smaller than
    /// five cannot contain a run and always report false.
    pub fn has_five_in_row(&self, player: PlayerId) -> bool {
        let stone = Cell::from(player);
        let n = self.size;
        if n < WIN_LENGTH {
            return false;
        }

        // Rows and columns.
        for i in 0..n {
            if self.has_run(stone, (0..n).map(|j| (i, j)))
                || self.has_run(stone, (0..n).map(|j| (j, i)))
            {
                return true;
            }
        }

        // ↘ diagonals: one starting on each left-edge cell, one on each
        // top-edge cell (skipping (0, 0) which both families share).
        for r in 0..n {
            if self.has_run(stone, (0..n - r).map(|k| (r + k, k))) {
                return true;
            }
        }
        for c in 1..n {
            if self.has_run(stone, (0..n - c).map(|k| (k, c + k))) {
                return true;
            }
        }

        // ↗ diagonals (row increasing, column decreasing): one starting on
        // each top-edge cell, one on each right-edge cell below the corner.
        for c in 0..n {
            if self.has_run(stone, (0..=c).map(|k| (k, c - k))) {
                return true;
            }
        }
        for r in 1..n {
            if self.has_run(stone, (0..n - r).map(|k| (r + k, n - 1 - k))) {
                return true;
            }
        }

        false
    }

    /// Counts consecutive `stone` cells along `coords`, resetting on any
    /// other cell, and short-circuits once the count reaches [`WIN_LENGTH`].
    fn has_run(&self, stone: Cell, coords: impl Iterator<Item = (usize, usize)>) -> bool {
        let mut count = 0;
        for (row, col) in coords {
            if self.cell(row, col) == stone {
                count += 1;
                if count >= WIN_LENGTH {
                    return true;
                }
            } else {
                count = 0;
            }
        }
        false
    }

    /// Number of stones on the board, used by `describe`.
    fn stone_count(&self) -> usize {
        self.board.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl PartialEq for GomokuPosition {
    /// Structural value equality over dimension and cells. The pie-rule
    /// flag is a rules setting, not board state, and does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.board == other.board
    }
}

impl Eq for GomokuPosition {}

impl fmt::Display for GomokuPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                let symbol = match self.cell(r, c) {
                    Cell::Black => "X",
                    Cell::White => "O",
                    Cell::Empty => ".",
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl CombinatorialGame for GomokuPosition {
    /// One successor per empty cell in row-major order, each a clone with
    /// that single cell set to `player`'s stone, plus one trailing
    /// `negate()` option when the pie rule is enabled.
    ///
    /// If the opponent has already completed a run of five the position is
    /// terminal for `player` and the result is empty: a loss under the
    /// normal play convention.
    fn options(&self, player: PlayerId) -> Vec<Self> {
        if self.has_five_in_row(player.opponent()) {
            return Vec::new();
        }

        let stone = Cell::from(player);
        let mut options = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let idx = row * self.size + col;
                if self.board[idx].is_empty() {
                    let mut option = self.clone();
                    option.board[idx] = stone;
                    options.push(option);
                }
            }
        }

        if self.pie_rule {
            options.push(self.negate());
        }

        options
    }

    fn describe(&self) -> String {
        format!("Gomoku {0}x{0}, {1} stones", self.size, self.stone_count())
    }
}
