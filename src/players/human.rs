//! Interactive human strategy.
//!
//! Reads moves from stdin as `row,col` coordinate pairs, or the word `pie`
//! to take the pie-rule swap when it is on offer. The typed coordinates are
//! mapped onto a successor position with `option_for`, then checked against
//! the referee-provided option list; anything that does not resolve to a
//! legal option is reported and re-prompted.

use crate::games::gomoku::GomokuPosition;
use crate::players::Strategy;
use crate::PlayerId;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// A coordinate pair typed by the user.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GridMove(pub usize, pub usize);

impl FromStr for GridMove {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return Err("Expected format: row,col".to_string());
        }
        let row = parts[0].parse::<usize>().map_err(|e| e.to_string())?;
        let col = parts[1].parse::<usize>().map_err(|e| e.to_string())?;
        Ok(GridMove(row, col))
    }
}

/// One line of user input, parsed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HumanCommand {
    /// Place a stone at the coordinates.
    Place(GridMove),
    /// Take the pie-rule swap.
    Pie,
}

impl FromStr for HumanCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("pie") {
            return Ok(HumanCommand::Pie);
        }
        trimmed.parse::<GridMove>().map(HumanCommand::Place)
    }
}

/// Interactive player for one seat of a five-in-a-row game.
pub struct HumanStrategy {
    player: PlayerId,
}

impl HumanStrategy {
    /// An interactive strategy playing the given seat.
    pub fn new(player: PlayerId) -> Self {
        Self { player }
    }

    /// Maps a parsed command onto one of the legal options.
    fn resolve(
        &self,
        position: &GomokuPosition,
        options: &[GomokuPosition],
        command: HumanCommand,
    ) -> Result<GomokuPosition, String> {
        let candidate = match command {
            HumanCommand::Place(GridMove(row, col)) => {
                if !position
                    .get(row, col)
                    .map_err(|e| e.to_string())?
                    .is_empty()
                {
                    return Err(format!("cell ({}, {}) is already occupied", row, col));
                }
                position.option_for(row, col, self.player).map_err(|e| e.to_string())?
            }
            HumanCommand::Pie => {
                if !position.pie_rule() {
                    return Err("the pie rule is not available in this game".to_string());
                }
                position.negate()
            }
        };

        if options.contains(&candidate) {
            Ok(candidate)
        } else {
            Err("that is not a legal move here".to_string())
        }
    }
}

impl Strategy<GomokuPosition> for HumanStrategy {
    fn name(&self) -> &'static str {
        "Human"
    }

    /// Prompts on stdin until the input resolves to a legal option.
    /// Returns `None` on end of input (treated as resignation).
    fn choose(
        &mut self,
        position: &GomokuPosition,
        options: &[GomokuPosition],
    ) -> Option<GomokuPosition> {
        if options.is_empty() {
            return None;
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            let hint = if position.pie_rule() {
                "row,col (or 'pie')"
            } else {
                "row,col"
            };
            print!("{} [{}]: ", self.player.to_string().bold(), hint);
            let _ = io::stdout().flush();

            let line = match lines.next() {
                Some(Ok(line)) => line,
                _ => return None,
            };

            match line.parse::<HumanCommand>() {
                Ok(command) => match self.resolve(position, options, command) {
                    Ok(chosen) => return Some(chosen),
                    Err(message) => println!("{}", message.red()),
                },
                Err(message) => println!("{}", message.red()),
            }
        }
    }
}
