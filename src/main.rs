//! # Five in a Row - Terminal Arena
//!
//! Entry point for a terminal match of five-in-a-row driven by the
//! combinatorial-game referee. Each seat is occupied by an interchangeable
//! strategy (interactive human or uniform random) chosen on the command
//! line; the referee validates every proposed position before it becomes
//! authoritative.
//!
//! ## Usage
//! ```text
//! play --size 15 --black human --white random
//! play --size 9 --pie-rule --black random --white random --seed 42
//! ```

use cgt::games::gomoku::{Cell, GomokuPosition};
use cgt::players::{build_gomoku_strategy, PlayerKind, Strategy};
use cgt::referee::{MoveOutcome, Referee};
use cgt::{CombinatorialGame, PlayerId};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

/// Command line arguments for a single match.
#[derive(Parser, Debug)]
#[command(name = "play", about = "Play five-in-a-row between two configurable players")]
struct Args {
    /// Board dimension N (the board is N x N)
    #[arg(long, default_value_t = 15)]
    size: usize,

    /// Offer the second player the pie-rule swap
    #[arg(long)]
    pie_rule: bool,

    /// Strategy occupying the Black seat (moves first)
    #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
    black: PlayerKind,

    /// Strategy occupying the White seat
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    white: PlayerKind,

    /// RNG seed for random strategies, for reproducible games
    #[arg(long)]
    seed: Option<u64>,
}

/// Renders the board with coordinate labels and colored stones.
fn render(position: &GomokuPosition) -> String {
    let size = position.size();
    let mut out = String::from("    ");
    for c in 0..size {
        out.push_str(&format!("{:>2} ", c));
    }
    out.push('\n');

    for r in 0..size {
        out.push_str(&format!("{:>3} ", r));
        for c in 0..size {
            // Indices are in range by construction.
            let cell = position.get(r, c).unwrap_or(Cell::Empty);
            let stone = match cell {
                Cell::Black => " X ".red().bold().to_string(),
                Cell::White => " O ".blue().bold().to_string(),
                Cell::Empty => " . ".dimmed().to_string(),
            };
            out.push_str(&stone);
        }
        out.push('\n');
    }
    out
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.size < 5 {
        eprintln!(
            "{}",
            format!("board size {} is too small for five-in-a-row (minimum 5)", args.size).red()
        );
        return ExitCode::FAILURE;
    }

    let position = GomokuPosition::new(args.size, args.pie_rule);
    let mut referee = Referee::new(position);

    let names = GomokuPosition::player_names();
    let kinds = [args.black, args.white];
    let mut strategies: [Box<dyn Strategy<GomokuPosition>>; 2] = [
        build_gomoku_strategy(args.black, PlayerId::Black, args.seed),
        build_gomoku_strategy(
            args.white,
            PlayerId::White,
            // Distinct stream for the second seat, so seeded self-play does
            // not mirror itself.
            args.seed.map(|seed| seed.wrapping_add(1)),
        ),
    ];

    println!("{}", referee.position().describe().bold());
    for player in [PlayerId::Black, PlayerId::White] {
        println!("  {}: {}", names[player.index()], kinds[player.index()]);
    }

    while !referee.is_game_over() {
        println!("\n{}", render(referee.position()));

        let mover = referee.to_move();
        let options = referee.legal_options();
        println!(
            "{} to move ({} options)",
            names[mover.index()].bold(),
            options.len()
        );

        let chosen = match strategies[mover.index()].choose(referee.position(), &options) {
            Some(chosen) => chosen,
            None => {
                println!("{} resigns.", names[mover.index()]);
                println!("{}", format!("{} wins!", names[mover.opponent().index()]).green().bold());
                return ExitCode::SUCCESS;
            }
        };

        match referee.try_move_to(chosen) {
            MoveOutcome::Accepted { player, move_number, game_over, winner } => {
                println!("move {}: {}", move_number, names[player.index()]);
                if game_over {
                    if let Some(winner) = winner {
                        println!("\n{}", render(referee.position()));
                        println!("{}", format!("{} wins!", names[winner.index()]).green().bold());
                    }
                }
            }
            MoveOutcome::Rejected { reason } => {
                // Strategies only propose positions from the option list, so
                // a rejection here is a bug worth surfacing loudly.
                eprintln!("{}", format!("referee rejected the move: {}", reason).red());
                return ExitCode::FAILURE;
            }
        }
    }

    println!("\n{}", referee.transcript());
    ExitCode::SUCCESS
}
