//! End-to-end checks of the five-in-a-row position through the public API:
//! option generation, win detection, the pie rule, and a full refereed game.

use cgt::games::gomoku::{Cell, GomokuPosition};
use cgt::players::random::RandomStrategy;
use cgt::players::Strategy;
use cgt::referee::Referee;
use cgt::{CombinatorialGame, PlayerId};

fn rows(size: usize) -> Vec<Vec<Cell>> {
    vec![vec![Cell::Empty; size]; size]
}

#[test]
fn option_count_is_empty_cells_plus_pie() {
    let position = GomokuPosition::new(4, true);
    assert_eq!(position.options(PlayerId::Black).len(), 17);

    let one_stone = position.option_for(1, 1, PlayerId::Black).unwrap();
    assert_eq!(one_stone.options(PlayerId::White).len(), 16);

    let no_pie = GomokuPosition::new(4, false);
    assert_eq!(no_pie.options(PlayerId::Black).len(), 16);
}

#[test]
fn opponent_win_terminates_the_mover() {
    let mut grid = rows(8);
    for c in 1..6 {
        grid[4][c] = Cell::White;
    }
    let position = GomokuPosition::from_rows(8, &grid, false).unwrap();

    assert!(position.has_five_in_row(PlayerId::White));
    assert!(position.options(PlayerId::Black).is_empty());
}

#[test]
fn every_option_differs_in_exactly_one_cell() {
    let position = GomokuPosition::new(5, false)
        .option_for(2, 2, PlayerId::Black)
        .unwrap();

    for option in position.options(PlayerId::White) {
        let mut differences = 0;
        for r in 0..5 {
            for c in 0..5 {
                if option.get(r, c).unwrap() != position.get(r, c).unwrap() {
                    differences += 1;
                    assert_eq!(option.get(r, c).unwrap(), Cell::White);
                }
            }
        }
        assert_eq!(differences, 1);
    }
}

#[test]
fn negation_round_trips_through_the_pie_option() {
    let position = GomokuPosition::new(5, true)
        .option_for(0, 0, PlayerId::Black)
        .unwrap();

    let options = position.options(PlayerId::White);
    let swap = options.last().unwrap().clone();
    assert_eq!(swap.get(0, 0).unwrap(), Cell::White);
    assert_eq!(swap.negate(), position);
}

#[test]
fn random_self_play_always_ends_with_a_winner() {
    // Small board so the game ends quickly; the seed keeps the test stable.
    let mut referee = Referee::new(GomokuPosition::new(5, false));
    let mut strategies = [RandomStrategy::seeded(9), RandomStrategy::seeded(10)];

    let mut turns = 0;
    while !referee.is_game_over() {
        let mover = referee.to_move();
        let options = referee.legal_options();
        let chosen = strategies[mover.index()]
            .choose(referee.position(), &options)
            .expect("mover with no options should already be game over");
        match referee.try_move_to(chosen) {
            cgt::referee::MoveOutcome::Accepted { .. } => {}
            other => panic!("self-play move rejected: {:?}", other),
        }
        turns += 1;
        assert!(turns <= 25, "game did not terminate");
    }

    // Normal play: someone always wins, even on a filled board.
    assert!(referee.winner().is_some());
    assert!(referee.transcript().contains("wins!"));
}

#[test]
fn board_with_no_room_is_a_loss_for_the_mover() {
    // 5x5 board with every cell filled and no five-in-a-row anywhere:
    // alternate colors by a pattern that breaks all runs.
    let mut grid = rows(5);
    for r in 0..5 {
        for c in 0..5 {
            grid[r][c] = if (r * 2 + c) % 4 < 2 { Cell::Black } else { Cell::White };
        }
    }
    let position = GomokuPosition::from_rows(5, &grid, false).unwrap();
    assert!(!position.has_five_in_row(PlayerId::Black));
    assert!(!position.has_five_in_row(PlayerId::White));

    // Nobody has won, but there is nowhere to play.
    assert!(position.options(PlayerId::Black).is_empty());
    assert!(position.options(PlayerId::White).is_empty());
}
