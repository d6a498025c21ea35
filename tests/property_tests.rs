//! Property tests - invariants that must hold for any dimensions and any
//! sequence of column picks

use proptest::prelude::*;

use tui_connect4::core::{create_game, has_win, GameState};
use tui_connect4::types::{ConfigError, MoveError, Outcome, PlayerId, MAX_DIMENSION};

/// No empty cell sits below an occupied one in any column.
fn assert_gravity(state: &GameState) {
    let grid = state.grid();
    for column in 0..grid.width() {
        let mut seen_empty_below = false;
        for row in (0..grid.height()).rev() {
            let occupied = grid.get(row, column).flatten().is_some();
            if occupied {
                assert!(!seen_empty_below, "gap below ({}, {})", row, column);
            } else {
                seen_empty_below = true;
            }
        }
    }
}

proptest! {
    #[test]
    fn fresh_game_is_empty(height in 4usize..=12, width in 4usize..=12) {
        let state = create_game(height, width, "a", "b").unwrap();
        prop_assert_eq!(state.outcome(), Outcome::InProgress);
        prop_assert_eq!(state.active_player(), PlayerId::One);
        prop_assert_eq!(state.grid().height(), height);
        prop_assert_eq!(state.grid().width(), width);
        prop_assert!(state.grid().cells().iter().all(|c| c.is_none()));
    }

    #[test]
    fn too_small_dimensions_rejected(height in 0usize..4, width in 0usize..12) {
        prop_assert!(create_game(height, width, "a", "b").is_err());
        prop_assert!(create_game(width.max(4), height, "a", "b").is_err());
    }

    #[test]
    fn oversized_dimensions_rejected(
        extra in 1usize..=usize::MAX - MAX_DIMENSION,
        other in 4usize..=12,
    ) {
        let big = MAX_DIMENSION + extra;
        let tall = create_game(big, other, "a", "b").unwrap_err();
        prop_assert!(
            matches!(tall, ConfigError::DimensionTooLarge { axis: "height", .. }),
            "unexpected error {:?}",
            tall
        );
        let wide = create_game(other, big, "a", "b").unwrap_err();
        prop_assert!(
            matches!(wide, ConfigError::DimensionTooLarge { axis: "width", .. }),
            "unexpected error {:?}",
            wide
        );
    }

    #[test]
    fn drops_land_in_lowest_empty_row(
        height in 4usize..=8,
        width in 4usize..=8,
        picks in proptest::collection::vec(0usize..8, 0..80),
    ) {
        let mut state = create_game(height, width, "a", "b").unwrap();
        for pick in picks {
            let column = pick % width;
            let expected_row = state.grid().lowest_empty_row(column);
            match state.apply_move(column) {
                Ok(next) => {
                    let placed = next.last_move().unwrap();
                    prop_assert_eq!(Some(placed.row), expected_row);
                    prop_assert_eq!(placed.column, column);
                }
                Err(MoveError::ColumnFull { .. }) => prop_assert_eq!(expected_row, None),
                Err(MoveError::GameOver) => prop_assert!(state.is_terminal()),
                Err(err) => prop_assert!(false, "unexpected error {:?}", err),
            }
            assert_gravity(&state);
        }
    }

    #[test]
    fn turns_alternate_and_rejections_change_nothing(
        height in 4usize..=7,
        width in 4usize..=7,
        picks in proptest::collection::vec(0usize..9, 0..60),
    ) {
        let mut state = create_game(height, width, "a", "b").unwrap();
        for column in picks {
            let before = state.clone();
            let mover = state.active_player();
            match state.apply_move(column) {
                Ok(next) => {
                    prop_assert_eq!(next.moves_played(), before.moves_played() + 1);
                    match next.outcome() {
                        Outcome::InProgress => prop_assert_eq!(next.active_player(), mover.other()),
                        Outcome::WonBy(winner) => {
                            prop_assert_eq!(winner, mover);
                            prop_assert!(has_win(next.grid(), mover));
                        }
                        Outcome::Tied => {
                            prop_assert!(next.grid().is_full());
                            prop_assert!(!has_win(next.grid(), mover));
                        }
                    }
                }
                Err(_) => prop_assert_eq!(&state, &before),
            }
        }
    }

    #[test]
    fn no_win_is_reported_before_it_exists(
        picks in proptest::collection::vec(0usize..7, 0..42),
    ) {
        let mut state = create_game(6, 7, "a", "b").unwrap();
        for column in picks {
            if state.apply_move(column).is_err() {
                continue;
            }
            let p1 = has_win(state.grid(), PlayerId::One);
            let p2 = has_win(state.grid(), PlayerId::Two);
            match state.outcome() {
                Outcome::WonBy(PlayerId::One) => prop_assert!(p1),
                Outcome::WonBy(PlayerId::Two) => prop_assert!(p2),
                _ => prop_assert!(!p1 && !p2),
            }
        }
    }
}
