use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_connect4::core::{has_win, GameState};
use tui_connect4::types::PlayerId;

/// A full 6x7 game that ends in a tie, so every move runs the whole win scan.
const TIE_GAME: [usize; 42] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5,
    5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
];

fn bench_has_win_full_grid(c: &mut Criterion) {
    let mut state = GameState::default();
    for column in TIE_GAME {
        state.apply_move(column).unwrap();
    }

    c.bench_function("has_win_full_grid_no_winner", |b| {
        b.iter(|| has_win(black_box(state.grid()), black_box(PlayerId::One)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play_tie_game_42_moves", |b| {
        b.iter(|| {
            let mut state = GameState::default();
            for column in TIE_GAME {
                state.apply_move(black_box(column)).unwrap();
            }
            state
        })
    });
}

fn bench_lowest_empty_row(c: &mut Criterion) {
    let mut state = GameState::default();
    for column in [3, 3, 3, 3, 3] {
        state.apply_move(column).unwrap();
    }

    c.bench_function("lowest_empty_row", |b| {
        b.iter(|| state.grid().lowest_empty_row(black_box(3)))
    });
}

criterion_group!(
    benches,
    bench_has_win_full_grid,
    bench_full_game,
    bench_lowest_empty_row
);
criterion_main!(benches);
