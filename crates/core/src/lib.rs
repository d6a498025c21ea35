//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Connect Four rules and the game state machine.
//! It has **zero dependencies** on UI, terminals, or I/O (it only emits `log`
//! records), so it can be driven from a terminal, a test, or a benchmark alike.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size grid with gravity-aware column queries
//! - [`win`]: the exhaustive four-in-a-row scan, as free functions
//! - [`player`]: player identity plus display label
//! - [`config`]: game dimensions and labels, with validation
//! - [`game_state`]: the engine itself, the only place a grid is mutated
//!
//! # Game Rules
//!
//! - Player 1 moves first and turns alternate strictly.
//! - A piece dropped into a column settles in that column's lowest empty row.
//! - Four of one player's pieces in a horizontal, vertical or diagonal line
//!   wins immediately. A full grid without a win is a tie.
//! - Once won or tied, every further move is rejected.
//!
//! # Example
//!
//! ```
//! use tui_connect4_core::create_game;
//! use tui_connect4_core::types::{Outcome, PlayerId};
//!
//! let mut game = create_game(6, 7, "yellow", "blue").unwrap();
//! for _ in 0..3 {
//!     game.apply_move(0).unwrap(); // player 1
//!     game.apply_move(1).unwrap(); // player 2
//! }
//! let state = game.apply_move(0).unwrap();
//! assert_eq!(state.outcome(), Outcome::WonBy(PlayerId::One));
//! ```

pub mod config;
pub mod game_state;
pub mod grid;
pub mod player;
pub mod win;

pub use tui_connect4_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::{create_game, GameState, Placement};
pub use grid::Grid;
pub use player::Player;
pub use win::{has_win, winning_line, Line};
