//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! simple framebuffer that is then flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep the view pure so layout and hit-testing are unit-testable
//! - Control the cell aspect ratio (3 chars wide per grid cell by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_connect4_core as core;
pub use tui_connect4_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{player_color, rejection_message, GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
