//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and keeps the
//! column cursor that turns those actions into a column index for the engine.

pub mod cursor;
pub mod map;

pub use tui_connect4_types as types;

pub use cursor::ColumnCursor;
pub use map::{handle_key_event, should_quit};
