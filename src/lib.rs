//! TUI Connect Four (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `tui_connect4::{core, input, term, types}`. The game rules live in `core`;
//! everything else is presentation.

pub use tui_connect4_core as core;
pub use tui_connect4_input as input;
pub use tui_connect4_term as term;
pub use tui_connect4_types as types;
