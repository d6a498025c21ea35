//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the engine, the input layer and
//! the terminal view alike.
//!
//! # Grid Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_HEIGHT` | 6 | Rows in a standard game |
//! | `DEFAULT_WIDTH` | 7 | Columns in a standard game |
//! | `MIN_DIMENSION` | 4 | Smallest height or width that still allows a win on every axis |
//! | `MAX_DIMENSION` | 1024 | Largest height or width a game accepts |
//! | `WIN_LENGTH` | 4 | Pieces in a row needed to win |
//!
//! Rows are numbered from the top: row 0 is the top row and row `height - 1`
//! is the bottom row, where pieces land first.
//!
//! # Examples
//!
//! ```
//! use tui_connect4_types::{Direction, Outcome, PlayerId, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let p = PlayerId::One;
//! assert_eq!(p.other(), PlayerId::Two);
//! assert_eq!(p.number(), 1);
//!
//! assert!(Outcome::WonBy(p).is_terminal());
//! assert!(!Outcome::InProgress.is_terminal());
//!
//! assert_eq!(Direction::DownLeft.delta(), (1, -1));
//! assert_eq!((DEFAULT_HEIGHT, DEFAULT_WIDTH), (6, 7));
//! ```

use std::fmt;

/// Default grid height (6 rows)
pub const DEFAULT_HEIGHT: usize = 6;

/// Default grid width (7 columns)
pub const DEFAULT_WIDTH: usize = 7;

/// Minimum height and width of a grid
pub const MIN_DIMENSION: usize = 4;

/// Maximum height and width of a grid
///
/// Keeps the cell count well inside `usize` and the rendered frame inside the
/// terminal's `u16` coordinates.
pub const MAX_DIMENSION: usize = 1024;

/// Number of same-player pieces in a line that wins the game
pub const WIN_LENGTH: usize = 4;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both players in turn order
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Player number as shown to people (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Parse a player number
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_connect4_types::PlayerId;
    ///
    /// assert_eq!(PlayerId::from_number(2), Some(PlayerId::Two));
    /// assert_eq!(PlayerId::from_number(3), None);
    /// ```
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// Zero-based slot, handy for indexing per-player arrays
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PlayerId)`: Cell holding that player's piece
pub type Cell = Option<PlayerId>;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    WonBy(PlayerId),
    Tied,
}

impl Outcome {
    /// True once no further moves are accepted
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winner, if any
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Outcome::WonBy(p) => Some(*p),
            _ => None,
        }
    }
}

/// The four line directions scanned by the win check
///
/// Deltas are `(row, column)`. Rows grow downward, so every direction either
/// stays on its row or moves down; that covers each line exactly once per
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Horizontal, to the right
    Right,
    /// Vertical, downward
    Down,
    /// Diagonal `\`
    DownRight,
    /// Diagonal `/`
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Step as `(d_row, d_column)`
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }
}

/// Errors returned when a move is rejected
///
/// A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (grid has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is over")]
    GameOver,
}

impl MoveError {
    /// Whether the player can simply pick another column
    ///
    /// Only a full column is expected during normal play; the other variants
    /// mean the caller sent something it should have filtered out.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MoveError::ColumnFull { .. })
    }
}

/// Errors that can occur when creating a game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid {axis} must be at least {min}, got {value}")]
    DimensionTooSmall {
        axis: &'static str,
        value: usize,
        min: usize,
    },

    #[error("grid {axis} must be at most {max}, got {value}")]
    DimensionTooLarge {
        axis: &'static str,
        value: usize,
        max: usize,
    },
}

/// Player-facing actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the column cursor one column left
    CursorLeft,
    /// Move the column cursor one column right
    CursorRight,
    /// Drop into the column under the cursor
    Drop,
    /// Drop straight into the given zero-based column
    DropAt(usize),
    /// Throw the current game away and start a fresh one
    Restart,
}

impl GameAction {
    /// Stable lowercase name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::Drop => "drop",
            GameAction::DropAt(_) => "dropAt",
            GameAction::Restart => "restart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_dimensions() {
        assert_eq!(DEFAULT_HEIGHT, 6);
        assert_eq!(DEFAULT_WIDTH, 7);
        assert_eq!(MIN_DIMENSION, 4);
        assert_eq!(WIN_LENGTH, 4);
    }

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
    }

    #[test]
    fn test_player_number_roundtrip() {
        for p in PlayerId::ALL {
            assert_eq!(PlayerId::from_number(p.number()), Some(p));
        }
        assert_eq!(PlayerId::from_number(0), None);
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Tied.is_terminal());
        assert!(Outcome::WonBy(PlayerId::Two).is_terminal());
        assert_eq!(Outcome::WonBy(PlayerId::Two).winner(), Some(PlayerId::Two));
        assert_eq!(Outcome::Tied.winner(), None);
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn { column: 9, width: 7 }.to_string(),
            "column 9 is out of range (grid has 7 columns)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
        assert_eq!(MoveError::GameOver.to_string(), "the game is over");
    }

    #[test]
    fn only_column_full_is_recoverable() {
        assert!(MoveError::ColumnFull { column: 0 }.is_recoverable());
        assert!(!MoveError::GameOver.is_recoverable());
        assert!(!MoveError::InvalidColumn { column: 7, width: 7 }.is_recoverable());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::DimensionTooSmall {
            axis: "width",
            value: 3,
            min: MIN_DIMENSION,
        };
        assert_eq!(err.to_string(), "grid width must be at least 4, got 3");

        let err = ConfigError::DimensionTooLarge {
            axis: "height",
            value: 5000,
            max: MAX_DIMENSION,
        };
        assert_eq!(err.to_string(), "grid height must be at most 1024, got 5000");
    }
}
