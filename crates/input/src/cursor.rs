//! Column cursor: the player's current column selection.

use crate::types::GameAction;

/// Tracks which column the player is pointing at.
///
/// The cursor itself is always clamped to the grid. `DropAt` targets outside
/// the grid are passed through untouched so the engine can reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnCursor {
    column: usize,
    width: usize,
}

impl ColumnCursor {
    /// Start in the centre column.
    pub fn new(width: usize) -> Self {
        Self {
            column: width / 2,
            width,
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn move_left(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.column + 1 < self.width {
            self.column += 1;
        }
    }

    /// Point at `column` if it is on the grid.
    pub fn set(&mut self, column: usize) {
        if column < self.width {
            self.column = column;
        }
    }

    /// Apply an action and return the column to drop into, if any.
    ///
    /// Cursor moves and restarts never produce a drop.
    pub fn resolve(&mut self, action: GameAction) -> Option<usize> {
        match action {
            GameAction::CursorLeft => {
                self.move_left();
                None
            }
            GameAction::CursorRight => {
                self.move_right();
                None
            }
            GameAction::Drop => Some(self.column),
            GameAction::DropAt(column) => {
                self.set(column);
                Some(column)
            }
            GameAction::Restart => None,
        }
    }
}
