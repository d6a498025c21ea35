//! Win detection - exhaustive four-in-a-row scan
//!
//! Every cell is tried as the anchor of a line in each of the four
//! [`Direction`]s. Candidates that leave the grid are skipped. This checks
//! 4 * height * width lines per call, many of them redundantly, which is
//! plenty fast for a grid this size and runs once per move.

use crate::grid::Grid;
use crate::types::{Direction, PlayerId, WIN_LENGTH};

/// Coordinates `(row, column)` of a winning line, anchor first
pub type Line = [(usize, usize); WIN_LENGTH];

/// Check whether `player` has four in a row anywhere on `grid`
pub fn has_win(grid: &Grid, player: PlayerId) -> bool {
    winning_line(grid, player).is_some()
}

/// First winning line for `player`, scanning anchors top-left to bottom-right
pub fn winning_line(grid: &Grid, player: PlayerId) -> Option<Line> {
    for row in 0..grid.height() {
        for column in 0..grid.width() {
            for direction in Direction::ALL {
                if let Some(line) = line_from(grid, row, column, direction, player) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// The line anchored at (row, column) if all of it is on the grid and owned by
/// `player`
fn line_from(
    grid: &Grid,
    row: usize,
    column: usize,
    direction: Direction,
    player: PlayerId,
) -> Option<Line> {
    let (dy, dx) = direction.delta();
    let mut line = [(0, 0); WIN_LENGTH];

    for (step, slot) in line.iter_mut().enumerate() {
        let y = row as isize + dy * step as isize;
        let x = column as isize + dx * step as isize;
        match grid.get_signed(y, x) {
            Some(Some(owner)) if owner == player => *slot = (y as usize, x as usize),
            _ => return None,
        }
    }

    Some(line)
}
