//! Grid module - the playing field
//!
//! A `height` x `width` grid where each cell is empty or holds a player's piece.
//! Uses a flat row-major vector so one allocation covers any dimensions.
//! Coordinates: (row, column) where row 0 is the top and row `height - 1` the
//! bottom; column 0 is the leftmost.

use crate::types::{Cell, PlayerId, MAX_DIMENSION};

/// The playing grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Flat array of cells, row-major order (row * width + column)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Dimensions are clamped to [`MAX_DIMENSION`] but otherwise not checked;
    /// [`crate::GameConfig::validate`] is the gate for games.
    pub fn new(height: usize, width: usize) -> Self {
        let height = height.min(MAX_DIMENSION);
        let width = width.min(MAX_DIMENSION);
        Self {
            height,
            width,
            cells: vec![None; height * width],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.height || column >= self.width {
            return None;
        }
        Some(row * self.width + column)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get cell at (row, column)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    /// Signed lookup used by line scans; anything off the grid is `None`
    pub(crate) fn get_signed(&self, row: isize, column: isize) -> Option<Cell> {
        if row < 0 || column < 0 {
            return None;
        }
        self.get(row as usize, column as usize)
    }

    /// One row of cells, left to right
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row where a piece dropped into `column` would settle.
    ///
    /// Scans from the bottom row upward and returns the first empty row, or
    /// `None` when the column is full. Columns outside the grid also answer
    /// `None`; the engine rejects those before asking.
    pub fn lowest_empty_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_none())
    }

    /// Check if a column has no room left
    pub fn is_column_full(&self, column: usize) -> bool {
        self.lowest_empty_row(column).is_none()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Drop a piece into `column` and return the row it landed in.
    ///
    /// Only the engine places pieces, so gravity holds for every grid a caller
    /// can observe.
    pub(crate) fn drop_piece(&mut self, column: usize, player: PlayerId) -> Option<usize> {
        let row = self.lowest_empty_row(column)?;
        self.cells[row * self.width + column] = Some(player);
        Some(row)
    }

    /// Build a grid from rows of player numbers (0 = empty), for tests
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(rows.iter().all(|r| r.len() == width));

        let cells = rows
            .iter()
            .flat_map(|r| r.iter().map(|&n| PlayerId::from_number(n)))
            .collect();
        Self {
            height,
            width,
            cells,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_HEIGHT, crate::types::DEFAULT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(6, 7);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 6), Some(6));
        assert_eq!(grid.index(1, 0), Some(7));
        assert_eq!(grid.index(5, 6), Some(41));
        assert_eq!(grid.index(6, 0), None);
        assert_eq!(grid.index(0, 7), None);
    }

    #[test]
    fn test_signed_lookup_off_grid() {
        let grid = Grid::new(4, 4);
        assert_eq!(grid.get_signed(-1, 0), None);
        assert_eq!(grid.get_signed(0, -1), None);
        assert_eq!(grid.get_signed(4, 0), None);
        assert_eq!(grid.get_signed(3, 3), Some(None));
    }

    #[test]
    fn test_drop_piece_stacks_bottom_up() {
        let mut grid = Grid::new(6, 7);
        assert_eq!(grid.drop_piece(3, PlayerId::One), Some(5));
        assert_eq!(grid.drop_piece(3, PlayerId::Two), Some(4));
        assert_eq!(grid.get(5, 3), Some(Some(PlayerId::One)));
        assert_eq!(grid.get(4, 3), Some(Some(PlayerId::Two)));
        assert_eq!(grid.occupied(), 2);
        assert_eq!(grid.lowest_empty_row(3), Some(3));
    }

    #[test]
    fn test_full_column() {
        let mut grid = Grid::new(4, 4);
        for _ in 0..4 {
            assert!(grid.drop_piece(0, PlayerId::One).is_some());
        }
        assert!(grid.is_column_full(0));
        assert_eq!(grid.lowest_empty_row(0), None);
        assert_eq!(grid.drop_piece(0, PlayerId::Two), None);
    }

    #[test]
    fn test_out_of_range_column_has_no_spot() {
        let grid = Grid::new(6, 7);
        assert_eq!(grid.lowest_empty_row(7), None);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 2, 0, 0],
            &[1, 1, 0, 0],
        ]);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.row(3), Some(&[Some(PlayerId::One), Some(PlayerId::One), None, None][..]));
        assert_eq!(grid.occupied(), 3);
        assert_eq!(grid.lowest_empty_row(1), Some(1));
    }

    #[test]
    fn test_is_full() {
        let mut grid = Grid::new(4, 4);
        assert!(!grid.is_full());
        for column in 0..4 {
            for _ in 0..4 {
                grid.drop_piece(column, PlayerId::Two);
            }
        }
        assert!(grid.is_full());
        assert_eq!(grid.occupied(), 16);
    }

    #[test]
    fn test_oversized_dimensions_are_clamped() {
        let grid = Grid::new(usize::MAX / 2, 4);
        assert_eq!(grid.height(), MAX_DIMENSION);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.cells().len(), MAX_DIMENSION * 4);
    }
}
