//! Grid module - manages the occupancy matrix
//!
//! The grid is `rows x cols` cells, where the top [`HIDDEN_ROWS`] rows are a
//! hidden spawn buffer above the visible play area. Each cell is either empty
//! or holds the kind of the locked piece that filled it.
//! Uses a flat row-major `Vec` sized once at construction.
//! Coordinates: (row, col) where row grows downward and col grows rightward.
//!
//! Only locked cells are stored here; the falling piece is never written
//! until it locks.

use arrayvec::ArrayVec;

use crate::types::{Cell, Coord, PieceKind, HIDDEN_ROWS};

/// Row inspected before each spawn: the last hidden row
pub const SPAWN_CHECK_ROW: usize = HIDDEN_ROWS as usize - 1;

/// First visible row
pub const VISIBLE_TOP: usize = HIDDEN_ROWS as usize;

/// The game grid using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// Dimensions are validated by [`crate::GameConfig::validate`]; `rows`
    /// must exceed the hidden buffer.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some(coord.row as usize * self.cols + coord.col as usize)
    }

    /// Total rows, hidden buffer included
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Rows below the hidden buffer
    pub fn visible_rows(&self) -> usize {
        self.rows - VISIBLE_TOP
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// Get cell at `coord`
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Set cell at `coord`
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `coord` holds a locked cell
    ///
    /// `coord` must be in bounds; querying outside the grid is a caller bug
    /// and trips a debug assertion (release builds answer `false`).
    pub fn is_occupied(&self, coord: Coord) -> bool {
        debug_assert!(
            self.in_bounds(coord),
            "occupancy query out of bounds: {:?}",
            coord
        );
        matches!(self.get(coord), Some(Some(_)))
    }

    /// In bounds and empty
    pub fn is_free(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(None))
    }

    /// Mark the given cells occupied by `kind`
    ///
    /// No validation beyond skipping out-of-bounds cells: legality is checked
    /// by the piece before it is allowed to lock.
    pub fn commit(&mut self, cells: &[Coord], kind: PieceKind) {
        for &coord in cells {
            self.set(coord, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Full rows within `[min_row, max_row]`, ascending
    ///
    /// Only rows a single lock can touch are scanned, so at most 4 are
    /// returned. Hidden-buffer rows are never reported.
    pub fn full_rows_in_range(&self, min_row: usize, max_row: usize) -> ArrayVec<usize, 4> {
        let mut full = ArrayVec::new();
        let start = min_row.max(VISIBLE_TOP);
        let end = max_row.min(self.rows.saturating_sub(1));

        for row in start..=end {
            if self.is_row_full(row) && full.try_push(row).is_err() {
                break;
            }
        }
        full
    }

    /// Remove each listed row, shifting the visible rows above it down by one
    ///
    /// `rows` must be ascending (as returned by [`Grid::full_rows_in_range`]).
    /// Removing in that order keeps the captured indices valid: a removal only
    /// moves rows above it, and every later index lies below.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        for &row in rows {
            self.clear_row(row);
        }
    }

    /// Clear a single visible row and shift the visible rows above it down
    fn clear_row(&mut self, row: usize) {
        if row < VISIBLE_TOP || row >= self.rows {
            return;
        }

        let width = self.cols;

        for r in (VISIBLE_TOP + 1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, r * width);
        }

        let top_start = VISIBLE_TOP * width;
        for cell in &mut self.cells[top_start..top_start + width] {
            *cell = None;
        }
    }

    /// Whether the next spawn must fail: any cell of the last hidden row is occupied
    pub fn is_spawn_blocked(&self) -> bool {
        self.row(SPAWN_CHECK_ROW).iter().any(|cell| cell.is_some())
    }

    /// Borrow one row of cells
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_COLS, DEFAULT_ROWS};

    fn grid() -> Grid {
        Grid::new(DEFAULT_ROWS as usize, DEFAULT_COLS as usize)
    }

    fn fill_row(g: &mut Grid, row: i16, kind: PieceKind) {
        for col in 0..g.cols() as i16 {
            g.set(Coord::new(row, col), Some(kind));
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        let g = grid();
        assert_eq!(g.index(Coord::new(0, 0)), Some(0));
        assert_eq!(g.index(Coord::new(0, 9)), Some(9));
        assert_eq!(g.index(Coord::new(1, 0)), Some(10));
        assert_eq!(g.index(Coord::new(23, 9)), Some(239));
        assert_eq!(g.index(Coord::new(0, -1)), None);
        assert_eq!(g.index(Coord::new(0, 10)), None);
        assert_eq!(g.index(Coord::new(24, 0)), None);
    }

    #[test]
    fn test_clear_row_shifts_only_visible_rows() {
        let mut g = grid();
        g.set(Coord::new(2, 0), Some(PieceKind::T));
        g.set(Coord::new(4, 1), Some(PieceKind::S));
        fill_row(&mut g, 23, PieceKind::I);

        g.clear_row(23);

        // Hidden cell stays put; the top visible cell moved down one row.
        assert_eq!(g.get(Coord::new(2, 0)), Some(Some(PieceKind::T)));
        assert_eq!(g.get(Coord::new(4, 1)), Some(None));
        assert_eq!(g.get(Coord::new(5, 1)), Some(Some(PieceKind::S)));
        assert!(g.row(VISIBLE_TOP).iter().all(Option::is_none));
        assert!(!g.is_row_full(23));
    }

    #[test]
    fn test_hidden_rows_never_reported_full() {
        let mut g = grid();
        fill_row(&mut g, 1, PieceKind::O);
        assert!(g.is_row_full(1));
        assert!(g.full_rows_in_range(0, 3).is_empty());
    }

    #[test]
    fn test_clear_row_ignores_hidden_index() {
        let mut g = grid();
        fill_row(&mut g, 2, PieceKind::O);
        let before = g.clone();
        g.clear_row(2);
        assert_eq!(g, before);
    }
}
