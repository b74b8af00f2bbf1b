//! Active piece - the falling tetromino and its legal moves
//!
//! Cells are absolute grid coordinates. Every move builds a new cell array,
//! validates all four targets against the grid, and only then replaces the
//! current cells, so a rejected move leaves the piece untouched.

use crate::grid::Grid;
use crate::pieces::{try_rotate, try_shift, PieceCells, ShapeDef};
use crate::types::{Coord, PieceKind, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    shape: ShapeDef,
    cells: PieceCells,
}

impl ActivePiece {
    /// Create a piece at its spawn cells
    pub fn new(shape: ShapeDef) -> Self {
        Self {
            cells: shape.spawn,
            shape,
        }
    }

    /// Create a piece at arbitrary cells (e.g. to set up a position)
    pub fn with_cells(shape: ShapeDef, cells: PieceCells) -> Self {
        Self { shape, cells }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind
    }

    pub fn cells(&self) -> &PieceCells {
        &self.cells
    }

    pub fn color(&self) -> Rgb {
        self.shape.color
    }

    /// Cells on the 4x4 preview grid
    pub fn preview(&self) -> &PieceCells {
        &self.shape.preview
    }

    /// Smallest and largest row covered
    pub fn row_span(&self) -> (i16, i16) {
        self.cells.iter().fold((i16::MAX, i16::MIN), |(lo, hi), c| {
            (lo.min(c.row), hi.max(c.row))
        })
    }

    /// Check if all cells are in bounds and unoccupied
    pub fn is_valid(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&c| grid.is_free(c))
    }

    /// A target is legal if it is in bounds and either empty or one of the
    /// piece's own current cells.
    fn is_open(&self, grid: &Grid, target: Coord) -> bool {
        grid.in_bounds(target) && (!grid.is_occupied(target) || self.cells.contains(&target))
    }

    /// Move down one row. `false` means blocked and the piece should lock.
    pub fn fall(&mut self, grid: &Grid) -> bool {
        self.shift(grid, 1, 0)
    }

    pub fn move_left(&mut self, grid: &Grid) -> bool {
        self.shift(grid, 0, -1)
    }

    pub fn move_right(&mut self, grid: &Grid) -> bool {
        self.shift(grid, 0, 1)
    }

    fn shift(&mut self, grid: &Grid, drow: i16, dcol: i16) -> bool {
        match try_shift(&self.cells, drow, dcol, |c| self.is_open(grid, c)) {
            Some(cells) => {
                self.cells = cells;
                true
            }
            None => false,
        }
    }

    /// Rotate 90° about the pivot cell
    ///
    /// All-or-nothing. Always succeeds (without moving) for the O piece.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        match try_rotate(&self.cells, self.shape.pivot, |c| self.is_open(grid, c)) {
            Some(cells) => {
                self.cells = cells;
                true
            }
            None => false,
        }
    }

    /// Check if the piece is resting on the floor or a locked cell
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        self.cells
            .iter()
            .any(|c| !self.is_open(grid, c.offset(1, 0)))
    }
}
