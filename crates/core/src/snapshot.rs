use crate::grid::VISIBLE_TOP;
use crate::pieces::PieceCells;
use crate::piece::ActivePiece;
use crate::types::{Coord, GameStatus, PieceKind, Rgb};

/// A piece as a driver draws it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceView {
    pub kind: PieceKind,
    /// Absolute grid cells for the current piece, 4x4 preview cells for the next one
    pub cells: PieceCells,
    pub color: Rgb,
}

impl PieceView {
    pub fn current(piece: &ActivePiece) -> Self {
        Self {
            kind: piece.kind(),
            cells: *piece.cells(),
            color: piece.color(),
        }
    }

    pub fn preview(piece: &ActivePiece) -> Self {
        Self {
            kind: piece.kind(),
            cells: *piece.preview(),
            color: piece.color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major colors of locked cells, hidden rows included
    pub cells: Vec<Option<Rgb>>,
    pub current: Option<PieceView>,
    pub next: Option<PieceView>,
    pub score: u32,
    pub threshold: u32,
    pub status: GameStatus,
    pub pieces_generated: u32,
}

impl GameSnapshot {
    /// Locked color at `coord`, `None` if empty or out of bounds
    pub fn locked_color(&self, coord: Coord) -> Option<Rgb> {
        if coord.row < 0 || coord.col < 0 {
            return None;
        }
        let (row, col) = (coord.row as usize, coord.col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Rows below the hidden buffer, top to bottom
    pub fn visible_rows(&self) -> impl Iterator<Item = &[Option<Rgb>]> {
        self.cells.chunks(self.cols.max(1)).skip(VISIBLE_TOP)
    }

    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }
}
