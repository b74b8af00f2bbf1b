//! Grid setup shared by the integration tests

use tetris_rules::core::Grid;
use tetris_rules::types::{Coord, PieceKind};

/// Fill every column of `row` except those listed in `holes`
pub fn fill_row_except(grid: &mut Grid, row: i16, holes: &[i16], kind: PieceKind) {
    for col in 0..grid.cols() as i16 {
        if !holes.contains(&col) {
            grid.set(Coord::new(row, col), Some(kind));
        }
    }
}
