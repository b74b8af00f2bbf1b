//! Pieces module - tetromino shape catalog and pivot rotation
//!
//! Each kind is defined by four spawn cells in absolute grid coordinates
//! (inside the hidden buffer), the index of the cell it rotates about, four
//! cells on a 4x4 preview grid, and a display color. The O piece has no pivot:
//! rotating it is a no-op.
//!
//! Raw definitions are flat `row, col` pairs and are validated once when the
//! catalog is built.

use arrayvec::ArrayVec;

use crate::error::ConfigError;
use crate::types::{Coord, PieceKind, Rgb, PREVIEW_SIZE};

/// Four cells of a piece
pub type PieceCells = [Coord; 4];

/// How a kind rotates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pivot {
    /// Rotate about the cell at this index
    Cell(usize),
    /// Rotation leaves the piece unchanged
    Fixed,
}

/// Static definition of one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeDef {
    pub kind: PieceKind,
    pub pivot: Pivot,
    pub spawn: PieceCells,
    pub preview: PieceCells,
    pub color: Rgb,
}

impl ShapeDef {
    /// Build a definition from flat `row, col` pairs
    ///
    /// `center` is the pivot index, or `None` for a kind whose rotation is a
    /// no-op. Fails if the index does not name one of the 4 cells, if either
    /// list is not exactly 4 pairs, or if a preview cell falls outside the
    /// 4x4 preview grid.
    pub fn from_coords(
        kind: PieceKind,
        center: Option<usize>,
        spawn: &[i16],
        preview: &[i16],
        color: Rgb,
    ) -> Result<Self, ConfigError> {
        let pivot = match center {
            Some(index) if index > 3 => return Err(ConfigError::InvalidPivot { kind, index }),
            Some(index) => Pivot::Cell(index),
            None => Pivot::Fixed,
        };

        let spawn = coords_to_cells(kind, "spawn", spawn)?;
        let preview = coords_to_cells(kind, "preview", preview)?;

        let size = PREVIEW_SIZE as i16;
        if let Some(bad) = preview
            .iter()
            .find(|c| c.row < 0 || c.col < 0 || c.row >= size || c.col >= size)
        {
            return Err(ConfigError::PreviewOutOfRange {
                kind,
                row: bad.row,
                col: bad.col,
            });
        }

        Ok(Self {
            kind,
            pivot,
            spawn,
            preview,
            color,
        })
    }
}

/// Make 4 cells from 8 coordinates
fn coords_to_cells(
    kind: PieceKind,
    what: &'static str,
    coords: &[i16],
) -> Result<PieceCells, ConfigError> {
    if coords.len() != 8 {
        return Err(ConfigError::WrongCoordCount {
            kind,
            what,
            found: coords.len(),
        });
    }

    let mut cells = [Coord::new(0, 0); 4];
    for (cell, pair) in cells.iter_mut().zip(coords.chunks_exact(2)) {
        *cell = Coord::new(pair[0], pair[1]);
    }
    Ok(cells)
}

/// Raw definition: kind, pivot index, spawn pairs, preview pairs, color
type RawShape = (PieceKind, Option<usize>, [i16; 8], [i16; 8], Rgb);

/// Standard set. Spawn cells occupy rows 0..=3 and columns 3..=5.
const STANDARD_SHAPES: [RawShape; 7] = [
    (
        PieceKind::I,
        Some(1),
        [3, 4, 2, 4, 1, 4, 0, 4],
        [0, 2, 1, 2, 2, 2, 3, 2],
        Rgb::new(15, 141, 222),
    ),
    (
        PieceKind::O,
        None,
        [3, 4, 3, 5, 2, 4, 2, 5],
        [1, 1, 1, 2, 2, 1, 2, 2],
        Rgb::new(180, 128, 23),
    ),
    (
        PieceKind::T,
        Some(3),
        [3, 3, 3, 4, 3, 5, 2, 4],
        [2, 1, 2, 2, 2, 3, 1, 2],
        Rgb::new(117, 61, 152),
    ),
    (
        PieceKind::S,
        Some(1),
        [3, 5, 2, 5, 2, 4, 1, 4],
        [3, 2, 2, 2, 2, 1, 1, 1],
        Rgb::new(10, 134, 51),
    ),
    (
        PieceKind::Z,
        Some(1),
        [3, 4, 2, 4, 2, 5, 1, 5],
        [3, 1, 2, 1, 2, 2, 1, 2],
        Rgb::new(197, 7, 13),
    ),
    (
        PieceKind::J,
        Some(0),
        [3, 3, 3, 4, 3, 5, 2, 3],
        [2, 1, 2, 2, 2, 3, 1, 1],
        Rgb::new(17, 44, 182),
    ),
    (
        PieceKind::L,
        Some(2),
        [3, 3, 3, 4, 3, 5, 2, 5],
        [2, 1, 2, 2, 2, 3, 1, 3],
        Rgb::new(121, 47, 26),
    ),
];

/// Validated definitions for all seven kinds, indexed by [`PieceKind::index`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shapes: [ShapeDef; 7],
}

impl Catalog {
    /// Build and validate the standard catalog
    pub fn standard() -> Result<Self, ConfigError> {
        let mut shapes = Vec::with_capacity(STANDARD_SHAPES.len());
        for (kind, center, spawn, preview, color) in STANDARD_SHAPES {
            shapes.push(ShapeDef::from_coords(kind, center, &spawn, &preview, color)?);
        }
        Self::from_defs(shapes)
    }

    /// Assemble a catalog from one definition per kind, in any order
    ///
    /// Missing kinds are reported as a zero-length spawn list for that kind.
    pub fn from_defs(defs: impl IntoIterator<Item = ShapeDef>) -> Result<Self, ConfigError> {
        let mut slots: [Option<ShapeDef>; 7] = [None; 7];
        for def in defs {
            slots[def.kind.index()] = Some(def);
        }

        let mut shapes = ArrayVec::<ShapeDef, 7>::new();
        for (kind, slot) in PieceKind::ALL.into_iter().zip(slots) {
            shapes.push(slot.ok_or(missing_kind(kind))?);
        }
        let shapes = shapes
            .into_inner()
            .map_err(|partial| missing_kind(PieceKind::ALL[partial.len()]))?;
        Ok(Self { shapes })
    }

    pub fn get(&self, kind: PieceKind) -> &ShapeDef {
        &self.shapes[kind.index()]
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ShapeDef> {
        self.shapes.iter()
    }

    /// Color used for locked cells of `kind`
    pub fn color(&self, kind: PieceKind) -> Rgb {
        self.get(kind).color
    }
}

fn missing_kind(kind: PieceKind) -> ConfigError {
    ConfigError::WrongCoordCount {
        kind,
        what: "spawn",
        found: 0,
    }
}

/// Rotate `cell` 90° about `pivot`
#[inline]
pub fn rotate_about(cell: Coord, pivot: Coord) -> Coord {
    Coord::new(
        pivot.row + (cell.col - pivot.col),
        pivot.col - (cell.row - pivot.row),
    )
}

/// Try to rotate a piece about its pivot
///
/// Returns the rotated cells if every moved cell satisfies `is_free`, or
/// `None` if any one does not. The pivot cell is carried over unchanged.
/// For [`Pivot::Fixed`] the cells are returned as they are.
pub fn try_rotate(
    cells: &PieceCells,
    pivot: Pivot,
    is_free: impl Fn(Coord) -> bool,
) -> Option<PieceCells> {
    let Pivot::Cell(center) = pivot else {
        return Some(*cells);
    };

    let center_cell = cells[center];
    let mut rotated = *cells;

    for (i, cell) in rotated.iter_mut().enumerate() {
        if i == center {
            continue;
        }
        let next = rotate_about(*cell, center_cell);
        if !is_free(next) {
            return None;
        }
        *cell = next;
    }

    Some(rotated)
}

/// Shift all cells by the given deltas if every target satisfies `is_free`
pub fn try_shift(
    cells: &PieceCells,
    drow: i16,
    dcol: i16,
    is_free: impl Fn(Coord) -> bool,
) -> Option<PieceCells> {
    let shifted = cells.map(|c| c.offset(drow, dcol));
    shifted.iter().all(|&c| is_free(c)).then_some(shifted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let catalog = Catalog::standard().unwrap();
        for (i, def) in catalog.iter().enumerate() {
            assert_eq!(def.kind, PieceKind::ALL[i]);
        }
        assert_eq!(catalog.get(PieceKind::O).pivot, Pivot::Fixed);
        assert_eq!(catalog.get(PieceKind::L).pivot, Pivot::Cell(2));
    }

    #[test]
    fn test_rotate_about_quarter_turn() {
        let pivot = Coord::new(2, 4);
        assert_eq!(rotate_about(Coord::new(3, 4), pivot), Coord::new(2, 3));
        assert_eq!(rotate_about(Coord::new(1, 4), pivot), Coord::new(2, 5));
        assert_eq!(rotate_about(pivot, pivot), pivot);
    }

    #[test]
    fn test_from_defs_reports_missing_kind() {
        let catalog = Catalog::standard().unwrap();
        let defs: Vec<ShapeDef> = catalog
            .iter()
            .copied()
            .filter(|d| d.kind != PieceKind::Z)
            .collect();
        assert_eq!(
            Catalog::from_defs(defs),
            Err(ConfigError::WrongCoordCount {
                kind: PieceKind::Z,
                what: "spawn",
                found: 0,
            })
        );
    }

    #[test]
    fn test_from_defs_accepts_any_order() {
        let standard = Catalog::standard().unwrap();
        let reversed: Vec<ShapeDef> = standard.iter().rev().copied().collect();
        let catalog = Catalog::from_defs(reversed).unwrap();

        assert_eq!(catalog, standard);
        for kind in PieceKind::ALL {
            assert_eq!(catalog.get(kind).kind, kind);
        }
    }

    #[test]
    fn test_try_shift_is_all_or_nothing() {
        let cells = [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(1, 0),
            Coord::new(1, 1),
        ];
        assert_eq!(try_shift(&cells, 0, -1, |c| c.col >= 0), None);
        let moved = try_shift(&cells, 1, 0, |_| true).unwrap();
        assert_eq!(moved[3], Coord::new(2, 1));
    }
}
