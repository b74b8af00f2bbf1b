//! Configuration errors
//!
//! These are detected once, at construction, and abort it. Rejected moves
//! during play are not errors; they are reported as `false`.

use thiserror::Error;

use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("bad center point for {kind:?}: index {index} does not name one of the 4 cells")]
    InvalidPivot { kind: PieceKind, index: usize },

    #[error("missing coords for {kind:?} {what}: expected 8 values (4 row/col pairs), found {found}")]
    WrongCoordCount {
        kind: PieceKind,
        what: &'static str,
        found: usize,
    },

    #[error("preview cell ({row}, {col}) of {kind:?} lies outside the 4x4 preview grid")]
    PreviewOutOfRange { kind: PieceKind, row: i16, col: i16 },

    #[error("spawn cell ({row}, {col}) of {kind:?} lies outside the grid")]
    SpawnOutOfBounds { kind: PieceKind, row: i16, col: i16 },

    #[error("grid of {rows}x{cols} is too small (needs more rows than the hidden buffer)")]
    GridTooSmall { rows: u16, cols: u16 },

    #[error("grid of {rows}x{cols} is too large (at most {max} per side)")]
    GridTooLarge { rows: u16, cols: u16, max: u16 },

    #[error("piece drops/sec too low")]
    NonPositiveDropRate,

    #[error("score goal too low")]
    NonPositiveScoreThreshold,

    #[error("acceleration rate too low: {0}")]
    NegativeAccelerationRate(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ConfigError::InvalidPivot {
            kind: PieceKind::T,
            index: 5,
        };
        assert!(err.to_string().contains("index 5"));

        let err = ConfigError::NegativeAccelerationRate(-3);
        assert!(err.to_string().contains("-3"));
    }
}
