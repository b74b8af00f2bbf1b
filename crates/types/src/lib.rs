//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the rules engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, a driver loop, tests).
//!
//! # Grid Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Rows**: 24, of which the top 4 are a hidden spawn buffer
//! - **Columns**: 10
//! - **Spawn-check row**: 3 (the last hidden row, just above the visible area)
//!
//! Coordinates are `(row, col)`: row grows downward, col grows rightward.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_ROWS` | 24 | Total rows including the hidden buffer |
//! | `DEFAULT_COLS` | 10 | Columns |
//! | `HIDDEN_ROWS` | 4 | Rows above the visible area |
//! | `DEFAULT_SCORE_THRESHOLD` | 500 | Score needed to win |
//! | `DEFAULT_DROPS_PER_SECOND` | 1 | Base gravity consumed by the driver |
//! | `DEFAULT_ACCELERATION_RATE` | 0 | Pieces per speed step (0 = constant speed) |
//!
//! # Examples
//!
//! ```
//! use tetris_rules_types::{Coord, GameAction, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! let c = Coord::new(3, 4);
//! assert_eq!(c.offset(1, -1), Coord::new(4, 3));
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! assert_eq!((DEFAULT_ROWS, DEFAULT_COLS), (24, 10));
//! ```

/// Total grid rows, hidden buffer included
pub const DEFAULT_ROWS: u16 = 24;

/// Grid columns
pub const DEFAULT_COLS: u16 = 10;

/// Rows above the visible play area used as spawn space
pub const HIDDEN_ROWS: u16 = 4;

/// Largest accepted row or column count
///
/// Coordinates are `i16`, and a rotation can land a few cells past an edge
/// before it is rejected, so both sides stay well below `i16::MAX`.
pub const MAX_GRID_SIDE: u16 = 4096;

/// Score needed to win
pub const DEFAULT_SCORE_THRESHOLD: u32 = 500;

/// Base drop rate (rows per second) used by drivers
pub const DEFAULT_DROPS_PER_SECOND: u32 = 1;

/// Pieces between drop-rate increments (0 disables acceleration)
pub const DEFAULT_ACCELERATION_RATE: i32 = 0;

/// Points for each cleared row
pub const POINTS_PER_ROW: u32 = 25;

/// Extra points for each row cleared beyond the first in a single lock
pub const MULTI_ROW_BONUS: u32 = 10;

/// Side length of the square preview grid for the next piece
pub const PREVIEW_SIZE: u16 = 4;

/// The seven tetromino piece kinds
///
/// - **I**: straight bar
/// - **O**: 2x2 square (rotation is a no-op)
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position of this kind in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// An immutable grid position
///
/// Row grows downward, col grows rightward. Fields are signed so that a
/// candidate position one step past an edge is representable and can be
/// rejected by a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i16,
    pub col: i16,
}

impl Coord {
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// Return a new coordinate shifted by the given deltas
    pub const fn offset(self, drow: i16, dcol: i16) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }
}

impl From<(i16, i16)> for Coord {
    fn from((row, col): (i16, i16)) -> Self {
        Self { row, col }
    }
}

/// Session status
///
/// `Won` and `Lost` are terminal: once reached, the engine rejects every
/// command and only answers queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Commands a driver can issue to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Player-requested single-row fall
    SoftDrop,
    /// Rotate piece 90° about its pivot
    Rotate,
    /// Timer-driven single-row fall
    Tick,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_rules_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::MoveRight));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "tick" => Some(GameAction::Tick),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Tick => "tick",
        }
    }
}

/// 24-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell holding a locked cell of that piece kind
pub type Cell = Option<PieceKind>;
