//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the rules of the falling-block game: the grid,
//! the piece catalog, movement and rotation legality, line clearing, scoring
//! and win/loss determination. It has **no dependencies** on rendering, input
//! devices, timers or I/O, making it:
//!
//! - **Deterministic**: the piece source is injected, so a seed replays a game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Synchronous**: each command returns immediately with a definitive result
//!
//! # Module Structure
//!
//! - [`grid`]: occupancy matrix with a hidden spawn buffer, row detection and clearing
//! - [`pieces`]: the seven shape definitions and the pivot rotation transform
//! - [`piece`]: the falling piece and its all-or-nothing moves
//! - [`rng`]: seedable uniform piece selection
//! - [`scoring`]: points per cleared rows and the win threshold
//! - [`engine`]: spawn, lock, clear, score and status orchestration
//! - [`config`] / [`error`]: construction parameters and their validation
//! - [`pacing`]: gravity interval formula for drivers
//!
//! # Game Rules
//!
//! - Pieces are drawn uniformly at random from the 7 kinds
//! - Rotation turns the piece 90° about one of its cells; there are no wall kicks
//! - A piece locks when a fall is blocked
//! - Clearing `k` rows in one lock scores `25k + 10(k-1)`
//! - Reaching the score threshold wins; a spawn into an occupied spawn row loses
//!
//! # Example
//!
//! ```
//! use tetris_rules_core::{Engine, GameConfig};
//! use tetris_rules_types::{GameAction, GameStatus};
//!
//! let mut game = Engine::with_seed(GameConfig::default(), 12345).unwrap();
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! while game.apply_action(GameAction::Tick) {}
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.pieces_generated(), 2);
//! ```
//!
//! # Timing
//!
//! The engine keeps no clock. A driver calls [`Engine::try_fall`] (or applies
//! `GameAction::Tick`) on its own schedule, typically using
//! [`DropPacing::interval_ms`] with [`Engine::pieces_generated`].

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pacing;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetris_rules_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use engine::{Engine, LockEvent};
pub use error::ConfigError;
pub use grid::Grid;
pub use pacing::DropPacing;
pub use piece::ActivePiece;
pub use pieces::{try_rotate, Catalog, PieceCells, Pivot, ShapeDef};
pub use rng::{PieceSource, SequenceSource, SimpleRng};
pub use scoring::line_clear_score;
pub use snapshot::{GameSnapshot, PieceView};
