//! Falling-block rules engine (workspace facade crate).
//!
//! The rules live in `crates/core`, the shared vocabulary in `crates/types`;
//! this package re-exports both as `tetris_rules::{core, types}` and ships a
//! headless driver binary.

pub use tetris_rules_core as core;
pub use tetris_rules_types as types;
