//! Core value types and pure game logic.
//!
//! This module contains the pure functional core of the engine:
//! - Board values (`PlayerId`, `Cell`, `BoardSnapshot`)
//! - Validated board geometry and winning-line enumeration
//! - Immutable history of snapshots
//! - Win detection
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod board;
mod geometry;
mod history;
mod win;

pub use board::{BoardSnapshot, Cell, PlayerId};
pub use geometry::{BoardGeometry, GeometryError, GeometryViolation, MAX_CELLS};
pub use history::History;
pub use win::{detect_winner, WinResult};
