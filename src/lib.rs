//! Timetoe: a pure functional tic-tac-toe engine with time travel
//!
//! Timetoe follows the "pure core, imperative shell" philosophy. Board
//! values, win detection and history are pure functions over immutable
//! data. The engine applies commands to a state value and returns a new
//! one; the only mutable slot is the `Game` container the caller owns.
//!
//! # Core Concepts
//!
//! - **Snapshots**: Immutable boards, one per step of the game
//! - **History**: Every snapshot since the empty board, navigable at will
//! - **Derived turns**: The player to move is a function of the step, never stored
//! - **Geometry**: Board size and win length fixed at construction
//!
//! # Example
//!
//! ```rust
//! use timetoe::{Game, PlayerId, RejectReason, Status};
//!
//! let mut game = Game::default();
//! game.place_mark(4).unwrap();
//! game.place_mark(0).unwrap();
//!
//! assert_eq!(game.place_mark(4).unwrap_err(), RejectReason::CellOccupied);
//! assert_eq!(game.status(), Status::InProgress(PlayerId::A));
//!
//! // Go back to the first move and take a different branch.
//! game.jump_to_step(1).unwrap();
//! game.place_mark(8).unwrap();
//! assert_eq!(game.state().history().len(), 3);
//!
//! for entry in game.move_list() {
//!     println!("{}", entry.description);
//! }
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, GameBuilder};
pub use crate::core::{
    BoardGeometry, BoardSnapshot, Cell, GeometryError, GeometryViolation, History, PlayerId,
    WinResult, MAX_CELLS,
};
pub use crate::engine::{
    Command, EngineState, Game, GameEngine, MoveDescription, MoveEntry, RejectReason, Status,
};
