//! Game engine: commands, state values and the game container.
//!
//! This module is the thin shell around the pure core. It applies the two
//! commands a view can issue, validates them with ordered guards, and
//! derives the read-only views a view needs to paint itself.
//!
//! # Key Concepts
//!
//! - **EngineState**: Immutable history, step pointer and winner
//! - **GameEngine**: Stateless command logic for one board geometry
//! - **Game**: Caller-owned slot that applies commands one at a time
//! - **RejectReason**: Closed set of reasons a command was refused

mod error;
mod game;
mod guard;
mod machine;
mod moves;
mod state;

pub use error::RejectReason;
pub use game::{Command, Game};
pub use machine::GameEngine;
pub use moves::{MoveDescription, MoveEntry};
pub use state::{EngineState, Status};
