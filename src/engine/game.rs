//! Caller-owned game container.

use super::error::RejectReason;
use super::machine::GameEngine;
use super::moves::MoveEntry;
use super::state::{EngineState, Status};
use crate::core::BoardSnapshot;
use serde::{Deserialize, Serialize};

/// A command a view can send into a game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    /// Place the mover's mark at a cell index.
    PlaceMark(usize),
    /// Travel to a recorded step.
    JumpToStep(usize),
}

/// Single slot holding the current state of one game.
///
/// Commands are applied one at a time. An accepted command replaces the
/// held state wholesale; a rejected one leaves it untouched.
///
/// # Example
///
/// ```rust
/// use timetoe::{Command, Game, PlayerId, Status};
///
/// let mut game = Game::default();
/// for index in [0, 3, 1, 4, 2] {
///     game.place_mark(index).unwrap();
/// }
/// assert_eq!(game.status(), Status::Won(PlayerId::A));
///
/// game.dispatch(Command::JumpToStep(3)).unwrap();
/// assert_eq!(game.status(), Status::InProgress(PlayerId::B));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    engine: GameEngine,
    state: EngineState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameEngine::default())
    }
}

impl Game {
    /// Start a new game with the given engine.
    pub fn new(engine: GameEngine) -> Self {
        let state = engine.initial_state();
        Self { engine, state }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Apply a command and return the resulting state.
    pub fn dispatch(&mut self, command: Command) -> Result<&EngineState, RejectReason> {
        let next = match command {
            Command::PlaceMark(index) => self.engine.place_mark(&self.state, index)?,
            Command::JumpToStep(step) => self.engine.jump_to_step(&self.state, step)?,
        };
        self.state = next;
        Ok(&self.state)
    }

    pub fn place_mark(&mut self, index: usize) -> Result<&EngineState, RejectReason> {
        self.dispatch(Command::PlaceMark(index))
    }

    pub fn jump_to_step(&mut self, step: usize) -> Result<&EngineState, RejectReason> {
        self.dispatch(Command::JumpToStep(step))
    }

    pub fn status(&self) -> Status {
        self.state.status()
    }

    pub fn current_board(&self) -> &BoardSnapshot {
        self.state.current_board()
    }

    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.engine.move_list(&self.state)
    }

    /// Discard all history and start over on the same board.
    pub fn reset(&mut self) {
        self.state = self.engine.initial_state();
    }
}
