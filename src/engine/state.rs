//! Engine state values and derived status.

use crate::core::{BoardSnapshot, History, PlayerId, WinResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a game at its current step.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Status {
    /// A player completed a line.
    Won(PlayerId),
    /// The board is full and nobody completed a line.
    Drawn,
    /// The game continues; the payload is the player to move.
    InProgress(PlayerId),
}

impl Status {
    /// Check if the game has ended at this step.
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won(player) => write!(f, "Winner: {player}"),
            Self::Drawn => write!(f, "Draw game"),
            Self::InProgress(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// Authoritative game state: history, a pointer into it, and the winner
/// at that pointer.
///
/// States are immutable values. Engine commands take a state by reference
/// and return a new one; nothing ever changes a state in place.
///
/// Invariants maintained by the engine:
/// - `current_step < history.len()`
/// - `winner` is exactly what win detection reports for the snapshot at
///   `current_step`
/// - the player to move is derived from `current_step`, never stored
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct EngineState {
    history: History,
    current_step: usize,
    winner: Option<WinResult>,
}

impl EngineState {
    /// Starting state: an empty board at step 0 with no winner.
    pub(crate) fn initial(cell_count: usize) -> Self {
        Self {
            history: History::new(cell_count),
            current_step: 0,
            winner: None,
        }
    }

    pub(crate) fn from_parts(
        history: History,
        current_step: usize,
        winner: Option<WinResult>,
    ) -> Self {
        debug_assert!(current_step < history.len());
        Self {
            history,
            current_step,
            winner,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn winner(&self) -> Option<&WinResult> {
        self.winner.as_ref()
    }

    /// Board at the current step.
    pub fn current_board(&self) -> &BoardSnapshot {
        &self.history.snapshots()[self.current_step]
    }

    /// Player who places the next mark.
    pub fn mover(&self) -> PlayerId {
        PlayerId::for_step(self.current_step)
    }

    /// Derived game status.
    ///
    /// `Won` if a line exists at the current step, `Drawn` once every cell
    /// has been filled without a line, otherwise `InProgress` with the
    /// player to move.
    pub fn status(&self) -> Status {
        if let Some(win) = &self.winner {
            Status::Won(win.player)
        } else if self.current_step == self.current_board().len() {
            Status::Drawn
        } else {
            Status::InProgress(self.mover())
        }
    }

    /// Check whether a cell belongs to the winning line, for highlighting.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winner.as_ref().is_some_and(|win| win.contains(index))
    }
}
