//! Human-readable descriptions of history entries.

use crate::core::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened at a given step, for a navigable move list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MoveDescription {
    /// Step 0, the empty board.
    GameStart,
    /// A mark placed by `player` at a 1-based `row` and `column`.
    Placement {
        step: usize,
        player: PlayerId,
        row: usize,
        column: usize,
    },
}

impl fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameStart => write!(f, "Go to game start"),
            Self::Placement {
                step,
                player,
                row,
                column,
            } => write!(
                f,
                "Go to move #{step}: {player} at row {row}, column {column}"
            ),
        }
    }
}

/// One row of the move list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct MoveEntry {
    pub step: usize,
    pub description: MoveDescription,
    /// Whether the game is currently showing this step.
    pub is_current: bool,
}
