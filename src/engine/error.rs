//! Rejection reasons for engine commands.

use thiserror::Error;

/// Why a command was not applied.
///
/// Every variant is recoverable: a rejected command leaves the state it
/// was given exactly as it was.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Hash)]
pub enum RejectReason {
    #[error("Cell index is outside the board")]
    OutOfBounds,

    #[error("Game already has a winner")]
    GameAlreadyWon,

    #[error("Cell is already occupied")]
    CellOccupied,

    #[error("Step is outside the recorded history")]
    StepOutOfRange,
}
