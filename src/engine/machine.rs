//! Game engine that applies commands to immutable states.

use super::error::RejectReason;
use super::guard::{check_all, jump_guards, placement_guards, Jump, Placement};
use super::moves::{MoveDescription, MoveEntry};
use super::state::EngineState;
use crate::core::{detect_winner, BoardGeometry, BoardSnapshot, PlayerId, WinResult};
use tracing::{debug, instrument};

/// Stateless rules for one board geometry.
///
/// The engine owns no game state. Commands take the current
/// `EngineState` by reference and return a new one, so every previously
/// returned state stays valid and unchanged.
#[derive(Clone, Debug)]
pub struct GameEngine {
    geometry: BoardGeometry,
    lines: Vec<Vec<usize>>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(BoardGeometry::default())
    }
}

impl GameEngine {
    /// Create an engine for a validated geometry.
    pub fn new(geometry: BoardGeometry) -> Self {
        Self {
            lines: geometry.winning_lines(),
            geometry,
        }
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// State at the start of a game (pure)
    pub fn initial_state(&self) -> EngineState {
        EngineState::initial(self.geometry.cell_count())
    }

    /// Run win detection with this engine's lines (pure)
    pub fn detect_winner(&self, board: &BoardSnapshot) -> Option<WinResult> {
        detect_winner(board, &self.lines)
    }

    /// Place the mover's mark at `index`.
    ///
    /// Preconditions are checked in order and the first failure is
    /// returned: `OutOfBounds`, then `GameAlreadyWon`, then `CellOccupied`.
    /// On success any history after the current step is discarded before
    /// the new snapshot is appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use timetoe::{GameEngine, PlayerId, RejectReason, Status};
    ///
    /// let engine = GameEngine::default();
    /// let start = engine.initial_state();
    ///
    /// let next = engine.place_mark(&start, 4).unwrap();
    /// assert_eq!(next.status(), Status::InProgress(PlayerId::B));
    /// assert_eq!(engine.place_mark(&next, 4), Err(RejectReason::CellOccupied));
    /// ```
    #[instrument(skip(self, state), fields(step = state.current_step()))]
    pub fn place_mark(
        &self,
        state: &EngineState,
        index: usize,
    ) -> Result<EngineState, RejectReason> {
        let placement = Placement {
            state,
            index,
            cell_count: self.geometry.cell_count(),
        };
        check_all(&placement_guards(), &placement)
            .inspect_err(|reason| debug!(%reason, "placement rejected"))?;

        let mover = state.mover();
        let board = state
            .current_board()
            .with_mark(index, mover)
            .ok_or(RejectReason::OutOfBounds)?;
        let winner = self.detect_winner(&board);
        let history = state.history().truncated(state.current_step()).record(board);
        let next = EngineState::from_parts(history, state.current_step() + 1, winner);

        debug!(%mover, status = %next.status(), "mark placed");
        Ok(next)
    }

    /// Move the current step pointer to `step`.
    ///
    /// History is kept intact; only a later `place_mark` discards the
    /// steps after the pointer. The winner is recomputed from the target
    /// snapshot, so jumping back to a winning position reports the win
    /// again. Jumping to the current step returns an equal state.
    #[instrument(skip(self, state), fields(from = state.current_step()))]
    pub fn jump_to_step(
        &self,
        state: &EngineState,
        step: usize,
    ) -> Result<EngineState, RejectReason> {
        check_all(&jump_guards(), &Jump { state, step })
            .inspect_err(|reason| debug!(%reason, "jump rejected"))?;

        if step == state.current_step() {
            return Ok(state.clone());
        }

        let board = state
            .history()
            .get(step)
            .ok_or(RejectReason::StepOutOfRange)?;
        let winner = self.detect_winner(board);
        let next = EngineState::from_parts(state.history().clone(), step, winner);

        debug!(status = %next.status(), "jumped");
        Ok(next)
    }

    /// Describe the move that produced `step`.
    ///
    /// The player is derived from step parity: the mark at step `n` was
    /// placed by the player to move at step `n - 1`.
    pub fn move_description(
        &self,
        state: &EngineState,
        step: usize,
    ) -> Result<MoveDescription, RejectReason> {
        let snapshot = state
            .history()
            .get(step)
            .ok_or(RejectReason::StepOutOfRange)?;

        let Some(index) = snapshot.changed_index() else {
            return Ok(MoveDescription::GameStart);
        };

        Ok(MoveDescription::Placement {
            step,
            player: PlayerId::for_step(step - 1),
            row: self.geometry.row_of(index),
            column: self.geometry.column_of(index),
        })
    }

    /// Every recorded step with its description, in order.
    pub fn move_list(&self, state: &EngineState) -> Vec<MoveEntry> {
        (0..state.history().len())
            .filter_map(|step| {
                let description = self.move_description(state, step).ok()?;
                Some(MoveEntry {
                    step,
                    description,
                    is_current: step == state.current_step(),
                })
            })
            .collect()
    }
}
