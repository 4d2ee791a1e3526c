//! Ordered precondition guards for engine commands.
//!
//! Guards are pure predicates paired with the reason reported when they
//! fail. A command evaluates its guards in order and stops at the first
//! failure, so the reported reason is deterministic.

use super::error::RejectReason;
use super::state::EngineState;

/// Pure predicate that decides whether a command may proceed.
pub(crate) struct Guard<C> {
    reason: RejectReason,
    predicate: fn(&C) -> bool,
}

impl<C> Guard<C> {
    pub(crate) fn new(reason: RejectReason, predicate: fn(&C) -> bool) -> Self {
        Guard { reason, predicate }
    }

    /// Check the guard against a command context.
    pub(crate) fn check(&self, context: &C) -> Result<(), RejectReason> {
        if (self.predicate)(context) {
            Ok(())
        } else {
            Err(self.reason)
        }
    }
}

/// Run guards in order, returning the first failure.
pub(crate) fn check_all<C>(guards: &[Guard<C>], context: &C) -> Result<(), RejectReason> {
    guards.iter().try_for_each(|guard| guard.check(context))
}

/// Context for a `place_mark` command.
pub(crate) struct Placement<'a> {
    pub state: &'a EngineState,
    pub index: usize,
    pub cell_count: usize,
}

/// Context for a `jump_to_step` command.
pub(crate) struct Jump<'a> {
    pub state: &'a EngineState,
    pub step: usize,
}

pub(crate) fn placement_guards<'a>() -> [Guard<Placement<'a>>; 3] {
    [
        Guard::new(RejectReason::OutOfBounds, |p: &Placement<'a>| {
            p.index < p.cell_count
        }),
        Guard::new(RejectReason::GameAlreadyWon, |p: &Placement<'a>| {
            p.state.winner().is_none()
        }),
        Guard::new(RejectReason::CellOccupied, |p: &Placement<'a>| {
            p.state
                .current_board()
                .cell(p.index)
                .is_some_and(|cell| cell.is_empty())
        }),
    ]
}

pub(crate) fn jump_guards<'a>() -> [Guard<Jump<'a>>; 1] {
    [Guard::new(RejectReason::StepOutOfRange, |j: &Jump<'a>| {
        j.step < j.state.history().len()
    })]
}
