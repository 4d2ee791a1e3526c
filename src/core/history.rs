//! Board history tracking.
//!
//! Provides immutable tracking of board snapshots over a game, following
//! functional programming principles: every operation returns a new
//! history and leaves the receiver untouched.

use super::board::BoardSnapshot;
use serde::Serialize;

/// Ordered sequence of board snapshots.
///
/// Index 0 is always the empty starting board, and step `n` is the board
/// after `n` accepted placements. A history is never empty.
///
/// # Example
///
/// ```rust
/// use timetoe::{BoardSnapshot, History, PlayerId};
///
/// let history = History::new(9);
/// let next = history.current().with_mark(4, PlayerId::A).unwrap();
/// let history = history.record(next);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.get(1).unwrap().changed_index(), Some(4));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct History {
    snapshots: Vec<BoardSnapshot>,
}

impl History {
    /// Create a history holding only the empty board.
    pub fn new(cell_count: usize) -> Self {
        Self {
            snapshots: vec![BoardSnapshot::empty(cell_count)],
        }
    }

    /// Record a snapshot, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the snapshot appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use timetoe::{History, PlayerId};
    ///
    /// let history = History::new(9);
    /// let snapshot = history.current().with_mark(0, PlayerId::A).unwrap();
    ///
    /// let new_history = history.record(snapshot);
    /// assert_eq!(new_history.len(), 2);
    /// assert_eq!(history.len(), 1); // Original unchanged
    /// ```
    pub fn record(&self, snapshot: BoardSnapshot) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.push(snapshot);
        Self { snapshots }
    }

    /// Keep steps `0..=step`, discarding everything after.
    ///
    /// A `step` at or past the last entry returns an identical history.
    pub fn truncated(&self, step: usize) -> Self {
        let keep = (step + 1).min(self.snapshots.len());
        Self {
            snapshots: self.snapshots[..keep].to_vec(),
        }
    }

    /// Snapshot at `step`, or `None` if the step was never reached.
    pub fn get(&self, step: usize) -> Option<&BoardSnapshot> {
        self.snapshots.get(step)
    }

    /// Most recent snapshot.
    pub fn current(&self) -> &BoardSnapshot {
        // Invariant: constructed with one snapshot and never shrunk below it.
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn snapshots(&self) -> &[BoardSnapshot] {
        &self.snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{Cell, PlayerId};

    fn history_of(indices: &[usize]) -> History {
        indices
            .iter()
            .enumerate()
            .fold(History::new(9), |history, (step, &index)| {
                let next = history
                    .current()
                    .with_mark(index, PlayerId::for_step(step))
                    .unwrap();
                history.record(next)
            })
    }

    #[test]
    fn new_history_holds_empty_board() {
        let history = History::new(9);

        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
        assert!(history.current().is_empty());
        assert_eq!(history.current().changed_index(), None);
    }

    #[test]
    fn record_is_immutable() {
        let history = History::new(9);
        let snapshot = history.current().with_mark(3, PlayerId::A).unwrap();

        let new_history = history.record(snapshot);

        assert_eq!(history.len(), 1);
        assert_eq!(new_history.len(), 2);
    }

    #[test]
    fn record_preserves_order() {
        let history = history_of(&[4, 0, 8]);

        let changed: Vec<_> = history
            .snapshots()
            .iter()
            .map(BoardSnapshot::changed_index)
            .collect();
        assert_eq!(changed, vec![None, Some(4), Some(0), Some(8)]);
    }

    #[test]
    fn each_step_fills_a_previously_empty_cell() {
        let history = history_of(&[4, 0, 8, 2]);

        for step in 1..history.len() {
            let index = history.get(step).unwrap().changed_index().unwrap();
            assert_eq!(history.get(step - 1).unwrap().cell(index), Some(Cell::Empty));
        }
    }

    #[test]
    fn truncated_discards_future() {
        let history = history_of(&[4, 0, 8, 2, 6]);

        let truncated = history.truncated(2);

        assert_eq!(truncated.len(), 3);
        assert_eq!(truncated.current(), history.get(2).unwrap());
        assert_eq!(history.len(), 6);
    }

    #[test]
    fn truncated_past_end_is_identity() {
        let history = history_of(&[4, 0]);
        assert_eq!(history.truncated(10), history);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let history = history_of(&[4]);
        assert!(history.get(1).is_some());
        assert!(history.get(2).is_none());
    }

    #[test]
    fn history_serializes_snapshots() {
        let history = history_of(&[1, 2]);
        let json = serde_json::to_value(&history).unwrap();

        assert_eq!(json["snapshots"].as_array().unwrap().len(), 3);
    }
}
