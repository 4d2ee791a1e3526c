//! Win detection over a single board snapshot.

use super::board::{BoardSnapshot, PlayerId};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A completed line of identical marks.
///
/// `line` lists the board indices of the line in enumeration order, so a
/// view can highlight exactly those cells.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct WinResult {
    pub player: PlayerId,
    pub line: Vec<usize>,
}

impl WinResult {
    /// Check whether a cell is part of the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.line.contains(&index)
    }
}

/// Find the first line held entirely by one player.
///
/// Pure and total. Lines are checked in the order given, and the first
/// match wins, so results are deterministic even for boards that could
/// never arise in legal play. Indices outside the board count as empty.
///
/// # Example
///
/// ```rust
/// use timetoe::core::detect_winner;
/// use timetoe::{BoardGeometry, BoardSnapshot, PlayerId};
///
/// let lines = BoardGeometry::default().winning_lines();
/// let board = BoardSnapshot::empty(9)
///     .with_mark(2, PlayerId::B).unwrap()
///     .with_mark(4, PlayerId::B).unwrap()
///     .with_mark(6, PlayerId::B).unwrap();
///
/// let win = detect_winner(&board, &lines).unwrap();
/// assert_eq!(win.player, PlayerId::B);
/// assert_eq!(win.line, vec![2, 4, 6]);
/// ```
pub fn detect_winner(board: &BoardSnapshot, lines: &[Vec<usize>]) -> Option<WinResult> {
    lines.iter().find_map(|line| {
        let (first, rest) = line.split_first()?;
        let player = board.cell(*first)?.player()?;
        let complete = rest
            .iter()
            .all(|&index| board.cell(index).and_then(|cell| cell.player()) == Some(player));

        if complete {
            trace!(?player, ?line, "winning line found");
            Some(WinResult {
                player,
                line: line.clone(),
            })
        } else {
            None
        }
    })
}
