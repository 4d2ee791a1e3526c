//! Board value types: players, cells and immutable snapshots.
//!
//! Every type in this module is a plain value. A snapshot is never
//! changed after construction; placing a mark produces a new snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players.
///
/// The engine only knows `A` and `B`. Mapping them to symbols such as
/// `X`/`O` is left to whatever renders the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PlayerId {
    A,
    B,
}

impl PlayerId {
    /// Player to move when the game is at `step`.
    ///
    /// `A` moves on even steps and `B` on odd ones, so the turn is a pure
    /// function of how many marks have been placed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use timetoe::PlayerId;
    ///
    /// assert_eq!(PlayerId::for_step(0), PlayerId::A);
    /// assert_eq!(PlayerId::for_step(3), PlayerId::B);
    /// ```
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Self::A
        } else {
            Self::B
        }
    }

    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Mark(PlayerId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Player holding this cell, if any.
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Self::Empty => None,
            Self::Mark(player) => Some(*player),
        }
    }
}

/// Immutable board state at one point in a game's history.
///
/// Cells are stored in row-major order. `changed_index` records the cell
/// that was filled to reach this snapshot from its predecessor and is
/// `None` only for the empty starting board.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoardSnapshot {
    cells: Vec<Cell>,
    changed_index: Option<usize>,
}

impl BoardSnapshot {
    /// Create an empty board with `cell_count` cells.
    pub fn empty(cell_count: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; cell_count],
            changed_index: None,
        }
    }

    /// Return a copy of this board with `index` marked by `player`.
    ///
    /// This is a pure function; `self` is left untouched. Returns `None`
    /// when `index` is off the board. Callers are expected to have checked
    /// that the cell is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use timetoe::{BoardSnapshot, Cell, PlayerId};
    ///
    /// let empty = BoardSnapshot::empty(9);
    /// let next = empty.with_mark(4, PlayerId::A).unwrap();
    ///
    /// assert_eq!(next.cell(4), Some(Cell::Mark(PlayerId::A)));
    /// assert_eq!(next.changed_index(), Some(4));
    /// assert_eq!(empty.cell(4), Some(Cell::Empty)); // Original unchanged
    /// ```
    pub fn with_mark(&self, index: usize, player: PlayerId) -> Option<Self> {
        if index >= self.cells.len() {
            return None;
        }
        let mut cells = self.cells.clone();
        cells[index] = Cell::Mark(player);
        Some(Self {
            cells,
            changed_index: Some(index),
        })
    }

    /// Cell at `index`, or `None` if it is off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn changed_index(&self) -> Option<usize> {
        self.changed_index
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell holds a mark.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}
