//! Board geometry configuration and winning-line enumeration.
//!
//! A geometry is fixed for the lifetime of a game. Construction validates
//! every constraint in one pass using Stillwater's `Validation`, so a bad
//! configuration reports all of its problems at once.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

const DEFAULT_DIMENSION: usize = 3;

/// Largest board the engine accepts, counted in cells.
pub const MAX_CELLS: usize = 1 << 12;

/// A single problem with a requested board geometry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeometryViolation {
    #[error("board must have at least one row")]
    ZeroRows,

    #[error("board must have at least one column")]
    ZeroColumns,

    #[error("win length must be at least one")]
    ZeroWinLength,

    #[error("win length {win_length} does not fit on a {rows}x{cols} board")]
    WinLengthTooLong {
        win_length: usize,
        rows: usize,
        cols: usize,
    },

    #[error("a {rows}x{cols} board exceeds the limit of {} cells", MAX_CELLS)]
    TooManyCells { rows: usize, cols: usize },
}

/// Every violation found while validating a geometry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid board geometry: {}", describe(.violations))]
pub struct GeometryError {
    pub violations: Vec<GeometryViolation>,
}

fn describe(violations: &[GeometryViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw, unvalidated geometry as it appears in configuration.
#[derive(Deserialize)]
struct GeometryConfig {
    #[serde(default = "default_dimension")]
    rows: usize,
    #[serde(default = "default_dimension")]
    cols: usize,
    #[serde(default = "default_dimension")]
    win_length: usize,
}

fn default_dimension() -> usize {
    DEFAULT_DIMENSION
}

impl TryFrom<GeometryConfig> for BoardGeometry {
    type Error = GeometryError;

    fn try_from(config: GeometryConfig) -> Result<Self, Self::Error> {
        BoardGeometry::new(config.rows, config.cols, config.win_length)
    }
}

/// Validated board dimensions and the number of marks needed to win.
///
/// # Example
///
/// ```rust
/// use timetoe::BoardGeometry;
///
/// let geometry = BoardGeometry::new(4, 4, 3).unwrap();
/// assert_eq!(geometry.cell_count(), 16);
///
/// let classic = BoardGeometry::default();
/// assert_eq!(classic.winning_lines().len(), 8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "GeometryConfig")]
pub struct BoardGeometry {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMENSION,
            cols: DEFAULT_DIMENSION,
            win_length: DEFAULT_DIMENSION,
        }
    }
}

impl BoardGeometry {
    /// Validate and create a geometry.
    ///
    /// All violations are collected rather than stopping at the first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use timetoe::{BoardGeometry, GeometryViolation};
    ///
    /// let err = BoardGeometry::new(0, 0, 0).unwrap_err();
    /// assert_eq!(err.violations.len(), 3);
    /// assert!(err.violations.contains(&GeometryViolation::ZeroRows));
    /// ```
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, GeometryError> {
        match validate(rows, cols, win_length) {
            Validation::Success(()) => Ok(Self {
                rows,
                cols,
                win_length,
            }),
            Validation::Failure(errors) => Err(GeometryError {
                violations: errors.iter().cloned().collect(),
            }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells, which is also the step count of a full board.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.cell_count()
    }

    /// 1-based row of a cell index.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.cols + 1
    }

    /// 1-based column of a cell index.
    pub fn column_of(&self, index: usize) -> usize {
        index % self.cols + 1
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Enumerate every line of `win_length` consecutive cells.
    ///
    /// Order is stable: rows, then columns, then down-right diagonals,
    /// then down-left diagonals. Win detection returns the first matching
    /// line in this order.
    pub fn winning_lines(&self) -> Vec<Vec<usize>> {
        let (rows, cols, k) = (self.rows, self.cols, self.win_length);
        let mut lines = Vec::new();

        if k <= cols {
            for r in 0..rows {
                for c in 0..=cols - k {
                    lines.push((0..k).map(|i| self.index(r, c + i)).collect());
                }
            }
        }

        if k <= rows {
            for c in 0..cols {
                for r in 0..=rows - k {
                    lines.push((0..k).map(|i| self.index(r + i, c)).collect());
                }
            }
        }

        if k <= rows && k <= cols {
            for r in 0..=rows - k {
                for c in 0..=cols - k {
                    lines.push((0..k).map(|i| self.index(r + i, c + i)).collect());
                }
            }
            for r in 0..=rows - k {
                for c in k - 1..cols {
                    lines.push((0..k).map(|i| self.index(r + i, c - i)).collect());
                }
            }
        }

        lines
    }
}

/// Check every geometry constraint, accumulating ALL violations.
fn validate(
    rows: usize,
    cols: usize,
    win_length: usize,
) -> Validation<(), NonEmptyVec<GeometryViolation>> {
    let checks = vec![
        require(rows > 0, GeometryViolation::ZeroRows),
        require(cols > 0, GeometryViolation::ZeroColumns),
        require(win_length > 0, GeometryViolation::ZeroWinLength),
        // Only meaningful once both dimensions exist.
        require(
            rows == 0 || cols == 0 || win_length <= rows.max(cols),
            GeometryViolation::WinLengthTooLong {
                win_length,
                rows,
                cols,
            },
        ),
        require(
            rows.checked_mul(cols).is_some_and(|cells| cells <= MAX_CELLS),
            GeometryViolation::TooManyCells { rows, cols },
        ),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn require(
    holds: bool,
    violation: GeometryViolation,
) -> Validation<(), NonEmptyVec<GeometryViolation>> {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_board() {
        let geometry = BoardGeometry::default();
        assert_eq!(geometry.rows(), 3);
        assert_eq!(geometry.cols(), 3);
        assert_eq!(geometry.win_length(), 3);
        assert_eq!(geometry.cell_count(), 9);
    }

    #[test]
    fn classic_lines_are_enumerated_in_stable_order() {
        let lines = BoardGeometry::default().winning_lines();

        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1, 2],
            vec![3, 4, 5],
            vec![6, 7, 8],
            vec![0, 3, 6],
            vec![1, 4, 7],
            vec![2, 5, 8],
            vec![0, 4, 8],
            vec![2, 4, 6],
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn larger_board_has_sliding_lines() {
        // 4x4 needing 3: 8 per direction horizontally and vertically,
        // 4 per diagonal direction.
        let geometry = BoardGeometry::new(4, 4, 3).unwrap();
        let lines = geometry.winning_lines();

        assert_eq!(lines.len(), 8 + 8 + 4 + 4);
        assert!(lines.contains(&vec![5, 10, 15]));
        assert!(lines.contains(&vec![3, 6, 9]));
        assert!(lines.iter().all(|line| line.len() == 3));
    }

    #[test]
    fn rectangular_board_skips_impossible_directions() {
        let geometry = BoardGeometry::new(1, 5, 3).unwrap();
        let lines = geometry.winning_lines();

        assert_eq!(lines, vec![vec![0, 1, 2], vec![1, 2, 3], vec![2, 3, 4]]);
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let err = BoardGeometry::new(0, 0, 0).unwrap_err();

        assert_eq!(
            err.violations,
            vec![
                GeometryViolation::ZeroRows,
                GeometryViolation::ZeroColumns,
                GeometryViolation::ZeroWinLength,
            ]
        );
    }

    #[test]
    fn win_length_must_fit() {
        let err = BoardGeometry::new(3, 3, 4).unwrap_err();

        assert_eq!(
            err.violations,
            vec![GeometryViolation::WinLengthTooLong {
                win_length: 4,
                rows: 3,
                cols: 3,
            }]
        );
    }

    #[test]
    fn zero_dimensions_do_not_report_win_length() {
        let err = BoardGeometry::new(0, 0, 3).unwrap_err();

        assert_eq!(
            err.violations,
            vec![GeometryViolation::ZeroRows, GeometryViolation::ZeroColumns]
        );
    }

    #[test]
    fn oversized_board_is_rejected() {
        let huge = usize::MAX / 2;
        let err = BoardGeometry::new(huge, 4, huge).unwrap_err();
        assert_eq!(
            err.violations,
            vec![GeometryViolation::TooManyCells { rows: huge, cols: 4 }]
        );

        let err = BoardGeometry::new(65, 64, 3).unwrap_err();
        assert_eq!(
            err.violations,
            vec![GeometryViolation::TooManyCells { rows: 65, cols: 64 }]
        );
        assert!(err.to_string().contains("limit of 4096 cells"));
    }

    #[test]
    fn largest_board_is_accepted() {
        let geometry = BoardGeometry::new(64, 64, 5).unwrap();
        assert_eq!(geometry.cell_count(), MAX_CELLS);
        assert!(!geometry.winning_lines().is_empty());
    }

    #[test]
    fn error_message_lists_every_violation() {
        let err = BoardGeometry::new(0, 3, 0).unwrap_err();
        let message = err.to_string();

        assert!(message.contains("at least one row"));
        assert!(message.contains("win length must be at least one"));
    }

    #[test]
    fn row_and_column_are_one_based() {
        let geometry = BoardGeometry::default();
        assert_eq!((geometry.row_of(0), geometry.column_of(0)), (1, 1));
        assert_eq!((geometry.row_of(5), geometry.column_of(5)), (2, 3));
        assert_eq!((geometry.row_of(7), geometry.column_of(7)), (3, 2));
    }

    #[test]
    fn deserialize_fills_defaults() {
        let geometry: BoardGeometry = serde_json::from_str(r#"{"rows": 4}"#).unwrap();
        assert_eq!(geometry.rows(), 4);
        assert_eq!(geometry.cols(), 3);
        assert_eq!(geometry.win_length(), 3);
    }

    #[test]
    fn deserialize_validates() {
        let result: Result<BoardGeometry, _> = serde_json::from_str(r#"{"rows": 0}"#);
        assert!(result.is_err());
    }
}
