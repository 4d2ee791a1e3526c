//! Builder for constructing games.

use crate::builder::error::BuildError;
use crate::core::{BoardGeometry, GeometryError};
use crate::engine::{Game, GameEngine};
use serde::Deserialize;
use tracing::debug;

/// Builder for constructing games with a fluent API.
///
/// Unset dimensions fall back to the classic 3x3 board needing three in a
/// row.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GameBuilder {
    rows: Option<usize>,
    cols: Option<usize>,
    win_length: Option<usize>,
}

impl GameBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read dimensions from a JSON document.
    ///
    /// Recognised keys are `rows`, `cols` and `win_length`; missing keys
    /// default to 3. A document that parses but describes an invalid board
    /// fails with [`BuildError::InvalidGeometry`].
    pub fn from_json(config: &str) -> Result<Self, BuildError> {
        let builder: Self = serde_json::from_str(config)?;
        builder.resolve()?;
        Ok(builder)
    }

    /// Set the number of rows.
    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }

    /// Set the number of columns.
    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = Some(cols);
        self
    }

    /// Set how many marks in a line win.
    pub fn win_length(mut self, win_length: usize) -> Self {
        self.win_length = Some(win_length);
        self
    }

    /// Take every dimension from an already validated geometry.
    pub fn geometry(self, geometry: BoardGeometry) -> Self {
        self.rows(geometry.rows())
            .cols(geometry.cols())
            .win_length(geometry.win_length())
    }

    /// Build the game.
    /// Returns an error listing every geometry violation.
    pub fn build(self) -> Result<Game, BuildError> {
        let geometry = self.resolve()?;

        debug!(?geometry, "building game");
        Ok(Game::new(GameEngine::new(geometry)))
    }

    fn resolve(&self) -> Result<BoardGeometry, GeometryError> {
        let defaults = BoardGeometry::default();
        BoardGeometry::new(
            self.rows.unwrap_or(defaults.rows()),
            self.cols.unwrap_or(defaults.cols()),
            self.win_length.unwrap_or(defaults.win_length()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeometryViolation;

    #[test]
    fn builder_defaults_to_classic_board() {
        let game = GameBuilder::new().build().unwrap();

        assert_eq!(game.engine().geometry(), &BoardGeometry::default());
        assert_eq!(game.current_board().len(), 9);
    }

    #[test]
    fn fluent_api_builds_game() {
        let game = GameBuilder::new()
            .rows(5)
            .cols(6)
            .win_length(4)
            .build()
            .unwrap();

        let geometry = game.engine().geometry();
        assert_eq!(
            (geometry.rows(), geometry.cols(), geometry.win_length()),
            (5, 6, 4)
        );
    }

    #[test]
    fn builder_reports_all_violations() {
        let result = GameBuilder::new().rows(0).cols(0).build();

        match result {
            Err(BuildError::InvalidGeometry(err)) => {
                assert_eq!(
                    err.violations,
                    vec![GeometryViolation::ZeroRows, GeometryViolation::ZeroColumns]
                );
            }
            other => panic!("Expected InvalidGeometry, got {other:?}"),
        }
    }

    #[test]
    fn from_json_reads_dimensions() {
        let game = GameBuilder::from_json(r#"{"rows": 4, "cols": 4}"#)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(game.current_board().len(), 16);
        assert_eq!(game.engine().geometry().win_length(), 3);
    }

    #[test]
    fn from_json_rejects_bad_geometry() {
        let result = GameBuilder::from_json(r#"{"win_length": 7}"#);

        match result {
            Err(BuildError::InvalidGeometry(err)) => {
                assert_eq!(
                    err.violations,
                    vec![GeometryViolation::WinLengthTooLong {
                        win_length: 7,
                        rows: 3,
                        cols: 3,
                    }]
                );
            }
            other => panic!("Expected InvalidGeometry, got {other:?}"),
        }
    }

    #[test]
    fn from_json_rejects_oversized_board() {
        let result = GameBuilder::from_json(r#"{"rows": 100000, "cols": 100000}"#);

        match result {
            Err(BuildError::InvalidGeometry(err)) => {
                assert_eq!(
                    err.violations,
                    vec![GeometryViolation::TooManyCells {
                        rows: 100_000,
                        cols: 100_000,
                    }]
                );
            }
            other => panic!("Expected InvalidGeometry, got {other:?}"),
        }
    }

    #[test]
    fn from_json_rejects_malformed_document() {
        let result = GameBuilder::from_json("rows = 3");
        assert!(matches!(result, Err(BuildError::Config(_))));
    }
}
