//! Build errors for the game builder.

use crate::core::GeometryError;
use thiserror::Error;

/// Errors that can occur when building a game.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    InvalidGeometry(#[from] GeometryError),

    #[error("Could not read game configuration: {0}")]
    Config(#[from] serde_json::Error),
}
