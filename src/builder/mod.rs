//! Builder API for ergonomic game construction.
//!
//! Games can be configured programmatically or from a JSON document.
//! Either way the geometry is validated once, at build time, and stays
//! fixed for the lifetime of the game.
//!
//! # Example
//!
//! ```
//! use timetoe::builder::GameBuilder;
//!
//! let game = GameBuilder::new().rows(4).cols(4).win_length(3).build().unwrap();
//! assert_eq!(game.current_board().len(), 16);
//!
//! let game = GameBuilder::from_json(r#"{"rows": 3, "cols": 5}"#)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//! assert_eq!(game.engine().geometry().cols(), 5);
//! ```

pub mod error;
pub mod game;

pub use error::BuildError;
pub use game::GameBuilder;
