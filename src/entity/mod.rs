//! Table and column identifiers plus row types for the `levels` schema.

pub mod game;
pub mod level;

pub use game::Games;
pub use level::{Level, LevelType, Levels};
