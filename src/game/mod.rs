//! Core game logic module
//!
//! All simulation rules live here with no I/O, rendering, or audio
//! dependencies; the loop and its collaborators sit on top.

pub mod apple;
pub mod collision;
pub mod config;
pub mod engine;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use apple::{Apple, SpawnArea};
pub use collision::{head_hits_body, overlaps};
pub use config::GameConfig;
pub use engine::{GameEngine, StepOutcome};
pub use grid::{Direction, GridPoint, CELL};
pub use snake::Snake;
pub use state::{CollisionType, GameState, Status};
