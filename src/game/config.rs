use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::apple::SpawnArea;

/// Configuration for the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width; a head exactly on this value is still in play
    pub width: i32,
    /// Playfield height; same inclusive edge as `width`
    pub height: i32,
    /// Highest cell column the apple can spawn in
    pub apple_max_col: i32,
    /// Highest cell row the apple can spawn in
    pub apple_max_row: i32,
    /// Starting snake length
    pub initial_length: usize,
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
            apple_max_col: 15,
            apple_max_row: 10,
            initial_length: 1,
            tick_ms: 300,
        }
    }
}

impl GameConfig {
    /// The window the apple is allowed to spawn in
    pub fn spawn_area(&self) -> SpawnArea {
        SpawnArea {
            max_col: self.apple_max_col,
            max_row: self.apple_max_row,
        }
    }

    /// Interval between simulation ticks
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
