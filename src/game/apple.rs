use rand::Rng;

use super::grid::{GridPoint, CELL};

/// Cell window the apple can spawn in
///
/// Narrower than the playfield: the columns and rows closest to the far
/// edges never receive an apple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnArea {
    pub max_col: i32,
    pub max_row: i32,
}

/// The single collectible on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Apple {
    position: GridPoint,
}

impl Apple {
    pub fn at(position: GridPoint) -> Self {
        Self { position }
    }

    pub fn position(&self) -> GridPoint {
        self.position
    }

    /// Jump to a uniformly random cell inside `area`, returning it
    ///
    /// Snake occupancy is not consulted: the apple may land under the body.
    pub fn relocate<R: Rng>(&mut self, area: SpawnArea, rng: &mut R) -> GridPoint {
        let col = rng.gen_range(0..=area.max_col);
        let row = rng.gen_range(0..=area.max_row);
        self.position = GridPoint::new(col * CELL, row * CELL);
        self.position
    }
}
