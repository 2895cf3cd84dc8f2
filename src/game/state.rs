use super::apple::Apple;
use super::grid::GridPoint;
use super::snake::Snake;

/// Type of collision that ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the playfield
    Wall,
    /// Head landed on the body
    SelfCollision,
}

/// Lifecycle of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Simulation advances every tick
    Running,
    /// Simulation and rendering are both on hold
    Paused,
    /// A collision ended the run; only a reset recovers
    Terminated(CollisionType),
}

/// Complete state of one run
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub width: i32,
    pub height: i32,
    pub status: Status,
}

impl GameState {
    /// Create a new running state
    pub fn new(snake: Snake, apple: Apple, width: i32, height: i32) -> Self {
        Self {
            snake,
            apple,
            width,
            height,
            status: Status::Running,
        }
    }

    /// Score shown to the player; always the snake's current length
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    /// Check if a point is within the playfield
    ///
    /// Both far edges are inclusive: a head sitting exactly on `width` or
    /// `height` is in play.
    pub fn is_in_bounds(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.x <= self.width && p.y >= 0 && p.y <= self.height
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    /// Hold the simulation; meaningful only from Running
    pub fn pause(&mut self) {
        if self.status == Status::Running {
            self.status = Status::Paused;
        }
    }

    /// Resume a paused simulation
    pub fn resume(&mut self) {
        if self.status == Status::Paused {
            self.status = Status::Running;
        }
    }
}
