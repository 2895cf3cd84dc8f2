use rand::rngs::ThreadRng;
use rand::Rng;

use super::apple::Apple;
use super::collision::{head_hits_body, overlaps};
use super::config::GameConfig;
use super::grid::{Direction, GridPoint, CELL};
use super::snake::Snake;
use super::state::{CollisionType, GameState, Status};

/// Every run starts here: head one cell in from the top-left corner, apple
/// three cells in, facing down.
const SNAKE_START: GridPoint = GridPoint::new(CELL, CELL);
const APPLE_START: GridPoint = GridPoint::new(3 * CELL, 3 * CELL);
const START_DIRECTION: Direction = Direction::Down;

/// What one tick did, reported back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Status as of the end of this tick
    pub status: Status,
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
}

/// The game engine that advances the simulation
///
/// Owns the configuration and the RNG; both survive resets, so a seeded
/// engine keeps its random sequence across runs.
pub struct GameEngine<R = ThreadRng> {
    config: GameConfig,
    rng: R,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with a caller-supplied RNG (seeded in tests)
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// A brand-new initial state, identical on every call
    pub fn reset(&self) -> GameState {
        let snake = Snake::new(SNAKE_START, START_DIRECTION, self.config.initial_length);
        let apple = Apple::at(APPLE_START);
        GameState::new(snake, apple, self.config.width, self.config.height)
    }

    /// Execute one tick of the simulation
    ///
    /// Advances only while Running; in any other status the state is left
    /// untouched and the outcome just echoes it. Order within a tick: walk,
    /// wall check, eat check, self-collision scan. A single tick can both
    /// eat and terminate.
    pub fn step(&mut self, state: &mut GameState) -> StepOutcome {
        if state.status != Status::Running {
            return StepOutcome {
                status: state.status,
                ate_apple: false,
            };
        }

        let head = state.snake.walk();

        if !state.is_in_bounds(head) {
            state.status = Status::Terminated(CollisionType::Wall);
            return StepOutcome {
                status: state.status,
                ate_apple: false,
            };
        }

        let mut ate_apple = false;
        if overlaps(head, state.apple.position()) {
            state.snake.grow();
            state.apple.relocate(self.config.spawn_area(), &mut self.rng);
            ate_apple = true;
        }

        // Runs after growth: the fresh off-grid sentinel is part of the scan
        // but can never match an in-bounds head
        if head_hits_body(state.snake.segments()) {
            state.status = Status::Terminated(CollisionType::SelfCollision);
        }

        StepOutcome {
            status: state.status,
            ate_apple,
        }
    }
}
