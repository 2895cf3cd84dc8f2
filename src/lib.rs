//! Snakes and Apples - a grid-locked terminal snake game
//!
//! This library provides:
//! - Core simulation rules (game module)
//! - The real-time tick loop and run/pause/game-over machine (game_loop module)
//! - TUI rendering behind a capability trait (render module)
//! - Audio cues behind a capability trait (audio module)
//! - Keyboard translation (input module)

pub mod audio;
pub mod game;
pub mod game_loop;
pub mod input;
pub mod render;
