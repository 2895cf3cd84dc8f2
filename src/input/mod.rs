//! Keyboard translation
//!
//! A pure mapping from terminal key events to game commands; the event
//! stream itself lives in the game loop.

pub mod handler;

pub use handler::{InputHandler, KeyAction};
