//! Rendering behind a capability trait
//!
//! The loop draws through [`Renderer`] without knowing what sits behind it;
//! [`TerminalRenderer`] is the shipped ratatui implementation.

pub mod renderer;
pub mod terminal;

pub use renderer::{Renderer, Rgb, Sprite};
pub use terminal::TerminalRenderer;
