use anyhow::Result;

use crate::game::GridPoint;

/// What a drawn cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    /// One snake segment
    Block,
    /// The apple
    Apple,
}

/// Text color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Drawing capability the game loop drives
///
/// Calls accumulate into a frame under construction: `draw_background`
/// starts a fresh frame, sprite and text calls layer onto it, `present`
/// flushes it to the display. Nothing is visible until `present`.
pub trait Renderer {
    /// Start a fresh frame showing only the background
    fn draw_background(&mut self);

    /// Place a sprite on the cell containing `at`
    ///
    /// Positions outside the playfield (the growth sentinel) are skipped.
    fn draw_sprite(&mut self, at: GridPoint, sprite: Sprite);

    /// Write a line of text starting at `at`
    fn draw_text(&mut self, at: GridPoint, text: &str, color: Rgb);

    /// Flush the frame under construction to the display
    fn present(&mut self) -> Result<()>;

    /// Release the display; called once after the loop ends
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
