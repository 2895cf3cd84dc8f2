//! Audio cues behind a capability trait
//!
//! The core never touches a mixer; it announces moments (background music,
//! crunch, lose) and an [`AudioPlayer`] implementation decides what to do
//! with them.

pub mod player;

pub use player::{AudioPlayer, SilentAudio, Sound, Track};
