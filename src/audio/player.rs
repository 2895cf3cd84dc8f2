/// Looping music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Track {
    /// Plays under normal play; restarted when a paused game resumes
    Background,
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// The snake ate an apple
    Crunch,
    /// A collision ended the run
    Lose,
}

/// Playback capability the game loop drives
///
/// The loop only decides when a cue fires; whether anything is audible is up
/// to the implementation.
pub trait AudioPlayer {
    /// Start `track` looping until `stop` is called
    fn play_loop(&mut self, track: Track);

    /// Fire a one-shot effect without interrupting the looping track
    fn play_once(&mut self, sound: Sound);

    /// Stop the looping track; one-shot effects already in flight keep going
    fn stop(&mut self);
}

/// Discards every cue; stands in wherever no audio backend is wired up
pub struct SilentAudio;

impl SilentAudio {
    pub fn new() -> Self {
        Self
    }
}

impl AudioPlayer for SilentAudio {
    fn play_loop(&mut self, _track: Track) {}

    fn play_once(&mut self, _sound: Sound) {}

    fn stop(&mut self) {}
}

impl Default for SilentAudio {
    fn default() -> Self {
        Self::new()
    }
}
