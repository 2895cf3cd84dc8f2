use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

use crate::audio::{AudioPlayer, Sound, Track};
use crate::game::{CollisionType, GameConfig, GameEngine, GameState, GridPoint, Status};
use crate::input::{InputHandler, KeyAction};
use crate::render::{Renderer, Rgb, Sprite};

/// Score line position and color during play
const SCORE_AT: GridPoint = GridPoint::new(720, 5);
const SCORE_COLOR: Rgb = Rgb(200, 200, 200);

/// Game-over screen text positions
const GAME_OVER_AT: GridPoint = GridPoint::new(200, 200);
const GAME_OVER_HINT_AT: GridPoint = GridPoint::new(200, 250);
const WHITE: Rgb = Rgb(255, 255, 255);

/// The real-time loop driving the simulation and its collaborators
///
/// One tick every 300 ms: step the engine, then draw. The renderer and the
/// audio player are handed in at construction and owned for the lifetime of
/// the loop.
pub struct GameLoop<R: Renderer, A: AudioPlayer> {
    engine: GameEngine,
    state: GameState,
    renderer: R,
    audio: A,
    input_handler: InputHandler,
    tick: Duration,
    should_quit: bool,
}

impl<R: Renderer, A: AudioPlayer> GameLoop<R, A> {
    pub fn new(config: GameConfig, renderer: R, audio: A) -> Self {
        let tick = config.tick();
        let engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            renderer,
            audio,
            input_handler: InputHandler::new(),
            tick,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.audio.play_loop(Track::Background);

        let result = self.run_game_loop().await;

        // Quiet down and give the terminal back whatever the loop returned
        self.audio.stop();
        self.renderer.shutdown()?;

        result
    }

    async fn run_game_loop(&mut self) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.tick);

        loop {
            tokio::select! {
                // Terminal events as they arrive; between ticks the latest
                // direction press wins
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // One simulation step and one frame per tick
                _ = tick_timer.tick() => {
                    self.on_tick()?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    // Steering only works mid-run; the pause screen ignores it
                    if self.state.is_running() {
                        self.state.snake.set_direction(direction);
                    }
                }
                KeyAction::Confirm => {
                    if self.state.is_paused() {
                        self.state.resume();
                        self.audio.play_loop(Track::Background);
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    /// One tick: step the simulation, then draw
    ///
    /// Paused ticks do neither, which keeps the game-over screen frozen
    /// until the player confirms.
    fn on_tick(&mut self) -> Result<()> {
        if !self.state.is_running() {
            return Ok(());
        }

        let outcome = self.engine.step(&mut self.state);

        if outcome.ate_apple {
            self.audio.play_once(Sound::Crunch);
        }

        match outcome.status {
            Status::Running => self.draw_frame()?,
            Status::Terminated(cause) => self.finish_run(cause)?,
            Status::Paused => {}
        }

        Ok(())
    }

    /// Game-over sequence: lose sting, end screen with the final score,
    /// music off, then a fresh state parked in Paused until confirm
    fn finish_run(&mut self, cause: CollisionType) -> Result<()> {
        // A wall hit leaves the head nowhere drawable, so only a
        // self-collision gets its final frame
        if cause == CollisionType::SelfCollision {
            self.draw_frame()?;
        }

        self.audio.play_once(Sound::Lose);

        let final_score = self.state.score();
        self.renderer.draw_background();
        self.renderer.draw_text(
            GAME_OVER_AT,
            &format!("Game Over! Your Score is {}", final_score),
            WHITE,
        );
        self.renderer.draw_text(
            GAME_OVER_HINT_AT,
            "Press Enter to play again or Escape to Quit",
            WHITE,
        );
        self.renderer.present()?;

        self.audio.stop();

        self.state = self.engine.reset();
        self.state.pause();

        Ok(())
    }

    fn draw_frame(&mut self) -> Result<()> {
        self.renderer.draw_background();
        for &segment in self.state.snake.segments() {
            self.renderer.draw_sprite(segment, Sprite::Block);
        }
        self.renderer
            .draw_sprite(self.state.apple.position(), Sprite::Apple);
        self.renderer.draw_text(
            SCORE_AT,
            &format!("Score: {}", self.state.score()),
            SCORE_COLOR,
        );
        self.renderer.present()
    }
}
