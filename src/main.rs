use anyhow::Result;
use clap::Parser;
use snakes_and_apples::audio::SilentAudio;
use snakes_and_apples::game::GameConfig;
use snakes_and_apples::game_loop::GameLoop;
use snakes_and_apples::render::TerminalRenderer;

#[derive(Parser)]
#[command(name = "snakes-and-apples")]
#[command(version, about = "Eat apples, dodge walls, don't bite yourself")]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    Cli::parse();

    let config = GameConfig::default();

    // Collaborators are built up front and fail fast; the loop assumes they
    // are available once it starts
    let renderer = TerminalRenderer::new(&config)?;
    let audio = SilentAudio::new();

    let mut game = GameLoop::new(config, renderer, audio);
    game.run().await
}
