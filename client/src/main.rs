//! Two-player Pong: W/S move the left paddle, the arrow keys move the right
//! one, Escape quits. Set `RUST_LOG` to change log verbosity.

mod app;
mod camera;
mod error;
mod frame_clock;
mod hud;
mod input;
mod mesh;
mod renderer;
mod scene;
mod simulation;

use anyhow::Context;
use game_core::Config;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use app::App;
use input::KeyBindings;
use simulation::LocalGame;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let game = LocalGame::new(Config::default()).context("invalid game configuration")?;
    let mut app = App::new(game, KeyBindings::default());

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    tracing::info!("starting match");
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.take_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
