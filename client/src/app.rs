//! Frame driver: owns the window, the renderer and the running match.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use game_core::{ActionState, Params};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::error::RenderError;
use crate::frame_clock::FrameClock;
use crate::input::{is_exit_key, KeyBindings};
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::simulation::LocalGame;

pub const WINDOW_TITLE: &str = "Pong";

pub struct App {
    game: LocalGame,
    bindings: KeyBindings,
    actions: ActionState,
    clock: FrameClock,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(game: LocalGame, bindings: KeyBindings) -> Self {
        Self {
            game,
            bindings,
            actions: ActionState::new(),
            clock: FrameClock::new(Params::TARGET_FPS, Instant::now()),
            window: None,
            renderer: None,
            error: None,
        }
    }

    /// The fatal error that stopped the loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn finish(&self, event_loop: &ActiveEventLoop, reason: &str) {
        let score = self.game.view().score;
        tracing::info!(
            reason,
            elapsed = self.game.elapsed(),
            left = score.left,
            right = score.right,
            "match over"
        );
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let config = self.game.config();
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(config.arena_width, config.arena_height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            config.arena_width,
            config.arena_height,
        ))
        .context("failed to initialise renderer")?;

        tracing::info!(
            width = renderer.size.0,
            height = renderer.size.1,
            "window ready"
        );

        self.clock = FrameClock::new(Params::TARGET_FPS, Instant::now());
        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let dt = self.clock.tick(Instant::now());
        self.game.step(dt, &self.actions);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let scene = Scene::build(&self.game.view(), self.game.config());

        match renderer.draw(&scene) {
            Ok(()) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                tracing::warn!("surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(RenderError::Surface(wgpu::SurfaceError::Timeout)) => {
                tracing::warn!("frame acquisition timed out, skipping frame");
            }
            Err(err) => self.fail(event_loop, anyhow::Error::new(err).context("render failed")),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.create_window(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.finish(event_loop, "window closed"),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::Focused(false) => {
                // Key releases are not delivered while unfocused
                self.actions.clear();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                if pressed && is_exit_key(code) {
                    self.finish(event_loop, "exit key");
                    return;
                }
                self.bindings.apply(code, pressed, &mut self.actions);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if self.clock.is_due(Instant::now()) {
            window.request_redraw();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}
