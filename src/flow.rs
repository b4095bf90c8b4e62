//! Application event loop.
//!
//! Wires winit to the game: window and device events are folded into an
//! [`InputState`], every redraw advances the [`GameSession`] by the elapsed time,
//! uploads the camera and renders the room.
//!
//! # Lifecycle Flow
//!
//! 1. `resumed` creates the window, the GPU context and the session (fatal on failure)
//! 2. Window/device events update the input state
//! 3. On redraw the session is updated, the renderer synced and the frame presented
//! 4. Once the session reaches a terminal state the loop exits

use std::sync::Arc;

use anyhow::Context as _;
use instant::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{DeviceEvent, DeviceId, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::{
    config::GameConfig,
    context::Context,
    game::{GameSession, GameState},
    input::InputState,
    render::RoomRenderer,
};

/// Everything that exists once the window is up.
#[derive(Debug)]
pub struct AppState {
    ctx: Context,
    session: GameSession,
    renderer: RoomRenderer,
    input: InputState,
}

impl AppState {
    async fn new(window: Arc<Window>, config: GameConfig) -> anyhow::Result<Self> {
        let mut ctx = Context::new(window, &config).await?;
        let mut session =
            GameSession::new(config, &mut ctx.meshes).context("Failed to build the room")?;
        session.start();

        let mut renderer = RoomRenderer::new();
        renderer.sync(&ctx.device, session.room());
        ctx.write_camera(&session.camera);

        Ok(Self {
            ctx,
            session,
            renderer,
            input: InputState::new(),
        })
    }

    fn frame(&mut self, dt: instant::Duration) {
        self.session.update(&mut self.input, dt);
        self.renderer.sync(&self.ctx.device, self.session.room());
        self.ctx.write_camera(&self.session.camera);

        match self.renderer.render(&self.ctx) {
            Ok(()) => {}
            // Reconfigure the surface if it's lost or outdated
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.ctx.window().inner_size();
                self.ctx.resize(size.width, size.height);
            }
            Err(e) => {
                log::error!("Unable to render {}", e);
            }
        }
    }
}

pub struct App {
    async_runtime: tokio::runtime::Runtime,
    config: GameConfig,
    state: Option<AppState>,
    last_time: Instant,
    outcome: Option<GameState>,
}

impl App {
    fn new(config: GameConfig) -> anyhow::Result<Self> {
        let async_runtime =
            tokio::runtime::Runtime::new().context("Failed to start the async runtime")?;
        Ok(Self {
            async_runtime,
            config,
            state: None,
            last_time: Instant::now(),
            outcome: None,
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => panic!("App initialization failed. Cannot create the window: {}", e),
        };

        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        {
            log::warn!("Could not grab the cursor: {}", e);
        }
        window.set_cursor_visible(false);

        let state = self
            .async_runtime
            .block_on(AppState::new(window.clone(), self.config.clone()));
        let state = match state {
            Ok(state) => state,
            Err(e) => panic!(
                "App initialization failed. Cannot create the main context: {:#}",
                e
            ),
        };
        self.state = Some(state);
        self.last_time = Instant::now();
        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.ctx.resize(size.width, size.height),
            WindowEvent::Focused(false) => state.input.release_all(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape && key_state.is_pressed() {
                    event_loop.exit();
                } else {
                    state.input.handle_key(code, key_state);
                }
            }
            WindowEvent::MouseInput {
                state: button_state,
                button,
                ..
            } => state.input.handle_mouse_button(button, button_state),
            WindowEvent::RedrawRequested => {
                let dt = self.last_time.elapsed();
                self.last_time = Instant::now();
                state.frame(dt);

                if state.session.is_finished() {
                    self.outcome = Some(state.session.state());
                    event_loop.exit();
                } else {
                    state.ctx.window().request_redraw();
                }
            }
            _ => {}
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if let (Some(state), DeviceEvent::MouseMotion { delta: (dx, dy) }) = (&mut self.state, event) {
            state.input.handle_mouse_motion(dx, dy);
        }
    }
}

/// Opens the window and plays one session. Returns once the window is closed or the
/// game is won or lost.
pub fn run(config: GameConfig) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;

    match app.outcome {
        Some(GameState::Win) => println!("You win!"),
        Some(GameState::Lose) => println!("Game Over!"),
        _ => log::info!("Window closed"),
    }
    Ok(())
}
