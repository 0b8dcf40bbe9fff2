//! Breeze Pong entry point
//!
//! Window and GPU initialization, then the fixed loop: sample input, advance
//! the simulation by wall-clock elapsed time, render the draw list. Any
//! startup resource that cannot be created terminates the process with a
//! diagnostic; the only graceful exits are the quit key, window close, and
//! the post-win countdown.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use breeze_pong::input::{map_key, InputState};
use breeze_pong::renderer::{build_draw_list, RenderState, SPRITE_COUNT};
use breeze_pong::sim::{tick, GameState};
use breeze_pong::tuning::Tuning;

const WINDOW_TITLE: &str = "Breeze pong!";
const WINDOW_WIDTH: u32 = 640;
const WINDOW_HEIGHT: u32 = 480;

const TUNING_PATH: &str = "assets/tuning.json";
/// Sprite files, in texture slot order: background, left paddle, right
/// paddle, ball, left win banner, right win banner. Both paddles share art;
/// the scene table mirrors the left one.
const TEXTURE_PATHS: [&str; SPRITE_COUNT] = [
    "assets/background.png",
    "assets/breeze.png",
    "assets/breeze.png",
    "assets/wind_charge.png",
    "assets/win_left.png",
    "assets/win_right.png",
];

struct Game {
    tuning: Tuning,
    state: GameState,
    input: InputState,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    last_frame: Option<Instant>,
    winner_announced: bool,
}

impl Game {
    fn new(tuning: Tuning) -> Self {
        let state = GameState::new(&tuning);
        Self {
            tuning,
            state,
            input: InputState::new(),
            window: None,
            render_state: None,
            last_frame: None,
            winner_announced: false,
        }
    }

    /// One iteration of the loop: input, update, render
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map(|prev| now.duration_since(prev).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        let frame_input = self.input.frame_input();
        let ai_before = self.state.ai_enabled;

        tick(&mut self.state, &frame_input, dt, &self.tuning);

        if self.state.ai_enabled != ai_before {
            log::info!(
                "AI opponent {}",
                if self.state.ai_enabled { "on" } else { "off" }
            );
        }
        if let Some(side) = self.state.winner {
            if !self.winner_announced {
                log::info!("{side:?} side wins");
                self.winner_announced = true;
            }
        }

        if !self.state.running {
            log::info!("Game over, exiting");
            event_loop.exit();
            return;
        }

        let draws = build_draw_list(&self.state, &self.tuning);
        if let Some(render_state) = self.render_state.as_mut() {
            match render_state.render(&draws) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {e:?}"),
            }
        }

        self.input.end_frame();
    }
}

impl ApplicationHandler for Game {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.render_state.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .unwrap_or_else(|e| panic!("Failed to create window: {e}")),
        );
        log::info!("Window created: {WINDOW_WIDTH}x{WINDOW_HEIGHT}");

        let mut render_state = RenderState::new(window.clone(), &self.tuning)
            .unwrap_or_else(|e| panic!("Failed to initialize rendering: {e}"));
        render_state
            .load_textures(&TEXTURE_PATHS)
            .unwrap_or_else(|e| panic!("{e}"));

        self.window = Some(window);
        self.render_state = Some(render_state);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, exiting");
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key_code) = event.physical_key {
                    if let Some(key) = map_key(key_code) {
                        match event.state {
                            ElementState::Pressed => self.input.key_down(key, event.repeat),
                            ElementState::Released => self.input.key_up(key),
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Breeze Pong starting...");

    let tuning = Tuning::load_or_default(TUNING_PATH)
        .unwrap_or_else(|e| panic!("Failed to load tuning: {e}"));

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut game = Game::new(tuning);
    event_loop.run_app(&mut game).expect("Event loop error");
}
