use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
pub use winit::keyboard::KeyCode;
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::error::Error;
use crate::input::InputState;
use crate::renderer::{Renderer, builtin_font};
use crate::ui::DrawList;

/// Longest wall-clock gap fed into the update accumulator. Anything longer
/// (debugger pause, window drag) is dropped instead of replayed.
const MAX_FRAME_TIME: f32 = 0.25;

// ── Color ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// Opaque colour from 8-bit sRGB channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0])
    }

    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    pub const RAYWHITE: Self = Self::rgb8(245, 245, 245);
    pub const GRAY: Self = Self::rgb8(130, 130, 130);
    pub const BROWN: Self = Self::rgb8(127, 106, 79);
    pub const DARK_BROWN: Self = Self::rgb8(76, 63, 47);
}

// ── Game trait ──────────────────────────────────────────────────────────────

pub trait Game {
    fn on_enter(&mut self, _engine: &mut Engine) {}
    /// Runs at the fixed update rate; `engine.dt()` is constant.
    fn update(&mut self, engine: &mut Engine);
    /// Runs once per presented frame; draw into `engine.draw`.
    fn render(&mut self, engine: &mut Engine);
}

// ── Engine ──────────────────────────────────────────────────────────────────

pub struct Engine {
    /// Owns the wgpu surface, the quad pipeline and the atlas texture.
    pub renderer: Renderer,
    /// Quads queued by `Game::render`; cleared before each render.
    pub draw: DrawList,
    /// Keyboard state. Edges are consumed by the first update tick after
    /// they arrive.
    pub input: InputState,
    width: u32,
    height: u32,
    clear_color: Color,
    dt: f32,
    tick: u64,
    /// Set to `true` by `request_quit()`; the event loop exits after the current tick.
    pub(crate) quit_requested: bool,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    fn new(renderer: Renderer, width: u32, height: u32) -> Self {
        Self {
            renderer,
            draw: DrawList::new(builtin_font::font(), builtin_font::solid_uv()),
            input: InputState::new(),
            width,
            height,
            clear_color: Color::BLACK,
            dt: 0.0,
            tick: 0,
            quit_requested: false,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn dt(&self) -> f32 { self.dt }
    /// Logical width in pixels (the coordinate space of `draw`).
    pub fn width(&self) -> u32 { self.width }
    /// Logical height in pixels.
    pub fn height(&self) -> u32 { self.height }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Signal that the application should exit.  The event loop will call
    /// `exit()` after the current update tick completes.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn is_quit_requested(&self) -> bool {
        self.quit_requested
    }

    fn present(&mut self) {
        let clear = self.clear_color.0;
        let result = self
            .renderer
            .render(&self.draw.vertices, &self.draw.indices, clear);
        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.renderer.window.inner_size();
                log::warn!("surface lost, reconfiguring at {}x{}", size.width, size.height);
                self.renderer.resize(size);
            }
            Err(e) => log::error!("render error: {e}"),
        }
    }
}

// ── EngineBuilder ───────────────────────────────────────────────────────────

pub struct EngineBuilder {
    title: String,
    width: u32,
    height: u32,
    target_ups: u32,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            title: "zombie-room".into(),
            width: 800,
            height: 600,
            target_ups: 60,
        }
    }
}

impl EngineBuilder {
    pub fn with_title(mut self, title: &str) -> Self { self.title = title.into(); self }
    pub fn with_size(mut self, width: u32, height: u32) -> Self { self.width = width; self.height = height; self }
    /// Fixed update ticks per second. Zero is treated as one.
    pub fn with_ups(mut self, ups: u32) -> Self { self.target_ups = ups.max(1); self }

    /// Seconds per update tick.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.target_ups.max(1) as f32
    }

    /// Open the window and drive `game` until it quits or the window closes.
    pub fn run(self, game: impl Game + 'static) -> Result<(), Error> {
        let event_loop = EventLoop::new()?;
        let fixed_dt = self.fixed_dt();
        log::info!(
            "starting '{}' at {}x{}, {} updates/s",
            self.title, self.width, self.height, self.target_ups
        );
        let mut app = App {
            config: self,
            game: Box::new(game),
            engine: None,
            clock: FixedStep::new(fixed_dt),
            last_instant: None,
            error: None,
        };
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ── FixedStep ───────────────────────────────────────────────────────────────

/// Fixed-timestep accumulator: wall-clock time goes in, whole update ticks
/// come out.
#[derive(Debug, Clone, Copy)]
pub struct FixedStep {
    pub fixed_dt: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(fixed_dt: f32) -> Self {
        Self { fixed_dt, accumulator: 0.0 }
    }

    /// Add `elapsed` seconds (capped at [`MAX_FRAME_TIME`]) and return how
    /// many ticks are now due.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.min(MAX_FRAME_TIME);
        let mut ticks = 0;
        while self.accumulator >= self.fixed_dt {
            self.accumulator -= self.fixed_dt;
            ticks += 1;
        }
        ticks
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: EngineBuilder,
    game: Box<dyn Game>,
    engine: Option<Engine>,
    clock: FixedStep,
    last_instant: Option<Instant>,
    /// Fatal setup error, reported from `EngineBuilder::run` after the loop exits.
    error: Option<Error>,
}

impl App {
    fn create_engine(&self, event_loop: &ActiveEventLoop) -> Result<Engine, Error> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(&self.config.title)
                    .with_inner_size(winit::dpi::PhysicalSize::new(
                        self.config.width,
                        self.config.height,
                    ))
                    .with_resizable(false),
            )?,
        );
        let renderer = pollster::block_on(Renderer::new(
            window,
            &builtin_font::atlas_image(),
            self.config.width,
            self.config.height,
        ))?;
        Ok(Engine::new(renderer, self.config.width, self.config.height))
    }

    /// Run every due update tick, then render one frame.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(engine) = self.engine.as_mut() else { return };

        let now = Instant::now();
        let elapsed = match self.last_instant {
            Some(prev) => now.duration_since(prev).as_secs_f32(),
            None => self.clock.fixed_dt,
        };
        self.last_instant = Some(now);

        for _ in 0..self.clock.advance(elapsed) {
            engine.dt = self.clock.fixed_dt;
            engine.tick += 1;
            self.game.update(engine);
            // Edges belong to the first tick that saw them.
            engine.input.clear_frame_state();
            if engine.quit_requested {
                log::info!("quit requested after {} ticks", engine.tick);
                event_loop.exit();
                return;
            }
        }

        engine.draw.clear();
        self.game.render(engine);
        engine.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.is_some() {
            return;
        }
        match self.create_engine(event_loop) {
            Ok(mut engine) => {
                self.game.on_enter(&mut engine);
                self.engine = Some(engine);
            }
            Err(e) => {
                log::error!("failed to start: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(engine) = self.engine.as_ref() {
            engine.renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(engine) = self.engine.as_mut() {
                    engine.renderer.resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(engine) = self.engine.as_mut() {
                    match state {
                        ElementState::Pressed => engine.input.press(code),
                        ElementState::Released => engine.input.release(code),
                    }
                }
            }

            _ => {}
        }
    }
}
