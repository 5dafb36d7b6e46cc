use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use crate::input::{InputState, KeyCode};
use crate::renderer::{DrawList, ImageData, Renderer, TextureId};
use crate::window::WindowConfig;

// ── Game trait ──────────────────────────────────────────────────────────────

pub trait Game {
    /// One fixed simulation step.
    fn update(&mut self, engine: &mut Engine);
    /// Queue this frame's draw commands on `engine.canvas()`.
    fn render(&mut self, engine: &mut Engine);
}

// ── EngineError ─────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum EngineError {
    EventLoop(winit::error::EventLoopError),
    Window(winit::error::OsError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EventLoop(e) => write!(f, "event loop error: {e}"),
            EngineError::Window(e) => write!(f, "cannot open window: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::EventLoop(e) => Some(e),
            EngineError::Window(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for EngineError {
    fn from(e: winit::error::EventLoopError) -> Self {
        EngineError::EventLoop(e)
    }
}

// ── Engine ──────────────────────────────────────────────────────────────────

pub struct Engine {
    /// GPU renderer: surface, pipeline and uploaded textures.
    pub renderer: Renderer,
    /// Keyboard state, refreshed from window events.
    pub input: InputState,
    /// Commands queued by `Game::render`; cleared before each render.
    draw_list: DrawList,
    tick: u64,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            input: InputState::new(),
            draw_list: DrawList::new(),
            tick: 0,
        }
    }

    pub fn tick(&self) -> u64 { self.tick }

    pub fn is_key_held(&self, key: KeyCode) -> bool { self.input.is_key_held(key) }

    /// Where `Game::render` queues its draw commands.
    pub fn canvas(&mut self) -> &mut DrawList {
        &mut self.draw_list
    }
}

// ── EngineBuilder ───────────────────────────────────────────────────────────

pub struct EngineBuilder {
    title: String,
    window: WindowConfig,
    target_ups: u32,
    images: Vec<ImageData>,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            title: "office_rogue".into(),
            window: WindowConfig::default(),
            target_ups: 60,
            images: Vec::new(),
        }
    }
}

impl EngineBuilder {
    pub fn with_title(mut self, title: &str) -> Self { self.title = title.into(); self }
    pub fn with_size(mut self, width: u32, height: u32) -> Self { self.window = WindowConfig::new(width, height); self }
    pub fn with_ups(mut self, ups: u32) -> Self { self.target_ups = ups.max(1); self }

    /// Register a decoded image. It is uploaded to the GPU once the window
    /// exists; the returned id is valid from then on.
    pub fn add_image(&mut self, image: ImageData) -> TextureId {
        let id = TextureId::new(self.images.len() as u32);
        self.images.push(image);
        id
    }

    pub fn run(self, game: impl Game + 'static) -> Result<(), EngineError> {
        let event_loop = EventLoop::new()?;
        let fixed_dt = 1.0 / self.target_ups as f32;
        let mut app = App {
            config: self,
            game: Box::new(game),
            engine: None,
            error: None,
            last_instant: None,
            accumulator: 0.0,
            fixed_dt,
        };
        event_loop.run_app(&mut app)?;
        match app.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: EngineBuilder,
    game: Box<dyn Game>,
    engine: Option<Engine>,
    /// Fatal error raised inside the event loop, returned from `run`.
    error: Option<EngineError>,
    last_instant: Option<Instant>,
    accumulator: f32,
    fixed_dt: f32,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.is_some() {
            return;
        }
        let attrs = self.config.window.attributes(&self.config.title);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("cannot open window: {e}");
                self.error = Some(EngineError::Window(e));
                event_loop.exit();
                return;
            }
        };

        let images = std::mem::take(&mut self.config.images);
        let renderer = pollster::block_on(Renderer::new(window, &images, self.config.window.clone()));
        let size = renderer.window.inner_size();
        log::info!(
            "window open: {}x{} (logical {}x{})",
            size.width,
            size.height,
            self.config.window.logical_width,
            self.config.window.logical_height,
        );

        self.engine = Some(Engine::new(renderer));
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(engine) = self.engine.as_ref() {
            engine.renderer.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(engine) = self.engine.as_mut() else { return };

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested, exiting");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                engine.renderer.resize(size);
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let elapsed = match self.last_instant {
                    Some(prev) => now.duration_since(prev).as_secs_f32().min(0.25),
                    None => self.fixed_dt,
                };
                self.last_instant = Some(now);
                self.accumulator += elapsed;

                while self.accumulator >= self.fixed_dt {
                    engine.tick += 1;
                    self.game.update(engine);
                    self.accumulator -= self.fixed_dt;
                }

                engine.draw_list.clear();
                self.game.render(engine);

                match engine.renderer.render(&engine.draw_list) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("surface lost, reconfiguring");
                        let size = engine.renderer.window.inner_size();
                        engine.renderer.resize(size);
                    }
                    Err(e) => log::error!("render error: {e}"),
                }

                engine.input.clear_frame_state();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => engine.input.press(code),
                ElementState::Released => engine.input.release(code),
            },

            _ => {}
        }
    }
}
