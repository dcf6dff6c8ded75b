use std::time::Instant;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use field_core::{
    advance_frame, Direction, Distribution, FieldParams, FrameClock, NavOutcome,
    NavigationConfig, NavigationController, ParticleField, ParticleRenderer, PointerState,
    SectionView, Viewport, DEFAULT_SECTION_COUNT, FIELD_SEED, NATIVE_PARTICLE_COUNT,
};

// Pixels of trackpad scroll treated like one wheel notch.
const PIXELS_PER_LINE: f64 = 40.0;

struct App<'w> {
    window: &'w Window,
    nav: NavigationController,
    sections: SectionView,
    pointer: PointerState,
    field: ParticleField,
    clock: FrameClock,
    gpu: Option<ParticleRenderer<'w>>,
}

impl<'w> App<'w> {
    fn new(window: &'w Window, gpu: Option<ParticleRenderer<'w>>) -> anyhow::Result<Self> {
        let nav = NavigationController::new(DEFAULT_SECTION_COUNT, NavigationConfig::default())?;
        let sections = nav.view();
        let field = ParticleField::seeded(
            NATIVE_PARTICLE_COUNT,
            Distribution::default(),
            FieldParams::default(),
            FIELD_SEED,
        );
        let app = Self {
            window,
            nav,
            sections,
            pointer: PointerState::default(),
            field,
            clock: FrameClock::new(Instant::now()),
            gpu,
        };
        app.update_title();
        Ok(app)
    }

    fn update_title(&self) {
        self.window.set_title(&format!(
            "Particle Field - Section {} / {}",
            self.sections.current() + 1,
            self.sections.count()
        ));
    }

    fn apply(&mut self, outcome: NavOutcome) {
        match outcome {
            Ok(_) => self.update_title(),
            Err(reason) => log::debug!("[nav] ignored: {}", reason),
        }
    }

    fn on_key(&mut self, key: &Key) {
        if let Some(direction) = key_direction(key) {
            let outcome = self.nav.request_step(direction);
            self.apply(outcome);
        } else if let Some(index) = digit_index(key) {
            let outcome = self.nav.request_index(index);
            self.apply(outcome);
        }
    }

    fn on_wheel(&mut self, delta: MouseScrollDelta) {
        // winit reports positive y for scrolling up; the DOM convention is the reverse.
        let delta_y = match delta {
            MouseScrollDelta::LineDelta(_, y) => -(y as f64),
            MouseScrollDelta::PixelDelta(p) => -p.y / PIXELS_PER_LINE,
        };
        if let Some(direction) = Direction::from_wheel_delta(delta_y) {
            let outcome = self.nav.request_step(direction);
            self.apply(outcome);
        }
    }

    fn on_cursor(&mut self, x: f64, y: f64) {
        let size = self.window.inner_size();
        self.pointer
            .set_target_from_client(x as f32, y as f32, size.width as f32, size.height as f32);
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Some(gpu) = self.gpu.as_mut() {
            gpu.set_pixel_ratio(self.window.scale_factor() as f32);
            gpu.configure(Viewport::new(width, height));
        }
    }

    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let uniforms = advance_frame(
            &mut self.nav,
            &mut self.pointer,
            &mut self.field,
            &mut self.clock,
            self.gpu.as_ref().map(|g| g.camera()),
            Instant::now(),
        );
        let (Some(uniforms), Some(gpu)) = (uniforms, self.gpu.as_mut()) else {
            return Ok(());
        };
        gpu.render(self.field.positions(), &uniforms)
    }

    fn shutdown(&mut self) {
        self.nav.shutdown();
        log::info!("[app] shut down after {} frames", self.clock.frames());
    }
}

fn key_direction(key: &Key) -> Option<Direction> {
    match key {
        Key::Named(NamedKey::ArrowDown | NamedKey::PageDown) => Some(Direction::Next),
        Key::Named(NamedKey::ArrowUp | NamedKey::PageUp) => Some(Direction::Previous),
        _ => None,
    }
}

// '1'..='9' jump straight to a section.
fn digit_index(key: &Key) -> Option<usize> {
    let Key::Character(text) = key else {
        return None;
    };
    match text.as_str().parse::<usize>() {
        Ok(n @ 1..=9) => Some(n - 1),
        _ => None,
    }
}

async fn init_gpu(window: &Window) -> Option<ParticleRenderer<'_>> {
    let size = window.inner_size();
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(window) {
        Ok(s) => s,
        Err(e) => {
            log::error!("surface error: {:?}", e);
            return None;
        }
    };
    match ParticleRenderer::new(
        &instance,
        surface,
        Viewport::new(size.width, size.height),
        window.scale_factor() as f32,
        NATIVE_PARTICLE_COUNT,
    )
    .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("GPU init error: {:?}; running without the particle field", e);
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Particle Field")
        .build(&event_loop)?;

    let gpu = pollster::block_on(init_gpu(&window));
    let mut app = App::new(&window, gpu)?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => app.resize(size.width, size.height),
            WindowEvent::CloseRequested => {
                app.shutdown();
                elwt.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => app.on_key(&logical_key),
            WindowEvent::MouseWheel { delta, .. } => app.on_wheel(delta),
            WindowEvent::CursorMoved { position, .. } => app.on_cursor(position.x, position.y),
            _ => {}
        },
        Event::AboutToWait => match app.frame() {
            Ok(_) => app.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(gpu) = app.gpu.as_mut() {
                    gpu.reconfigure_surface();
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                app.shutdown();
                elwt.exit();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        },
        _ => {}
    })?;
    Ok(())
}
