use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use winit::dpi::PhysicalPosition;
use winit::{event::*, event_loop::EventLoop, window::Window, window::WindowBuilder};

use bloch_core::{
    Camera, Countdown, OrbitControls, SceneConfig, Scenery, StateVector, GROUP_SPIN_PER_FRAME,
};
use bloch_render::{FrameScene, Renderer};
use glam::Vec2;

const WINDOW_TITLE: &str = "Bloch sphere";

fn now_unix_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// `BLOCH_SEED` pins the star layout, `BLOCH_TARGET_MS` moves the countdown.
fn config_from_env() -> SceneConfig {
    let mut config = SceneConfig::default();
    if let Ok(raw) = std::env::var("BLOCH_SEED") {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(e) => log::warn!("ignoring BLOCH_SEED={raw:?}: {e}"),
        }
    }
    if let Ok(raw) = std::env::var("BLOCH_TARGET_MS") {
        match raw.trim().parse::<i64>() {
            Ok(ms) => config.target_unix_ms = ms,
            Err(e) => log::warn!("ignoring BLOCH_TARGET_MS={raw:?}: {e}"),
        }
    }
    if let Err(e) = config.validate() {
        log::warn!("{e}; falling back to defaults");
        return SceneConfig::default();
    }
    config
}

struct Preview<'w> {
    window: &'w Window,
    renderer: Renderer<'w>,
    camera: Camera,
    controls: OrbitControls,
    state_vector: StateVector,
    countdown: Countdown,
    countdown_interval: Duration,
    group_rotation: f32,
    dragging: bool,
    cursor: Option<Vec2>,
    last_title: Option<Instant>,
}

impl<'w> Preview<'w> {
    fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.camera.set_viewport(width as f32, height as f32);
    }

    fn cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        let at = Vec2::new(position.x as f32, position.y as f32);
        if let (true, Some(prev)) = (self.dragging, self.cursor) {
            let delta = at - prev;
            let (_, height) = self.renderer.size();
            self.controls.rotate(delta.x, delta.y, height as f32);
        }
        self.cursor = Some(at);
    }

    fn update_title(&mut self) {
        let due = self
            .last_title
            .map_or(true, |t| t.elapsed() >= self.countdown_interval);
        if !due {
            return;
        }
        let parts = self.countdown.parts_at(now_unix_ms());
        self.window
            .set_title(&format!("{WINDOW_TITLE} - starts in {}", parts.summary()));
        self.last_title = Some(Instant::now());
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.update_title();
        self.controls.update(&mut self.camera);
        self.group_rotation =
            (self.group_rotation + GROUP_SPIN_PER_FRAME).rem_euclid(std::f32::consts::TAU);
        let scene = FrameScene {
            view_proj: self.camera.view_projection(),
            group_rotation: self.group_rotation,
            tip: self.state_vector.tip_at(now_unix_ms() as f64),
        };
        self.renderer.render(&scene)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config_from_env();
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;
    let size = window.inner_size();

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(&window)?;
    let scenery = Scenery::for_config(&config);
    let renderer = pollster::block_on(Renderer::new(
        &instance,
        surface,
        size.width,
        size.height,
        &config,
        &scenery,
    ))?;

    let camera = Camera::looking_at_origin(
        config.start_distance(),
        size.width.max(1) as f32 / size.height.max(1) as f32,
    );
    let controls = OrbitControls::new(&camera, &config);
    let mut preview = Preview {
        window: &window,
        renderer,
        camera,
        controls,
        state_vector: StateVector::new(config.sphere_radius),
        countdown: Countdown::new(config.target_unix_ms),
        countdown_interval: Duration::from_millis(config.countdown_interval_ms as u64),
        group_rotation: 0.0,
        dragging: false,
        cursor: None,
        last_title: None,
    };
    log::info!(
        "native preview {}x{}, stars={} cubes={}",
        size.width,
        size.height,
        scenery.stars.len(),
        scenery.cubes.len()
    );

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => preview.resize(size.width, size.height),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => preview.dragging = state == ElementState::Pressed,
            WindowEvent::CursorMoved { position, .. } => preview.cursor_moved(position),
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y,
                    MouseScrollDelta::PixelDelta(p) => -(p.y as f32) / 100.0,
                };
                preview.controls.zoom_wheel(notches);
            }
            WindowEvent::RedrawRequested => match preview.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size = preview.window.inner_size();
                    preview.resize(size.width, size.height);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("out of GPU memory, exiting");
                    elwt.exit();
                }
                Err(e) => log::warn!("frame skipped: {:?}", e),
            },
            _ => {}
        },
        Event::AboutToWait => preview.window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
