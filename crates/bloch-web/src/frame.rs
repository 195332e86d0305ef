use crate::overlay::LabelOverlay;
use bloch_core::{Camera, OrbitControls, SceneConfig, Scenery, StateVector, GROUP_SPIN_PER_FRAME};
use bloch_render::{FrameScene, Renderer};
use instant::Instant;
use std::cell::RefCell;
use std::f32::consts::TAU;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_PERIOD: Duration = Duration::from_secs(10);

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Camera,
    pub controls: Rc<RefCell<OrbitControls>>,
    pub state_vector: StateVector,
    pub overlay: Option<LabelOverlay>,
    pub gpu: Option<Renderer<'a>>,

    pub group_rotation: f32,
    pub stats_since: Instant,
    pub stats_frames: u32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now_ms = js_sys::Date::now();
        let w = self.canvas.width();
        let h = self.canvas.height();

        self.camera.set_viewport(w as f32, h as f32);
        self.controls.borrow_mut().update(&mut self.camera);
        let view_proj = self.camera.view_projection();

        let tip = self.state_vector.tip_at(now_ms);
        self.group_rotation = (self.group_rotation + GROUP_SPIN_PER_FRAME).rem_euclid(TAU);

        if let Some(overlay) = &self.overlay {
            overlay.update(
                view_proj,
                self.canvas.client_width() as f32,
                self.canvas.client_height() as f32,
            );
        }

        if let Some(g) = &mut self.gpu {
            g.resize(w, h);
            let scene = FrameScene {
                view_proj,
                group_rotation: self.group_rotation,
                tip,
            };
            if let Err(e) = g.render(&scene) {
                log::error!("render error: {:?}", e);
            }
        }

        self.stats_frames += 1;
        let elapsed = self.stats_since.elapsed();
        if elapsed >= STATS_PERIOD {
            log::debug!(
                "[frame] {:.1} fps, camera distance {:.1}",
                self.stats_frames as f32 / elapsed.as_secs_f32(),
                self.controls.borrow().distance()
            );
            self.stats_since = Instant::now();
            self.stats_frames = 0;
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &SceneConfig,
    scenery: &Scenery,
) -> Option<Renderer<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("WebGPU surface error: {:?}", e);
            return None;
        }
    };
    match Renderer::new(
        &instance,
        surface,
        canvas.width(),
        canvas.height(),
        config,
        scenery,
    )
    .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
