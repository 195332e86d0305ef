#![cfg(target_arch = "wasm32")]
use bloch_core::{Camera, Countdown, OrbitControls, Scenery, StateVector};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod countdown;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod settings;

const CANVAS_ID: &str = "bg";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bloch-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let config = settings::read_scene_config(&document, canvas.as_ref());

    // The countdown runs on its own timer whether or not the scene comes up.
    if let Err(e) = countdown::start(
        &document,
        Countdown::new(config.target_unix_ms),
        config.countdown_interval_ms,
    ) {
        log::error!("countdown error: {:?}", e);
    }

    let canvas = canvas.ok_or_else(|| anyhow::anyhow!("missing canvas#{CANVAS_ID}"))?;
    dom::wire_canvas_resize(&canvas);

    let camera = Camera::looking_at_origin(
        config.start_distance(),
        canvas.width() as f32 / canvas.height().max(1) as f32,
    );
    let controls = Rc::new(RefCell::new(OrbitControls::new(&camera, &config)));
    events::wire_orbit_controls(&canvas, controls.clone());

    let overlay = match overlay::LabelOverlay::create(&document, config.sphere_radius) {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("labels disabled: {:?}", e);
            None
        }
    };

    let scenery = Scenery::for_config(&config);
    log::info!(
        "[scene] stars={} cubes={}",
        scenery.stars.len(),
        scenery.cubes.len()
    );
    let gpu = frame::init_gpu(&canvas, &config, &scenery).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        camera,
        controls,
        state_vector: StateVector::new(config.sphere_radius),
        overlay,
        gpu,
        group_rotation: 0.0,
        stats_since: Instant::now(),
        stats_frames: 0,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
