//! Page-level overrides for [`SceneConfig`], read from data attributes.
//!
//! `<div id="countdown-timer" data-target="2025-10-28T00:00:00Z">` moves the
//! countdown target; `<canvas id="bg" data-seed="7">` pins the star layout.

use crate::countdown::TIMER_ID;
use bloch_core::{Countdown, SceneConfig};
use web_sys as web;

pub fn read_scene_config(
    document: &web::Document,
    canvas: Option<&web::HtmlCanvasElement>,
) -> SceneConfig {
    let mut config = SceneConfig::default();

    if let Some(raw) = document
        .get_element_by_id(TIMER_ID)
        .and_then(|el| el.get_attribute("data-target"))
    {
        match Countdown::from_parsed_millis(&raw, js_sys::Date::parse(&raw)) {
            Ok(c) => config.target_unix_ms = c.target_unix_ms,
            Err(e) => log::warn!("[settings] {e}; keeping default target"),
        }
    }

    if let Some(raw) = canvas.and_then(|c| c.get_attribute("data-seed")) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(e) => log::warn!("[settings] ignoring data-seed={raw:?}: {e}"),
        }
    }

    if let Err(e) = config.validate() {
        log::warn!("[settings] {e}; falling back to defaults");
        return SceneConfig::default();
    }
    config
}
