use glam::Vec2;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous sample for the dragging pointer.
    pub fn step(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}

/// Pointer position in canvas CSS pixels.
#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Normalize a wheel delta to notches; pixel and page modes differ wildly.
#[inline]
pub fn wheel_notches(ev: &web::WheelEvent) -> f32 {
    let dy = ev.delta_y() as f32;
    match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_PIXEL => dy / 100.0,
        web::WheelEvent::DOM_DELTA_LINE => dy / 3.0,
        _ => dy.signum(),
    }
}
