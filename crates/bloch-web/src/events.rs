use crate::dom::add_listener;
use crate::input::{self, DragState};
use bloch_core::OrbitControls;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Drag to orbit, wheel to zoom.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, controls: Rc<RefCell<OrbitControls>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    {
        let drag = drag.clone();
        let canvas_down = canvas.clone();
        add_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
            let at = input::pointer_css_px(&ev, &canvas_down);
            drag.borrow_mut().begin(ev.pointer_id(), at);
            let _ = canvas_down.set_pointer_capture(ev.pointer_id());
        });
    }
    {
        let drag = drag.clone();
        let controls = controls.clone();
        let canvas_move = canvas.clone();
        add_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
            let at = input::pointer_css_px(&ev, &canvas_move);
            if let Some(delta) = drag.borrow_mut().step(ev.pointer_id(), at) {
                let height = canvas_move.client_height() as f32;
                controls.borrow_mut().rotate(delta.x, delta.y, height);
            }
        });
    }
    for name in ["pointerup", "pointercancel"] {
        let drag = drag.clone();
        let canvas_up = canvas.clone();
        add_listener(canvas, name, move |ev: web::PointerEvent| {
            drag.borrow_mut().end(ev.pointer_id());
            let _ = canvas_up.release_pointer_capture(ev.pointer_id());
        });
    }
    add_listener(canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        controls.borrow_mut().zoom_wheel(input::wheel_notches(&ev));
    });
}
