use super::{Listener, NavWiring};
use crate::dom;
use crate::frame::FrameContext;
use field_core::{Direction, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Pointer moves only record the raw target; smoothing runs in the frame tick.
pub fn wire_pointermove(
    window: &web::Window,
    pointer: Rc<RefCell<PointerState>>,
) -> Result<Listener, JsValue> {
    let win = window.clone();
    Listener::new(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (width, height) = dom::window_inner_size(&win);
        pointer.borrow_mut().set_target_from_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            width,
            height,
        );
    })
}

/// The wheel never scrolls the document; its vertical sign picks a step.
pub fn wire_wheel(window: &web::Window, w: &NavWiring) -> Result<Listener, JsValue> {
    let w = w.clone();
    Listener::non_passive(window, "wheel", move |ev: web::Event| {
        ev.prevent_default();
        let Some(ev) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        if let Some(direction) = Direction::from_wheel_delta(ev.delta_y()) {
            let outcome = w.nav.borrow_mut().request_step(direction);
            w.apply(outcome);
        }
    })
}

/// Resize the canvas backing store and reproject synchronously.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    frame_ctx: Rc<RefCell<FrameContext>>,
) -> Result<Listener, JsValue> {
    Listener::new(window, "resize", move |_ev: web::Event| {
        let viewport = dom::sync_canvas_backing_size(&canvas);
        let mut ctx = frame_ctx.borrow_mut();
        if let Some(gpu) = ctx.gpu.as_mut() {
            gpu.set_pixel_ratio(dom::device_pixel_ratio());
            gpu.configure(viewport);
        }
    })
}
