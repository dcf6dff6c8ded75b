use super::{Listener, NavWiring};
use field_core::Direction;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Arrow and page keys step between sections. Other keys keep their default
/// browser behavior.
pub fn wire_keydown(window: &web::Window, w: &NavWiring) -> Result<Listener, JsValue> {
    let w = w.clone();
    Listener::new(window, "keydown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if let Some(direction) = Direction::from_key(&ev.key()) {
            ev.prevent_default();
            let outcome = w.nav.borrow_mut().request_step(direction);
            w.apply(outcome);
        }
    })
}
