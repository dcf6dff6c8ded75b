pub mod keyboard;
pub mod listener;
pub mod pointer;

pub use keyboard::wire_keydown;
pub use listener::Listener;
pub use pointer::{wire_pointermove, wire_resize, wire_wheel};

use crate::content::SectionMarkup;
use field_core::{NavOutcome, NavigationController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Handles shared by every navigation input.
#[derive(Clone)]
pub struct NavWiring {
    pub nav: Rc<RefCell<NavigationController>>,
    pub markup: Rc<SectionMarkup>,
}

impl NavWiring {
    /// Push an accepted transition to the markup; rejected requests are
    /// dropped with a debug log.
    pub fn apply(&self, outcome: NavOutcome) {
        match outcome {
            Ok(_) => {
                let view = self.nav.borrow().view();
                self.markup.show(&view);
            }
            Err(reason) => log::debug!("[nav] ignored: {}", reason),
        }
    }
}

/// Clicking dot `i` jumps straight to section `i`.
pub fn wire_dot_clicks(w: &NavWiring) -> Result<Vec<Listener>, JsValue> {
    w.markup
        .dots
        .iter()
        .enumerate()
        .map(|(i, dot)| {
            let w = w.clone();
            let target: &web::EventTarget = dot;
            Listener::new(target, "click", move |_ev: web::Event| {
                let outcome = w.nav.borrow_mut().request_index(i);
                w.apply(outcome);
            })
        })
        .collect()
}
