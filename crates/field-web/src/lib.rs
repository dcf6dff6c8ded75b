#![cfg(target_arch = "wasm32")]
use field_core::{
    Distribution, FieldParams, FrameClock, NavigationConfig, NavigationController, ParticleField,
    PointerState, SessionSlot, StopOutcome, WEB_PARTICLE_COUNT,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod content;
mod dom;
mod events;
mod frame;

use constants::CANVAS_ID;
use content::SectionMarkup;
use events::{Listener, NavWiring};

/// Everything that must be released when the page tears the experience down.
struct Session {
    nav: Rc<RefCell<NavigationController>>,
    frame_loop: frame::FrameLoop,
    listeners: Vec<Listener>,
}

impl Session {
    fn teardown(self) {
        self.frame_loop.stop();
        let count = self.listeners.len();
        drop(self.listeners);
        self.nav.borrow_mut().shutdown();
        log::info!("[session] torn down; removed {} listeners", count);
    }
}

thread_local! {
    static SESSION: RefCell<SessionSlot<Session>> = const { RefCell::new(SessionSlot::new()) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    // Claimed before the first await so a second start or an early stop sees it
    if !SESSION.with(|s| s.borrow_mut().begin()) {
        log::warn!("[session] already running; ignoring second start");
        return Ok(());
    }
    spawn_local(async move {
        match init().await {
            Ok(session) => {
                let cancelled = SESSION.with(|s| s.borrow_mut().finish(session));
                match cancelled {
                    Some(session) => {
                        log::info!("[session] stop requested during init");
                        session.teardown();
                    }
                    None => SESSION.with(|s| {
                        if let Some(session) = s.borrow().running() {
                            session.frame_loop.start();
                        }
                    }),
                }
            }
            Err(e) => {
                SESSION.with(|s| s.borrow_mut().abort());
                log::error!("init error: {:?}", e);
            }
        }
    });
    Ok(())
}

/// Stop the render loop, remove every listener and release navigation.
#[wasm_bindgen]
pub fn stop() {
    let outcome = SESSION.with(|s| s.borrow_mut().request_stop());
    match outcome {
        StopOutcome::Teardown(session) => session.teardown(),
        StopOutcome::Deferred => log::info!("[session] init in flight; teardown deferred"),
        StopOutcome::Idle => log::warn!("[session] stop called with no active session"),
    }
}

/// Build a session. Listeners are live as soon as they are wired; the frame
/// loop is left stopped until the session is installed.
async fn init() -> anyhow::Result<Session> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Navigation and content come first; they work with or without a GPU.
    let markup = Rc::new(SectionMarkup::collect(&document)?);
    let nav_config = NavigationConfig::default();
    content::set_transition_duration(&document, nav_config.transition);
    let nav = Rc::new(RefCell::new(NavigationController::new(
        markup.sections.len(),
        nav_config,
    )?));
    let sections = nav.borrow().view();
    markup.show(&sections);
    log::info!("[session] {} sections", sections.count());

    let wiring = NavWiring {
        nav: nav.clone(),
        markup: markup.clone(),
    };
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let js = |e: JsValue| anyhow::anyhow!("{:?}", e);
    let mut listeners = vec![
        events::wire_wheel(&window, &wiring).map_err(js)?,
        events::wire_keydown(&window, &wiring).map_err(js)?,
        events::wire_pointermove(&window, pointer.clone()).map_err(js)?,
    ];
    listeners.extend(events::wire_dot_clicks(&wiring).map_err(js)?);

    // Missing canvas or GPU leaves the field dark but keeps navigation alive.
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let gpu = match &canvas {
        Some(c) => frame::init_gpu(c, WEB_PARTICLE_COUNT).await,
        None => {
            log::error!("missing #{}; particle field disabled", CANVAS_ID);
            None
        }
    };

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let field = ParticleField::seeded(
        WEB_PARTICLE_COUNT,
        Distribution::default(),
        FieldParams::default(),
        seed,
    );
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        nav: nav.clone(),
        pointer,
        field,
        clock: FrameClock::new(Instant::now()),
        gpu,
    }));
    if let Some(c) = canvas {
        listeners.push(events::wire_resize(&window, c, frame_ctx.clone()).map_err(js)?);
    }

    Ok(Session {
        nav,
        frame_loop: frame::FrameLoop::new(frame_ctx),
        listeners,
    })
}
