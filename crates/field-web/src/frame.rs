use crate::dom;
use field_core::{
    advance_frame, FrameClock, NavigationController, ParticleField, ParticleRenderer,
    PointerState,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub nav: Rc<RefCell<NavigationController>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub field: ParticleField,
    pub clock: FrameClock,
    pub gpu: Option<ParticleRenderer<'static>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let uniforms = advance_frame(
            &mut self.nav.borrow_mut(),
            &mut self.pointer.borrow_mut(),
            &mut self.field,
            &mut self.clock,
            self.gpu.as_ref().map(|g| g.camera()),
            Instant::now(),
        );

        // No drawing surface yet (or GPU init failed): nothing to animate.
        let (Some(uniforms), Some(gpu)) = (uniforms, self.gpu.as_mut()) else {
            return;
        };
        match gpu.render(self.field.positions(), &uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure_surface();
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    capacity: usize,
) -> Option<ParticleRenderer<'static>> {
    let viewport = dom::sync_canvas_backing_size(canvas);
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("WebGPU surface error: {:?}", e);
            return None;
        }
    };
    match ParticleRenderer::new(&instance, surface, viewport, dom::device_pixel_ratio(), capacity)
        .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// requestAnimationFrame-driven loop with an explicit lifecycle.
///
/// `stop` cancels the pending frame; dropping the loop releases the tick
/// closure (which only holds a weak reference to itself).
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn new(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(false));

        let tick_weak = Rc::downgrade(&tick);
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            schedule(&tick_weak, &handle_tick);
        }) as Box<dyn FnMut()>));

        Self {
            tick,
            handle,
            running,
        }
    }

    pub fn start(&self) {
        if self.running.replace(true) {
            return;
        }
        schedule(&Rc::downgrade(&self.tick), &self.handle);
        log::info!("[frame] loop started");
    }

    pub fn stop(&self) {
        let was_running = self.running.replace(false);
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        if was_running {
            log::info!("[frame] loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(tick: &Weak<RefCell<Option<Closure<dyn FnMut()>>>>, handle: &Cell<Option<i32>>) {
    let Some(cell) = tick.upgrade() else {
        return;
    };
    let slot = cell.borrow();
    let Some(closure) = slot.as_ref() else {
        return;
    };
    if let Some(w) = web::window() {
        match w.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => handle.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}
