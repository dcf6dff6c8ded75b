use field_core::Viewport;
use web_sys as web;

#[inline]
pub fn device_pixel_ratio() -> f32 {
    web::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0)
}

/// CSS-pixel size of the window, used to normalize pointer coordinates.
pub fn window_inner_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Match the canvas backing store to its CSS size * devicePixelRatio.
///
/// The canvas never drops below 1x1, but the returned viewport carries the
/// measured size so a collapsed layout reads as degenerate.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let dpr = device_pixel_ratio() as f64;
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    Viewport::new(w_px, h_px)
}
