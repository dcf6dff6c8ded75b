use crate::constants::POINTER_SMOOTHING;
use glam::Vec2;

/// Raw and smoothed pointer position in normalized device coordinates.
///
/// `target` follows every pointer event; `smoothed` moves toward it once per
/// frame, so fast pointer event streams never smooth more than once a frame.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub target: Vec2,
    pub smoothed: Vec2,
    pub smoothing: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            smoothed: Vec2::ZERO,
            smoothing: POINTER_SMOOTHING,
        }
    }
}

impl PointerState {
    pub fn set_target(&mut self, ndc: Vec2) {
        self.target = ndc.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    /// Update the target from viewport pixel coordinates. Ignored for an
    /// empty viewport.
    pub fn set_target_from_client(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if let Some(ndc) = client_to_ndc(x, y, width, height) {
            self.set_target(ndc);
        }
    }

    /// One smoothing step; call once per frame.
    pub fn smooth(&mut self) -> Vec2 {
        self.smoothed += (self.target - self.smoothed) * self.smoothing;
        self.smoothed
    }
}

/// Map viewport pixels to \[-1, 1\] on both axes, y pointing up.
#[inline]
pub fn client_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Option<Vec2> {
    if !(width > 0.0 && height > 0.0) {
        return None;
    }
    let nx = (x / width) * 2.0 - 1.0;
    let ny = -(y / height) * 2.0 + 1.0;
    Some(Vec2::new(nx, ny).clamp(Vec2::NEG_ONE, Vec2::ONE))
}
