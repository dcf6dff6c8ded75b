//! Camera and viewport types shared by both front-ends.
//!
//! These avoid platform-specific APIs. The renderer owns one [`Camera`] and
//! re-runs [`Camera::configure`] on every resize; the frame tick also uses it
//! to project the pointer into world space for the particle simulation.

use crate::constants::{CAMERA_FOV_DEG, CAMERA_Z, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec2, Vec3};

/// Output size in physical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height, `None` when either side is zero.
    #[inline]
    pub fn aspect(&self) -> Option<f32> {
        (!self.is_degenerate()).then(|| self.width as f32 / self.height as f32)
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Adopt the viewport's aspect ratio. Degenerate sizes are skipped and the
    /// previous aspect stays in effect; returns whether anything changed.
    pub fn configure(&mut self, viewport: Viewport) -> bool {
        match viewport.aspect() {
            Some(aspect) => {
                self.aspect = aspect;
                true
            }
            None => {
                log::debug!(
                    "[camera] ignoring degenerate viewport {}x{}",
                    viewport.width,
                    viewport.height
                );
                false
            }
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Half width/height of the visible area on the plane through `target`
    /// facing the camera.
    pub fn target_plane_half_extents(&self) -> Vec2 {
        let distance = self.eye.distance(self.target);
        let half_h = (self.fovy_radians * 0.5).tan() * distance;
        Vec2::new(half_h * self.aspect, half_h)
    }

    /// Map a pointer in normalized device coordinates onto the target plane.
    #[inline]
    pub fn project_pointer(&self, ndc: Vec2) -> Vec2 {
        self.target.truncate() + ndc * self.target_plane_half_extents()
    }
}
