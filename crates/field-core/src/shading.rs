use crate::camera::{Camera, Viewport};
use crate::constants::{
    ACCENT_STRENGTH, ACCENT_TONE, BASE_POINT_SIZE, BASE_TONE, CENTER_FALLOFF,
    POINT_SIZE_MULTIPLIER, SPRITE_INNER, SPRITE_OPACITY, SPRITE_OUTER,
};
use glam::{Vec2, Vec3};

/// Per-frame values shared by every particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderUniforms {
    pub elapsed_time: f32,
    pub pointer: Vec2,
    pub section_progress: f32,
}

/// Color, size and sprite-falloff parameters. The GPU receives these through
/// [`ParticleUniforms`]; the functions below evaluate the same formulas on
/// the CPU.
#[derive(Clone, Debug)]
pub struct ShadingParams {
    pub base_tone: Vec3,
    pub accent_tone: Vec3,
    pub accent_strength: f32,
    pub center_falloff: f32,
    pub base_point_size: f32,
    pub size_multiplier: f32,
    pub sprite_inner: f32,
    pub sprite_outer: f32,
    pub opacity: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            base_tone: BASE_TONE,
            accent_tone: ACCENT_TONE,
            accent_strength: ACCENT_STRENGTH,
            center_falloff: CENTER_FALLOFF,
            base_point_size: BASE_POINT_SIZE,
            size_multiplier: POINT_SIZE_MULTIPLIER,
            sprite_inner: SPRITE_INNER,
            sprite_outer: SPRITE_OUTER,
            opacity: SPRITE_OPACITY,
        }
    }
}

impl ShadingParams {
    #[inline]
    fn center_distance(&self, position: Vec3) -> f32 {
        position.truncate().length() * self.center_falloff
    }

    /// Accent weight in `[0, accent_strength]`, oscillating with time and
    /// radius; section progress shifts the phase by up to half a period.
    pub fn accent_mix(&self, position: Vec3, time: f32, progress: f32) -> f32 {
        let d = self.center_distance(position);
        let phase = time + d + progress.clamp(0.0, 1.0) * std::f32::consts::PI;
        (phase.sin() * self.accent_strength).clamp(0.0, self.accent_strength)
    }

    pub fn point_color(&self, position: Vec3, time: f32, progress: f32) -> Vec3 {
        self.base_tone
            .lerp(self.accent_tone, self.accent_mix(position, time, progress))
    }

    /// Sprite diameter in pixels; shrinks away from the centre and never goes
    /// negative.
    pub fn point_size_px(&self, position: Vec3, pixel_ratio: f32) -> f32 {
        let d = self.center_distance(position);
        (self.base_point_size - d).max(0.0) * self.size_multiplier * pixel_ratio
    }

    /// Opacity at `r` (0 at the sprite centre, 0.5 at its edge).
    pub fn sprite_alpha(&self, r: f32) -> f32 {
        (1.0 - smoothstep(self.sprite_inner, self.sprite_outer, r)) * self.opacity
    }
}

#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// GPU layout of the particle uniform block (see `shaders/particles.wgsl`).
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub pointer: [f32; 2],
    pub time: f32,
    pub progress: f32,
    pub center_falloff: f32,
    pub _pad: f32,
    pub base_tone: [f32; 4],
    pub accent_tone: [f32; 4],
    /// base size, size multiplier, pixel ratio, accent strength
    pub point: [f32; 4],
    /// inner radius, outer radius, opacity, unused
    pub sprite: [f32; 4],
}

impl ParticleUniforms {
    pub fn pack(
        camera: &Camera,
        viewport: Viewport,
        pixel_ratio: f32,
        uniforms: &RenderUniforms,
        shading: &ShadingParams,
    ) -> Self {
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            resolution: [viewport.width.max(1) as f32, viewport.height.max(1) as f32],
            pointer: uniforms.pointer.to_array(),
            time: uniforms.elapsed_time,
            progress: uniforms.section_progress.clamp(0.0, 1.0),
            center_falloff: shading.center_falloff,
            _pad: 0.0,
            base_tone: shading.base_tone.extend(1.0).to_array(),
            accent_tone: shading.accent_tone.extend(1.0).to_array(),
            point: [
                shading.base_point_size,
                shading.size_multiplier,
                pixel_ratio.max(0.0),
                shading.accent_strength,
            ],
            sprite: [shading.sprite_inner, shading.sprite_outer, shading.opacity, 0.0],
        }
    }
}
