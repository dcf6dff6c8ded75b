use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::navigation::NavigationController;
use crate::particles::ParticleField;
use crate::pointer::PointerState;
use crate::section::section_progress;
use crate::shading::RenderUniforms;
use instant::Instant;

/// CPU half of one display tick: lock expiry, pointer smoothing, simulation,
/// then uniforms.
///
/// `camera` is `None` while there is nothing to draw into. Navigation and the
/// pointer still advance in that case, but the field holds still and no
/// uniforms come back.
pub fn advance_frame(
    nav: &mut NavigationController,
    pointer: &mut PointerState,
    field: &mut ParticleField,
    clock: &mut FrameClock,
    camera: Option<&Camera>,
    now: Instant,
) -> Option<RenderUniforms> {
    let timing = clock.tick(now);
    nav.tick(now);
    let smoothed = pointer.smooth();

    let camera = camera?;
    field.advance(Some(camera.project_pointer(smoothed)));

    Some(RenderUniforms {
        elapsed_time: timing.shader_time,
        pointer: smoothed,
        section_progress: section_progress(nav.current(), nav.section_count()),
    })
}
