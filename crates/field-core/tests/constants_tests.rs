// Host-side tests for constants and their relationships.

use field_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn navigation_timing_is_consistent() {
    // The lock must outlast the visual transition
    assert!(NAV_COOLDOWN_MS > SECTION_TRANSITION_MS);
    assert!(SECTION_TRANSITION_MS > 0);
    assert!(DEFAULT_SECTION_COUNT >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_dynamics_are_stable() {
    // Damping below 1 guarantees decay back to the origin
    assert!(VELOCITY_DAMPING > 0.0 && VELOCITY_DAMPING < 1.0);
    assert!(SPRING_GAIN > 0.0 && SPRING_GAIN < 1.0);
    assert!(ATTRACTION_GAIN >= 0.0 && ATTRACTION_GAIN < SPRING_GAIN);
    assert!(ATTRACTION_RADIUS > 0.0);
    assert!(INITIAL_JITTER >= 0.0);
    assert!(FIELD_RADIUS > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_counts_are_reasonable() {
    assert!(WEB_PARTICLE_COUNT > 0);
    assert!(NATIVE_PARTICLE_COUNT >= WEB_PARTICLE_COUNT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pointer_smoothing_is_a_fraction() {
    assert!(POINTER_SMOOTHING > 0.0 && POINTER_SMOOTHING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_field() {
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZNEAR < CAMERA_ZFAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    // Whole ball sits in front of the near plane
    assert!(CAMERA_Z - FIELD_RADIUS > CAMERA_ZNEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn shading_parameters_are_in_range() {
    assert!(ACCENT_STRENGTH > 0.0 && ACCENT_STRENGTH <= 1.0);
    assert!(SPRITE_INNER < SPRITE_OUTER && SPRITE_OUTER <= 0.5);
    assert!(SPRITE_OPACITY > 0.0 && SPRITE_OPACITY <= 1.0);
    assert!(BASE_POINT_SIZE > 0.0 && POINT_SIZE_MULTIPLIER > 0.0);
    for c in ACCENT_TONE.to_array().into_iter().chain(BASE_TONE.to_array()) {
        assert!((0.0..=1.0).contains(&c));
    }
}
