// Host-side tests for the damped-spring particle field.

use field_core::{
    Attraction, Distribution, FieldParams, ParticleField, FIELD_RADIUS, FIELD_SEED,
};
use glam::{Vec2, Vec3};

fn still_params() -> FieldParams {
    FieldParams {
        initial_jitter: 0.0,
        ..FieldParams::default()
    }
}

fn point_field(params: FieldParams) -> ParticleField {
    // Zero-sized box puts every particle at the world origin
    ParticleField::seeded(
        4,
        Distribution::Box {
            half_extents: Vec3::ZERO,
        },
        params,
        FIELD_SEED,
    )
}

#[test]
fn field_has_requested_count() {
    let field = ParticleField::seeded(
        1000,
        Distribution::default(),
        FieldParams::default(),
        FIELD_SEED,
    );
    assert_eq!(field.len(), 1000);
    assert_eq!(field.positions().len(), 1000);
    assert!(!field.is_empty());
}

#[test]
fn particles_start_at_their_origin() {
    let field = ParticleField::seeded(
        200,
        Distribution::default(),
        FieldParams::default(),
        FIELD_SEED,
    );
    for p in field.particles() {
        assert_eq!(p.position, p.origin);
        assert!(p.velocity.abs().max_element() <= 0.005 + f32::EPSILON);
    }
}

#[test]
fn ball_distribution_stays_inside_radius() {
    let field = ParticleField::seeded(
        2000,
        Distribution::default(),
        FieldParams::default(),
        7,
    );
    for p in field.particles() {
        assert!(
            p.origin.length() < FIELD_RADIUS + 1e-4,
            "origin {:?} outside ball",
            p.origin
        );
    }
}

#[test]
fn box_distribution_stays_inside_extents() {
    let half = Vec3::new(3.0, 2.0, 1.0);
    let field = ParticleField::seeded(
        2000,
        Distribution::Box { half_extents: half },
        FieldParams::default(),
        7,
    );
    for p in field.particles() {
        assert!(p.origin.abs().cmple(half).all(), "origin {:?}", p.origin);
    }
}

#[test]
fn same_seed_gives_same_field() {
    let a = ParticleField::seeded(50, Distribution::default(), FieldParams::default(), 99);
    let b = ParticleField::seeded(50, Distribution::default(), FieldParams::default(), 99);
    let c = ParticleField::seeded(50, Distribution::default(), FieldParams::default(), 100);
    assert_eq!(a.positions(), b.positions());
    assert_ne!(a.positions(), c.positions());
}

#[test]
fn displacement_decays_without_pointer() {
    let mut field = ParticleField::seeded(
        500,
        Distribution::default(),
        FieldParams::default(),
        FIELD_SEED,
    );
    let mut peak = 0.0f32;
    for _ in 0..3000 {
        field.advance(None);
        peak = peak.max(field.max_displacement());
    }
    // Jitter of +-0.005 per axis never carries a particle far
    assert!(peak < 0.5, "peak displacement {}", peak);
    assert!(
        field.max_displacement() < 1e-4,
        "residual displacement {}",
        field.max_displacement()
    );
}

#[test]
fn origins_never_change() {
    let mut field = ParticleField::seeded(
        100,
        Distribution::default(),
        FieldParams::default(),
        FIELD_SEED,
    );
    let before: Vec<Vec3> = field.particles().map(|p| p.origin).collect();
    for _ in 0..100 {
        field.advance(Some(Vec2::new(0.5, -0.5)));
    }
    let after: Vec<Vec3> = field.particles().map(|p| p.origin).collect();
    assert_eq!(before, after);
}

#[test]
fn resting_particles_stay_put_without_pointer() {
    let mut field = point_field(still_params());
    for _ in 0..10 {
        field.advance(None);
    }
    assert_eq!(field.max_displacement(), 0.0);
}

#[test]
fn pointer_within_radius_pulls_particles() {
    let mut field = point_field(still_params());
    let pointer = Vec2::new(1.0, 0.0);
    field.advance(Some(pointer));
    field.advance(Some(pointer));
    for p in field.particles() {
        assert!(p.position.x > 0.0, "particle not pulled: {:?}", p.position);
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.position.z, 0.0);
    }
}

#[test]
fn pointer_outside_radius_has_no_effect() {
    let mut field = point_field(still_params());
    for _ in 0..10 {
        field.advance(Some(Vec2::new(5.0, 0.0)));
    }
    assert_eq!(field.max_displacement(), 0.0);
}

#[test]
fn attraction_can_be_disabled() {
    let params = FieldParams {
        attraction: None,
        ..still_params()
    };
    let mut field = point_field(params);
    for _ in 0..10 {
        field.advance(Some(Vec2::new(0.5, 0.5)));
    }
    assert_eq!(field.max_displacement(), 0.0);
}

#[test]
fn spring_holds_particles_near_a_steady_pointer() {
    let params = FieldParams {
        attraction: Some(Attraction {
            radius: 1.5,
            gain: 0.0005,
        }),
        ..still_params()
    };
    let mut field = point_field(params);
    for _ in 0..3000 {
        field.advance(Some(Vec2::new(1.0, 0.0)));
    }
    // Equilibrium where spring and pull balance: x = g / (k + g)
    let expected = 0.0005 / (0.002 + 0.0005);
    for p in field.particles() {
        assert!(
            (p.position.x - expected).abs() < 1e-3,
            "x = {}, expected {}",
            p.position.x,
            expected
        );
    }
}

#[test]
fn empty_field_is_allowed() {
    let mut field =
        ParticleField::seeded(0, Distribution::default(), FieldParams::default(), FIELD_SEED);
    field.advance(Some(Vec2::ZERO));
    assert!(field.is_empty());
    assert_eq!(field.max_displacement(), 0.0);
    assert!(field.particle(0).is_none());
}
