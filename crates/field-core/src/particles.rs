use crate::constants::{
    ATTRACTION_GAIN, ATTRACTION_RADIUS, FIELD_RADIUS, INITIAL_JITTER, SPRING_GAIN,
    VELOCITY_DAMPING,
};
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Where particles (and therefore their origins) start out.
#[derive(Clone, Copy, Debug)]
pub enum Distribution {
    /// Radius uniform in `[0, radius)`, direction uniform on the sphere.
    /// Denser toward the centre than a uniform-in-volume fill.
    Ball { radius: f32 },
    /// Uniform inside an axis-aligned box centred on the origin.
    Box { half_extents: Vec3 },
}

impl Default for Distribution {
    fn default() -> Self {
        Distribution::Ball {
            radius: FIELD_RADIUS,
        }
    }
}

impl Distribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        match *self {
            Distribution::Ball { radius } => {
                let r = rng.gen::<f32>() * radius;
                let theta = rng.gen::<f32>() * std::f32::consts::TAU;
                let phi = (rng.gen::<f32>() * 2.0 - 1.0).acos();
                Vec3::new(
                    r * phi.sin() * theta.cos(),
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                )
            }
            Distribution::Box { half_extents } => Vec3::new(
                (rng.gen::<f32>() * 2.0 - 1.0) * half_extents.x,
                (rng.gen::<f32>() * 2.0 - 1.0) * half_extents.y,
                (rng.gen::<f32>() * 2.0 - 1.0) * half_extents.z,
            ),
        }
    }
}

/// Pointer pull applied to particles near the projected pointer.
#[derive(Clone, Copy, Debug)]
pub struct Attraction {
    /// Capture radius in world units, measured in the XY plane.
    pub radius: f32,
    pub gain: f32,
}

impl Default for Attraction {
    fn default() -> Self {
        Self {
            radius: ATTRACTION_RADIUS,
            gain: ATTRACTION_GAIN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub spring_gain: f32,
    /// Per-frame velocity multiplier; must stay below 1.
    pub damping: f32,
    pub initial_jitter: f32,
    pub attraction: Option<Attraction>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            spring_gain: SPRING_GAIN,
            damping: VELOCITY_DAMPING,
            initial_jitter: INITIAL_JITTER,
            attraction: Some(Attraction::default()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub origin: Vec3,
}

impl Particle {
    #[inline]
    pub fn displacement(&self) -> f32 {
        self.position.distance(self.origin)
    }
}

/// Fixed-size damped-spring particle set.
///
/// Stored as parallel arrays so `positions()` can go straight into a GPU
/// vertex buffer. `advance` needs `&mut self`, so a reader only ever sees the
/// positions of one complete frame.
pub struct ParticleField {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    origins: Vec<Vec3>,
    params: FieldParams,
}

impl ParticleField {
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        distribution: Distribution,
        params: FieldParams,
        rng: &mut R,
    ) -> Self {
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        let jitter = params.initial_jitter;
        for _ in 0..count {
            positions.push(distribution.sample(rng));
            velocities.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * jitter,
                (rng.gen::<f32>() - 0.5) * jitter,
                (rng.gen::<f32>() - 0.5) * jitter,
            ));
        }
        let origins = positions.clone();
        log::info!("[field] {} particles, {:?}", count, distribution);
        Self {
            positions,
            velocities,
            origins,
            params,
        }
    }

    pub fn seeded(count: usize, distribution: Distribution, params: FieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::initialize(count, distribution, params, &mut rng)
    }

    /// Advance every particle by one frame.
    ///
    /// `pointer` is the smoothed pointer already projected into world XY;
    /// `None` (or no configured attraction) leaves only the spring acting.
    pub fn advance(&mut self, pointer: Option<Vec2>) {
        let k = self.params.spring_gain;
        let damping = self.params.damping;
        let pull = self.params.attraction.zip(pointer);
        for ((pos, vel), origin) in self
            .positions
            .iter_mut()
            .zip(self.velocities.iter_mut())
            .zip(self.origins.iter())
        {
            *pos += *vel;
            let mut accel = (*origin - *pos) * k;
            if let Some((attraction, p)) = pull {
                let to_pointer = p - pos.truncate();
                if to_pointer.length_squared() <= attraction.radius * attraction.radius {
                    accel += (to_pointer * attraction.gain).extend(0.0);
                }
            }
            *vel = (*vel + accel) * damping;
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn particle(&self, index: usize) -> Option<Particle> {
        Some(Particle {
            position: *self.positions.get(index)?,
            velocity: self.velocities[index],
            origin: self.origins[index],
        })
    }

    pub fn particles(&self) -> impl Iterator<Item = Particle> + '_ {
        self.positions
            .iter()
            .zip(&self.velocities)
            .zip(&self.origins)
            .map(|((&position, &velocity), &origin)| Particle {
                position,
                velocity,
                origin,
            })
    }

    /// Largest distance of any particle from its origin.
    pub fn max_displacement(&self) -> f32 {
        self.particles()
            .map(|p| p.displacement())
            .fold(0.0, f32::max)
    }
}
