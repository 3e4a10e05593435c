use cgmath::Vector2;
use rand::Rng;

use crate::input::SurfaceDimensions;

pub const TYPE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleType {
    Red,
    Green,
    Blue,
    Yellow,
}

impl ParticleType {
    pub const ALL: [ParticleType; TYPE_COUNT] = [
        ParticleType::Red,
        ParticleType::Green,
        ParticleType::Blue,
        ParticleType::Yellow,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..TYPE_COUNT)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub kind: ParticleType,
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
}

impl Particle {
    pub fn new(kind: ParticleType, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Vector2::new(x, y),
            velocity: Vector2::new(0.0, 0.0),
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Vector2::new(vx, vy);
        self
    }
}

/// The live particle population.
///
/// Indices are stable for the duration of a frame; pairwise loops rely on
/// `i < j` ordering to visit each pair once. The whole collection is replaced
/// on every reset.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Discards the current population and spawns `count` particles with
    /// uniformly random types and positions inside `dims`.
    pub fn reset<R: Rng + ?Sized>(&mut self, count: usize, dims: SurfaceDimensions, rng: &mut R) {
        self.particles = (0..count)
            .map(|_| {
                let kind = ParticleType::random(rng);
                let x = random_coordinate(rng, dims.width);
                let y = random_coordinate(rng, dims.height);
                Particle::new(kind, x, y)
            })
            .collect();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }
}

fn random_coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn reset_replaces_population() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut store = ParticleStore::default();

        store.reset(360, SurfaceDimensions::new(800.0, 600.0), &mut rng);
        assert_eq!(store.len(), 360);

        store.reset(360, SurfaceDimensions::new(1024.0, 768.0), &mut rng);
        assert_eq!(store.len(), 360);
        for p in store.iter() {
            assert!((0.0..1024.0).contains(&p.position.x));
            assert!((0.0..768.0).contains(&p.position.y));
            assert_eq!(p.velocity, Vector2::new(0.0, 0.0));
        }
    }

    #[test]
    fn reset_uses_every_type() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut store = ParticleStore::default();
        store.reset(400, SurfaceDimensions::new(100.0, 100.0), &mut rng);

        for kind in ParticleType::ALL {
            assert!(store.iter().any(|p| p.kind == kind), "{kind:?} never spawned");
        }
    }

    #[test]
    fn zero_sized_surface_spawns_at_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut store = ParticleStore::default();
        store.reset(10, SurfaceDimensions::new(0.0, 50.0), &mut rng);

        assert_eq!(store.len(), 10);
        assert!(store.iter().all(|p| p.position.x == 0.0));
    }
}
