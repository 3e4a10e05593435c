//! Pairwise force laws.
//!
//! Two representations exist and are kept apart on purpose: the scalar form
//! only feeds link coloring, the vector form drives the integrator. Their
//! distance gates differ and must not be merged.

use cgmath::{InnerSpace, Vector2, Zero};
use rand::Rng;

use crate::config::Config;
use crate::particle::{Particle, ParticleType, TYPE_COUNT};

/// Per type-pair attraction coefficients.
///
/// `get(a, b)` is the coefficient of the force `a` feels from `b`; the matrix
/// is not symmetric in general.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceMatrix {
    rows: [[f32; TYPE_COUNT]; TYPE_COUNT],
    scaling: f32,
}

impl ForceMatrix {
    /// Draws a scaling factor in `[0.1, 1.0)` and fills every entry with a
    /// uniform value in `[-1, 1)` times that factor.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let scaling = rng.gen_range(0.0f32..1.0) * 0.9 + 0.1;
        let mut rows = [[0.0; TYPE_COUNT]; TYPE_COUNT];
        for row in rows.iter_mut() {
            for value in row.iter_mut() {
                *value = (rng.gen_range(0.0f32..1.0) * 2.0 - 1.0) * scaling;
            }
        }
        Self { rows, scaling }
    }

    pub fn from_rows(rows: [[f32; TYPE_COUNT]; TYPE_COUNT]) -> Self {
        Self { rows, scaling: 1.0 }
    }

    pub fn get(&self, a: ParticleType, b: ParticleType) -> f32 {
        self.rows[a.index()][b.index()]
    }

    pub fn scaling(&self) -> f32 {
        self.scaling
    }

    pub fn rows(&self) -> &[[f32; TYPE_COUNT]; TYPE_COUNT] {
        &self.rows
    }
}

/// Signed interaction strength between `a` and `b`, clamped to `[-1, 1]`.
///
/// Sum of the inter-type term (gated by `inter_type_max_distance`) and the
/// short-range repulsion (gated by `repulsive_max_distance`).
pub fn scalar_force(a: &Particle, b: &Particle, matrix: &ForceMatrix, config: &Config) -> f32 {
    let distance = (b.position - a.position).magnitude();
    let mut force = 0.0;

    if distance < config.inter_type_max_distance {
        force += (config.inter_type_max_distance - distance) / config.inter_type_max_distance
            * matrix.get(a.kind, b.kind)
            * config.inter_type_strength;
    }

    if distance < config.repulsive_max_distance {
        force -= (config.repulsive_max_distance - distance) / config.repulsive_max_distance
            * config.repulsive_strength;
    }

    force.clamp(-1.0, 1.0)
}

/// Force `a` receives from `b`; `b` receives the exact negation.
///
/// Zero unless `particle_size * 2 < d < force_threshold`. The lower gate keeps
/// overlapping particles away from the `1 / d` singularity.
pub fn vector_force(a: &Particle, b: &Particle, matrix: &ForceMatrix, config: &Config) -> Vector2<f32> {
    let delta = b.position - a.position;
    let distance = delta.magnitude();

    if distance < config.force_threshold && distance > config.particle_size * 2.0 {
        delta * (matrix.get(a.kind, b.kind) / distance)
    } else {
        Vector2::zero()
    }
}
