use cgmath::{InnerSpace, Vector2, Zero};

use crate::config::Config;
use crate::forces::{ForceMatrix, vector_force};
use crate::input::{PointerState, SurfaceDimensions};
use crate::particle::Particle;

/// Repulsion from the pointer, zero outside `0 < d < mouse_radius`.
pub fn pointer_force(particle: &Particle, pointer: PointerState, config: &Config) -> Vector2<f32> {
    let Some(pointer) = pointer else {
        return Vector2::zero();
    };

    let delta = particle.position - pointer;
    let distance = delta.magnitude();

    if distance < config.mouse_radius && distance > 0.0 {
        delta * (config.mouse_force / distance)
    } else {
        Vector2::zero()
    }
}

pub fn apply_force(particle: &mut Particle, force: Vector2<f32>, config: &Config) {
    particle.velocity += force * config.force_scale;
}

/// Adds pairwise and pointer forces to every velocity.
///
/// Each unordered pair is visited once; the later particle receives the exact
/// negation of the force on the earlier one. Positions are not touched, so all
/// forces see the same configuration.
pub fn accumulate_forces(
    particles: &mut [Particle],
    matrix: &ForceMatrix,
    pointer: PointerState,
    config: &Config,
) {
    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let particle = &mut head[i];

        for other in tail.iter_mut() {
            let force = vector_force(particle, other, matrix, config);
            apply_force(particle, force, config);
            apply_force(other, -force, config);
        }

        let repulsion = pointer_force(particle, pointer, config);
        apply_force(particle, repulsion, config);
    }
}

/// Damps an over-speed particle, moves it and wraps it into the surface.
///
/// The cap decays rather than clamps: a particle above `max_speed` loses a
/// fixed fraction of its velocity per frame.
pub fn advance(particle: &mut Particle, surface: SurfaceDimensions, config: &Config) {
    if particle.velocity.magnitude() > config.max_speed {
        particle.velocity *= config.deceleration_factor;
    }

    particle.position += particle.velocity;
    particle.position.x = wrap_axis(particle.position.x, surface.width);
    particle.position.y = wrap_axis(particle.position.y, surface.height);
}

/// Maps `value` into `[0, extent)`.
///
/// A single add or subtract covers every in-simulation case; the remainder
/// fallback handles larger overshoots and float results landing on `extent`.
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 {
        return 0.0;
    }

    let mut wrapped = value;
    if wrapped < 0.0 {
        wrapped += extent;
    } else if wrapped >= extent {
        wrapped -= extent;
    }

    if !(0.0..extent).contains(&wrapped) {
        wrapped = wrapped.rem_euclid(extent);
        if wrapped >= extent {
            wrapped = 0.0;
        }
    }
    wrapped
}

/// One integration step: forces, then damping, motion and wrap.
pub fn step(
    particles: &mut [Particle],
    matrix: &ForceMatrix,
    pointer: PointerState,
    surface: SurfaceDimensions,
    config: &Config,
) {
    accumulate_forces(particles, matrix, pointer, config);
    for particle in particles.iter_mut() {
        advance(particle, surface, config);
    }
}
