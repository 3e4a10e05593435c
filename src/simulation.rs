use log::{debug, info, trace};
use rand::{SeedableRng, rngs::StdRng};

use crate::config::Config;
use crate::forces::ForceMatrix;
use crate::input::{PointerState, SharedInputs, SurfaceDimensions};
use crate::integrator;
use crate::particle::{Particle, ParticleStore};
use crate::render::{RenderStats, Surface, draw_frame};

/// Everything one simulation instance owns.
///
/// The force matrix is drawn once at construction and survives every reset;
/// only the particle population is regenerated.
pub struct Simulation {
    config: Config,
    matrix: ForceMatrix,
    particles: ParticleStore,
    surface: SurfaceDimensions,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: Config, surface: SurfaceDimensions) -> Self {
        Self::with_rng(config, surface, StdRng::from_entropy())
    }

    pub fn with_seed(config: Config, surface: SurfaceDimensions, seed: u64) -> Self {
        Self::with_rng(config, surface, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, surface: SurfaceDimensions, mut rng: StdRng) -> Self {
        let matrix = ForceMatrix::random(&mut rng);
        debug!("force matrix (scaling {:.3}): {:?}", matrix.scaling(), matrix.rows());

        let mut simulation = Self {
            config,
            matrix,
            particles: ParticleStore::default(),
            surface,
            rng,
        };
        simulation.reset(surface);
        simulation
    }

    /// Builds a simulation around a fixed matrix and population.
    pub fn from_parts(
        config: Config,
        matrix: ForceMatrix,
        particles: Vec<Particle>,
        surface: SurfaceDimensions,
        seed: u64,
    ) -> Self {
        Self {
            config,
            matrix,
            particles: ParticleStore::from_particles(particles),
            surface,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replaces the whole population with fresh particles inside `surface`.
    pub fn reset(&mut self, surface: SurfaceDimensions) {
        info!(
            "populating {} particles on a {}x{} surface",
            self.config.particle_count, surface.width, surface.height
        );
        self.surface = surface;
        self.particles
            .reset(self.config.particle_count, surface, &mut self.rng);
    }

    pub fn step(&mut self, pointer: PointerState) {
        integrator::step(
            self.particles.as_mut_slice(),
            &self.matrix,
            pointer,
            self.surface,
            &self.config,
        );
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, pointer: PointerState) -> RenderStats {
        draw_frame(surface, self.particles.as_slice(), &self.matrix, pointer, &self.config)
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    pub fn matrix(&self) -> &ForceMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surface(&self) -> SurfaceDimensions {
        self.surface
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub reset: bool,
    pub stats: RenderStats,
}

/// Runs one frame per host tick: clear, integrate, draw.
///
/// Host inputs are snapshotted once at the start of a frame. Stopping the
/// loop makes every later tick a no-op.
pub struct FrameLoop {
    simulation: Simulation,
    inputs: SharedInputs,
    state: LoopState,
    frame: u64,
}

impl FrameLoop {
    pub fn new(simulation: Simulation, inputs: SharedInputs) -> Self {
        Self {
            simulation,
            inputs,
            state: LoopState::Running,
            frame: 0,
        }
    }

    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<FrameReport> {
        if self.state == LoopState::Stopped {
            return None;
        }

        let inputs = self.inputs.snapshot();
        if inputs.resized {
            self.simulation.reset(inputs.surface);
        }

        surface.clear();
        self.simulation.step(inputs.pointer);
        let stats = self.simulation.render(surface, inputs.pointer);

        self.frame += 1;
        trace!(
            "frame {}: {} links, {} pointer links",
            self.frame, stats.links, stats.pointer_links
        );

        Some(FrameReport {
            frame: self.frame,
            reset: inputs.resized,
            stats,
        })
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn inputs(&self) -> &SharedInputs {
        &self.inputs
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use cgmath::Vector2;

    struct NullSurface {
        clears: usize,
    }

    impl Surface for NullSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn draw_line(&mut self, _: Vector2<f32>, _: Vector2<f32>, _: Rgb) {}

        fn draw_filled_circle(&mut self, _: Vector2<f32>, _: f32, _: Rgb) {}
    }

    #[test]
    fn same_seed_same_simulation() {
        let surface = SurfaceDimensions::new(640.0, 480.0);
        let a = Simulation::with_seed(Config::default(), surface, 9);
        let b = Simulation::with_seed(Config::default(), surface, 9);

        assert_eq!(a.matrix(), b.matrix());
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), 360);
    }

    #[test]
    fn reset_keeps_matrix() {
        let mut simulation = Simulation::with_seed(Config::default(), SurfaceDimensions::new(800.0, 600.0), 5);
        let matrix = simulation.matrix().clone();

        simulation.reset(SurfaceDimensions::new(1024.0, 768.0));

        assert_eq!(simulation.matrix(), &matrix);
        assert_eq!(simulation.surface(), SurfaceDimensions::new(1024.0, 768.0));
    }

    #[test]
    fn stopped_loop_does_nothing() {
        let surface = SurfaceDimensions::new(200.0, 200.0);
        let config = Config {
            particle_count: 20,
            ..Config::default()
        };
        let mut frames = FrameLoop::new(Simulation::with_seed(config, surface, 1), SharedInputs::new(surface));
        let mut target = NullSurface { clears: 0 };

        assert_eq!(frames.tick(&mut target).map(|r| r.frame), Some(1));
        frames.stop();
        assert_eq!(frames.state(), LoopState::Stopped);
        assert_eq!(frames.tick(&mut target), None);
        assert_eq!(target.clears, 1);
    }
}
