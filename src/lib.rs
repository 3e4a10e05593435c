//! Real-time 2D particle life.
//!
//! Typed particles attract or repel each other according to a per type-pair
//! force matrix, are pushed away from the pointer, and wrap around the edges
//! of a toroidal surface. Links between nearby particles are colored by the
//! force between them.
//!
//! The crate is host agnostic: a host supplies surface dimensions and pointer
//! positions through [`SharedInputs`], implements [`Surface`], and calls
//! [`FrameLoop::tick`] once per display refresh.

pub mod color;
pub mod config;
pub mod forces;
pub mod input;
pub mod integrator;
pub mod particle;
pub mod render;
pub mod simulation;

pub use color::Rgb;
pub use config::Config;
pub use forces::ForceMatrix;
pub use input::{FrameInputs, PointerState, SharedInputs, SurfaceDimensions};
pub use particle::{Particle, ParticleStore, ParticleType};
pub use render::{RenderStats, Surface};
pub use simulation::{FrameLoop, FrameReport, LoopState, Simulation};
