//! State published by the host between frames.
//!
//! The host writes pointer movement and resizes into a [`SharedInputs`] cell at
//! any time. The frame loop takes one [`FrameInputs`] snapshot at the start of
//! each frame and never reads the cell again until the next frame.

use std::sync::Arc;

use cgmath::Vector2;
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDimensions {
    pub width: f32,
    pub height: f32,
}

impl SurfaceDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Latest pointer position in surface-local coordinates, absent before the
/// first movement or after the pointer leaves the surface.
pub type PointerState = Option<Vector2<f32>>;

#[derive(Debug, Clone)]
pub struct HostInputs {
    pointer: PointerState,
    surface: SurfaceDimensions,
    resized: bool,
}

/// What a single frame sees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInputs {
    pub pointer: PointerState,
    pub surface: SurfaceDimensions,
    pub resized: bool,
}

#[derive(Debug, Clone)]
pub struct SharedInputs {
    inner: Arc<Mutex<HostInputs>>,
}

impl SharedInputs {
    pub fn new(surface: SurfaceDimensions) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HostInputs {
                pointer: None,
                surface,
                resized: false,
            })),
        }
    }

    pub fn set_pointer(&self, pointer: PointerState) {
        self.inner.lock().pointer = pointer;
    }

    /// Records new surface dimensions and flags a repopulation for the next frame.
    pub fn resize(&self, surface: SurfaceDimensions) {
        let mut inputs = self.inner.lock();
        inputs.surface = surface;
        inputs.resized = true;
    }

    pub fn surface(&self) -> SurfaceDimensions {
        self.inner.lock().surface
    }

    /// Copies the current state and clears the resize flag.
    pub fn snapshot(&self) -> FrameInputs {
        let mut inputs = self.inner.lock();
        let snapshot = FrameInputs {
            pointer: inputs.pointer,
            surface: inputs.surface,
            resized: inputs.resized,
        };
        inputs.resized = false;
        snapshot
    }
}
