//! Force-to-color mappings.
//!
//! Channels are signed and never clamped here: a large force drives channels
//! below zero. Saturation into a displayable range happens only when a color
//! reaches the drawing surface.

use crate::config::{Config, TYPE_PALETTE};
use crate::particle::ParticleType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    pub fn from_bytes([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as i32, g as i32, b as i32)
    }

    /// Saturates every channel into `0..=255`.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b].map(|c| c.clamp(0, 255) as u8)
    }
}

fn channel_delta(amount: f32) -> i32 {
    (255.0 * amount).round() as i32
}

/// Link color for a normalized force in `[-1, 1]`.
///
/// The force is multiplied by `link_color_gain`; attraction fades white
/// toward green, repulsion toward red.
pub fn link_color(normalized_force: f32, config: &Config) -> Rgb {
    let force = normalized_force * config.link_color_gain;
    let mut color = Rgb::WHITE;

    if force > 0.0 {
        let delta = channel_delta(force);
        color.r = color.r.saturating_sub(delta);
        color.b = color.b.saturating_sub(delta);
    } else {
        let delta = channel_delta(-force);
        color.g = color.g.saturating_sub(delta);
        color.b = color.b.saturating_sub(delta);
    }
    color
}

/// Pointer link color for `force_value = mouse_force / distance`, white toward blue.
pub fn pointer_link_color(force_value: f32, config: &Config) -> Rgb {
    let delta = channel_delta(force_value * 10.0 / config.mouse_force);
    Rgb::new(255, 255i32.saturating_sub(delta), 255i32.saturating_sub(delta))
}

pub fn type_color(kind: ParticleType) -> Rgb {
    Rgb::from_bytes(TYPE_PALETTE[kind.index()])
}
