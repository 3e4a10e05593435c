//! Fixed simulation constants.
//!
//! Every tunable of the simulation lives here. [`Config::default`] is the only
//! configuration the binary uses; tests build modified copies to isolate a
//! single behavior (e.g. an empty pointer radius).

pub const PARTICLE_COUNT: usize = 360;
pub const PARTICLE_SIZE: f32 = 4.0;
pub const MAX_LINE_DISTANCE: f32 = 40.0;

pub const FORCE_THRESHOLD: f32 = 200.0;
pub const FORCE_SCALE: f32 = 0.0005;
pub const MAX_SPEED: f32 = 2.0;
pub const DECELERATION_FACTOR: f32 = 0.95;

pub const INTER_TYPE_FORCE_STRENGTH: f32 = 0.010;
pub const INTER_TYPE_MAX_DISTANCE: f32 = 120.0;
pub const REPULSIVE_FORCE_STRENGTH: f32 = 0.1;
pub const REPULSIVE_MAX_DISTANCE: f32 = 10.0;

pub const MOUSE_REPULSION_FORCE: f32 = 140.0;
pub const MOUSE_EFFECT_RADIUS: f32 = 120.0;

/// Multiplier applied to a normalized link force before it is turned into a color.
pub const LINK_COLOR_GAIN: f32 = 144.0;

pub const LINK_STROKE_WIDTH: f32 = 1.0;
pub const INITIAL_WINDOW_SIZE: (f32, f32) = (1024.0, 768.0);

/// Light salmon, pale green, light blue, gold.
pub const TYPE_PALETTE: [[u8; 3]; 4] = [
    [0xFF, 0xA0, 0x7A],
    [0x98, 0xFB, 0x98],
    [0xAD, 0xD8, 0xE6],
    [0xFF, 0xD7, 0x00],
];

pub const BACKGROUND: [u8; 3] = [0, 0, 0];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub particle_count: usize,
    pub particle_size: f32, // glyph radius, also the pair exclusion radius (x2)
    pub max_line_distance: f32,
    pub force_threshold: f32,
    pub force_scale: f32, // force -> velocity, stands in for a time step
    pub max_speed: f32,
    pub deceleration_factor: f32,
    pub inter_type_strength: f32,
    pub inter_type_max_distance: f32,
    pub repulsive_strength: f32,
    pub repulsive_max_distance: f32,
    pub mouse_force: f32,
    pub mouse_radius: f32,
    pub link_color_gain: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_size: PARTICLE_SIZE,
            max_line_distance: MAX_LINE_DISTANCE,
            force_threshold: FORCE_THRESHOLD,
            force_scale: FORCE_SCALE,
            max_speed: MAX_SPEED,
            deceleration_factor: DECELERATION_FACTOR,
            inter_type_strength: INTER_TYPE_FORCE_STRENGTH,
            inter_type_max_distance: INTER_TYPE_MAX_DISTANCE,
            repulsive_strength: REPULSIVE_FORCE_STRENGTH,
            repulsive_max_distance: REPULSIVE_MAX_DISTANCE,
            mouse_force: MOUSE_REPULSION_FORCE,
            mouse_radius: MOUSE_EFFECT_RADIUS,
            link_color_gain: LINK_COLOR_GAIN,
        }
    }
}
