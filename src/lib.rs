//! Block Breaker - gameplay core of a breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Event-driven gameplay (ball controller, blocks, grid layout, session)
//! - `hooks`: Optional host collaborators (score/message text, controls, audio cues)
//! - `settings`: Data-driven tuning and layout, loadable from JSON

pub mod hooks;
pub mod settings;
pub mod sim;

pub use hooks::{Control, Cue, CuePlayer, Hooks, TextDisplay};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Launch impulse magnitude
    pub const BALL_POWER_SCALE: f32 = 5.0;
    /// Paddle deflection multiplier applied to the hit factor
    pub const HIT_COEFFICIENT: f32 = 2.0;
    /// Minimum ball speed while playing
    pub const BALL_MIN_SPEED: f32 = 4.0;
    /// Maximum ball speed while playing
    pub const BALL_MAX_SPEED: f32 = 5.0;
    /// Below this |normalized vy| the trajectory counts as horizontal
    pub const HORIZONTAL_LIMIT: f32 = 0.05;
    /// Downward kick applied to a near-horizontal ball
    pub const ADJUST_IMPULSE_Y: f32 = -3.0;
    /// Ball body mass (impulse / mass = velocity change)
    pub const BALL_MASS: f32 = 1.0;

    /// Block defaults
    pub const BLOCK_LIFE: u32 = 2;
    pub const BLOCK_SCORE: u32 = 100;
    pub const BLOCK_WIDTH: f32 = 1.0;
    pub const BLOCK_HEIGHT: f32 = 0.5;

    /// Grid defaults
    pub const GRID_COLUMNS: u32 = 7;
    pub const GRID_ROWS: u32 = 6;

    /// The round is cleared once fewer than this many blocks remain
    pub const CLEAR_THRESHOLD: usize = 2;
}

/// Alternating column sign: +1 for even columns, -1 for odd
#[inline]
pub fn column_sign(column: u32) -> f32 {
    if column.is_multiple_of(2) { 1.0 } else { -1.0 }
}

/// Clamp a vector's length into `[min, max]`, keeping its direction.
///
/// Returns `None` when the vector is already in range or has zero length.
#[inline]
pub fn clamp_length(v: Vec2, min: f32, max: f32) -> Option<Vec2> {
    let len = v.length();
    if len <= f32::EPSILON {
        return None;
    }
    if len < min {
        Some(v / len * min)
    } else if len > max {
        Some(v / len * max)
    } else {
        None
    }
}
