//! Cosmos - a tiny space scene for 128x64 monochrome displays
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, tick, gravity wells, sonar pulse)
//! - `controller`: Input events to ship movement and mode changes
//! - `renderer`: Draw-call composition onto a `Canvas`
//! - `platform`: Host-facing input and haptics types
//! - `settings`: JSON-backed display and feedback preferences

pub mod controller;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::handle_input;
pub use renderer::{Canvas, Renderer};
pub use settings::{DitherMode, Settings, SettingsError, ShipStyle};
pub use sim::{Mode, World, advance};

use glam::Vec2;

/// Game configuration constants
///
/// All speeds are per tick and tuned for a 50 ms tick; change them together
/// if the tick period changes.
pub mod consts {
    /// Display dimensions
    pub const SCREEN_W: i32 = 128;
    pub const SCREEN_H: i32 = 64;
    pub const W: f32 = SCREEN_W as f32;
    pub const H: f32 = SCREEN_H as f32;

    /// Nominal host tick period (ms)
    pub const TICK_MS: u64 = 50;

    /// Entity pool sizes
    pub const STAR_COUNT: usize = 36;
    pub const PLANET_COUNT: usize = 3;
    pub const COMET_COUNT: usize = 2;
    pub const ENEMY_COUNT: usize = 3;

    /// Star scroll speed tiers (index % 3)
    pub const STAR_BASE_SPEED: f32 = 0.3;
    pub const STAR_SPEED_STEP: f32 = 0.4;

    /// Planet orbit layout (per planet index)
    pub const PLANET_BASE_RADIUS: f32 = 12.0;
    pub const PLANET_RADIUS_STEP: f32 = 14.0;
    pub const PLANET_BASE_SPEED: f32 = 0.01;
    pub const PLANET_SPEED_STEP: f32 = 0.01;
    pub const PLANET_BASE_SIZE: i32 = 4;

    /// Gravity well: pull applies strictly inside this distance
    pub const GRAVITY_RADIUS: f32 = 18.0;
    /// Position step toward the planet per tick, per well
    pub const GRAVITY_PULL: f32 = 0.4;

    /// Comet spawn velocity and exit margin
    pub const COMET_VX: f32 = -2.0;
    pub const COMET_VY: f32 = 0.6;
    pub const COMET_MARGIN: f32 = 20.0;
    /// Comets and enemies spawn in [W, W + SPAWN_SPREAD)
    pub const SPAWN_SPREAD: i32 = 40;
    /// Comet-to-ship distance (per axis) that counts as a pass
    pub const COMET_PASS_DISTANCE: f32 = 6.0;

    /// Enemy leftward speed (not warp-scaled)
    pub const ENEMY_SPEED: f32 = 1.2;
    /// Wrapped enemies respawn in [W, W + ENEMY_RESPAWN_SPREAD)
    pub const ENEMY_RESPAWN_SPREAD: i32 = 20;

    /// Sonar pulse growth per tick and maximum radius
    pub const PULSE_STEP: i32 = 1;
    pub const PULSE_MAX: i32 = 16;

    /// Warp multipliers
    pub const WARP_STAR_MULT: f32 = 6.0;
    pub const WARP_PLANET_MULT: f32 = 3.0;
    pub const WARP_COMET_MULT: f32 = 4.0;

    /// Ship spawn and input step
    pub const SHIP_START_X: f32 = 20.0;
    pub const SHIP_START_Y: f32 = H / 2.0;
    pub const SHIP_STEP: f32 = 2.0;
}

/// Center of the display in world coordinates
#[inline]
pub fn screen_center() -> Vec2 {
    Vec2::new(consts::W / 2.0, consts::H / 2.0)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
