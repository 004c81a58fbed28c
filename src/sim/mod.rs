//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per `advance` call
//! - Seeded RNG only
//! - Fixed-size entity arrays, iterated in slot order
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{gravity_pull, near_on_both_axes, strictly_within};
pub use state::{Camera, Comet, Enemy, Mode, Planet, Pulse, Ship, Star, World, WorldEvent};
pub use tick::advance;
