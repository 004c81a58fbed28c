//! World state and entity types
//!
//! Every entity lives in a fixed-size array inside [`World`]. Respawning an
//! entity rewrites its slot in place; nothing is allocated per entity.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::{polar_to_cartesian, screen_center};

/// Motion mode. Warp scales star, planet and comet speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Interactive,
    Warp,
}

impl Mode {
    pub fn is_warp(self) -> bool {
        self == Mode::Warp
    }

    /// Speed factor for an entity kind with the given warp multiplier
    #[inline]
    pub fn factor(self, warp_mult: f32) -> f32 {
        if self.is_warp() { warp_mult } else { 1.0 }
    }
}

/// Uniform row on screen
fn random_row(rng: &mut Pcg32) -> f32 {
    rng.random_range(0..SCREEN_H) as f32
}

/// Uniform column just past the right edge, in [W, W + spread)
fn offscreen_column(rng: &mut Pcg32, spread: i32) -> f32 {
    (SCREEN_W + rng.random_range(0..spread)) as f32
}

/// A background star scrolling left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    /// Base scroll speed (px/tick); one of three depth tiers
    pub speed: f32,
}

impl Star {
    fn spawn(index: usize, rng: &mut Pcg32) -> Self {
        let x = rng.random_range(0..SCREEN_W) as f32;
        let y = random_row(rng);
        Self {
            pos: Vec2::new(x, y),
            speed: STAR_BASE_SPEED + (index % 3) as f32 * STAR_SPEED_STEP,
        }
    }

    /// Move back to the right edge on a fresh row
    pub(crate) fn wrap(&mut self, rng: &mut Pcg32) {
        self.pos = Vec2::new(W, random_row(rng));
    }
}

/// A planet orbiting the screen center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    /// Orbital angle (radians, unbounded)
    pub angle: f32,
    pub radius: f32,
    /// Angular speed (radians/tick)
    pub speed: f32,
    /// Disk radius in pixels
    pub size: i32,
}

impl Planet {
    fn spawn(index: usize, rng: &mut Pcg32) -> Self {
        Self {
            angle: rng.random_range(0.0..std::f32::consts::TAU),
            radius: PLANET_BASE_RADIUS + index as f32 * PLANET_RADIUS_STEP,
            speed: PLANET_BASE_SPEED + index as f32 * PLANET_SPEED_STEP,
            size: PLANET_BASE_SIZE + index as i32,
        }
    }

    /// Absolute world position on its orbit
    pub fn position(&self) -> Vec2 {
        screen_center() + polar_to_cartesian(self.radius, self.angle)
    }
}

/// A comet drifting left and down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comet {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Comet {
    pub(crate) fn spawn(rng: &mut Pcg32) -> Self {
        let x = offscreen_column(rng, SPAWN_SPREAD);
        let y = random_row(rng);
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::new(COMET_VX, COMET_VY),
        }
    }

    /// Past the left or bottom margin
    pub fn is_gone(&self) -> bool {
        self.pos.x < -COMET_MARGIN || self.pos.y > H + COMET_MARGIN
    }
}

/// An enemy drone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub alive: bool,
}

impl Enemy {
    fn spawn(rng: &mut Pcg32) -> Self {
        let x = offscreen_column(rng, SPAWN_SPREAD);
        let y = random_row(rng);
        Self {
            pos: Vec2::new(x, y),
            alive: true,
        }
    }

    /// Recycle this slot just past the right edge, alive again
    pub fn respawn(&mut self, rng: &mut Pcg32) {
        self.pos.x = offscreen_column(rng, ENEMY_RESPAWN_SPREAD);
        self.pos.y = random_row(rng);
        self.alive = true;
    }
}

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    pub pos: Vec2,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            pos: Vec2::new(SHIP_START_X, SHIP_START_Y),
        }
    }
}

/// Ship-centered sonar pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pulse {
    /// Current radius; keeps its last value after the pulse expires
    pub radius: i32,
    pub active: bool,
}

impl Pulse {
    /// (Re)start the pulse from radius zero
    pub fn fire(&mut self) {
        self.radius = 0;
        self.active = true;
    }
}

/// Sinusoidal camera drift applied to everything drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Camera {
    pub x: i32,
    pub y: i32,
}

impl Camera {
    pub fn at_tick(tick: u64) -> Self {
        let t = tick as f32;
        Self {
            x: ((t * 0.01).sin() * 4.0).round() as i32,
            y: ((t * 0.008).cos() * 3.0).round() as i32,
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldEvent {
    /// Pulse killed the enemy in this slot
    EnemyDestroyed { slot: usize },
    /// Pulse grew past its maximum radius
    PulseExpired,
    /// Comet in this slot passed close to the ship
    CometPass { slot: usize },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub stars: [Star; STAR_COUNT],
    pub planets: [Planet; PLANET_COUNT],
    pub comets: [Comet; COMET_COUNT],
    pub enemies: [Enemy; ENEMY_COUNT],
    pub ship: Ship,
    pub pulse: Pulse,
    pub camera: Camera,
    pub mode: Mode,
    /// Simulation tick counter
    pub(crate) ticks: u64,
    pub(crate) exit_requested: bool,
    seed: u64,
    /// Gameplay RNG (spawns and respawns only)
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<WorldEvent>,
}

impl World {
    /// Build a world from a seed. The same seed always yields the same world.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let stars = std::array::from_fn(|i| Star::spawn(i, &mut rng));
        let planets = std::array::from_fn(|i| Planet::spawn(i, &mut rng));
        let comets = std::array::from_fn(|_| Comet::spawn(&mut rng));
        let enemies = std::array::from_fn(|_| Enemy::spawn(&mut rng));

        log::info!(
            "World created: seed={seed} stars={STAR_COUNT} planets={PLANET_COUNT} comets={COMET_COUNT} enemies={ENEMY_COUNT}"
        );

        Self {
            stars,
            planets,
            comets,
            enemies,
            ship: Ship::default(),
            pulse: Pulse::default(),
            camera: Camera::default(),
            mode: Mode::Interactive,
            ticks: 0,
            exit_requested: false,
            seed,
            rng,
            events: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Set once the player asked to leave; the host stops its loop on it
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Take the events recorded during the last tick
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, WorldEvent> {
        self.events.drain(..)
    }

    /// Advance one tick in the current mode
    pub fn step(&mut self) {
        let mode = self.mode;
        super::tick::advance(self, mode);
    }
}
