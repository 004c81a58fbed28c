//! Frame composition
//!
//! Projects the world onto a canvas, back to front:
//! nebula, stars, warp streaks, planets, comets, enemies, pulse ring,
//! HUD glyphs, swirl wake, ship.
//!
//! The renderer owns its own RNG for purely visual noise so that frames can
//! flicker without touching the gameplay RNG inside `World`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::canvas::Canvas;
use super::shapes;
use crate::consts::{SCREEN_H, SCREEN_W};
use crate::settings::Settings;
use crate::sim::World;

/// Nebula: attempts per frame, each lit with probability 1 / NEBULA_ODDS
const NEBULA_TRIES: u32 = 40;
const NEBULA_ODDS: u32 = 6;
/// Random spark dots per warp frame
const WARP_SPARKS: u32 = 20;
/// Comet streak length in dots
const COMET_TAIL: i32 = 4;
const COMET_TAIL_WARP: i32 = 7;
/// HUD glyph row
const HUD_GLYPHS: u64 = 5;
const HUD_X: i32 = 5;
const HUD_Y: i32 = 2;
const HUD_SPACING: i32 = 6;
/// Swirl wake pool
const SWIRL_COUNT: usize = 5;
const SWIRL_GROWTH: f32 = 1.5;

/// One expanding ellipse in the ship's wake
#[derive(Debug, Clone, Copy, Default)]
struct Swirl {
    x: i32,
    y: i32,
    radius: f32,
    /// Frames left; 0 = spent, respawns next frame
    lifetime: u8,
}

pub struct Renderer {
    settings: Settings,
    /// Cosmetic RNG (nebula, streak lengths, sparks, swirl lifetimes)
    rng: Pcg32,
    swirls: [Swirl; SWIRL_COUNT],
}

impl Renderer {
    /// Renderer with OS-seeded visual noise
    pub fn new(settings: Settings) -> Self {
        Self::from_rng(settings, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Renderer with reproducible visual noise
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::from_rng(settings, Pcg32::seed_from_u64(seed))
    }

    fn from_rng(settings: Settings, rng: Pcg32) -> Self {
        Self {
            settings,
            rng,
            swirls: [Swirl::default(); SWIRL_COUNT],
        }
    }

    /// Draw one frame. Reads the world only.
    pub fn render(&mut self, world: &World, canvas: &mut impl Canvas) {
        if self.settings.nebula {
            self.nebula(canvas);
        }
        self.stars(world, canvas);
        if world.mode.is_warp() {
            self.warp_streaks(world, canvas);
        }
        self.planets(world, canvas);
        self.comets(world, canvas);
        self.enemies(world, canvas);
        self.pulse(world, canvas);
        self.hud(world, canvas);
        if self.settings.swirls {
            self.swirls(world, canvas);
        }

        let ship = world.ship.pos + world.camera.offset();
        shapes::ship(canvas, ship.x as i32, ship.y as i32, self.settings.ship_style);
    }

    fn random_dot(&mut self, canvas: &mut impl Canvas) {
        let x = self.rng.random_range(0..SCREEN_W);
        let y = self.rng.random_range(0..SCREEN_H);
        canvas.draw_dot(x, y);
    }

    fn nebula(&mut self, canvas: &mut impl Canvas) {
        for _ in 0..NEBULA_TRIES {
            if self.rng.random_range(0..NEBULA_ODDS) == 0 {
                self.random_dot(canvas);
            }
        }
    }

    fn stars(&self, world: &World, canvas: &mut impl Canvas) {
        let cam = world.camera.offset();
        for star in &world.stars {
            let p = star.pos + cam;
            canvas.draw_dot(p.x as i32, p.y as i32);
        }
    }

    /// 2-4 trailing dots behind every star, spaced by its speed
    fn warp_streaks(&mut self, world: &World, canvas: &mut impl Canvas) {
        let cam = world.camera.offset();
        for star in &world.stars {
            let p = star.pos + cam;
            let (sx, sy) = (p.x as i32, p.y as i32);
            let len = self.rng.random_range(2..=4);
            for s in 1..=len {
                canvas.draw_dot(sx - (star.speed * s as f32) as i32, sy);
            }
        }

        if self.settings.warp_sparks {
            for _ in 0..WARP_SPARKS {
                self.random_dot(canvas);
            }
        }
    }

    fn planets(&self, world: &World, canvas: &mut impl Canvas) {
        let cam = world.camera.offset();
        for planet in &world.planets {
            let p = planet.position() + cam;
            shapes::dithered_disk(
                canvas,
                p.x as i32,
                p.y as i32,
                planet.size,
                self.settings.dither,
                world.ticks(),
            );
        }
    }

    fn comets(&self, world: &World, canvas: &mut impl Canvas) {
        let cam = world.camera.offset();
        let tail = if world.mode.is_warp() { COMET_TAIL_WARP } else { COMET_TAIL };
        for comet in &world.comets {
            for t in 0..tail {
                let p = comet.pos - comet.vel * t as f32 + cam;
                canvas.draw_dot(p.x as i32, p.y as i32);
            }
        }
    }

    fn enemies(&self, world: &World, canvas: &mut impl Canvas) {
        let cam = world.camera.offset();
        for enemy in world.enemies.iter().filter(|e| e.alive) {
            let p = enemy.pos + cam;
            shapes::enemy(canvas, p.x as i32, p.y as i32);
        }
    }

    /// Ring around the ship's world position (not camera-shifted)
    fn pulse(&self, world: &World, canvas: &mut impl Canvas) {
        if world.pulse.active {
            let ship = world.ship.pos;
            canvas.draw_circle(ship.x as i32, ship.y as i32, world.pulse.radius);
        }
    }

    fn hud(&self, world: &World, canvas: &mut impl Canvas) {
        for i in 0..HUD_GLYPHS {
            let x = HUD_X + i as i32 * HUD_SPACING;
            shapes::hud_glyph(canvas, x, HUD_Y, world.ticks() + i);
        }
    }

    /// Expanding ellipses that restart at the ship when spent
    fn swirls(&mut self, world: &World, canvas: &mut impl Canvas) {
        let ship = world.ship.pos + world.camera.offset();
        for swirl in &mut self.swirls {
            if swirl.lifetime > 0 {
                let r = swirl.radius as i32;
                canvas.draw_ellipse(swirl.x, swirl.y, r, r / 2);
                swirl.radius += SWIRL_GROWTH;
                swirl.lifetime -= 1;
                if swirl.lifetime % 4 == 0 {
                    canvas.draw_circle(swirl.x, swirl.y, swirl.radius as i32 - 2);
                }
            } else {
                *swirl = Swirl {
                    x: ship.x as i32,
                    y: ship.y as i32,
                    radius: 1.0,
                    lifetime: self.rng.random_range(20..30),
                };
            }
        }
    }
}
