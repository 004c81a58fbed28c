//! Fixed timestep simulation tick
//!
//! Advances the world by exactly one tick. Steps run in a fixed order because
//! later ones read positions written earlier in the same tick (the pulse
//! tests enemies after they moved, gravity moves the ship before the pulse
//! is centered on it).

use super::collision::{gravity_pull, near_on_both_axes, strictly_within};
use super::state::{Camera, Comet, Mode, World, WorldEvent};
use crate::consts::*;

/// Advance the world by one tick in the given mode.
/// Events from the previous tick are discarded first.
pub fn advance(world: &mut World, mode: Mode) {
    world.events.clear();
    world.ticks += 1;
    world.camera = Camera::at_tick(world.ticks);

    scroll_stars(world, mode);
    orbit_planets(world, mode);
    move_comets(world, mode);
    move_enemies(world);
    update_pulse(world);
}

fn scroll_stars(world: &mut World, mode: Mode) {
    let factor = mode.factor(WARP_STAR_MULT);
    for star in &mut world.stars {
        star.pos.x -= star.speed * factor;
        if star.pos.x < 0.0 {
            star.wrap(&mut world.rng);
        }
    }
}

/// Orbit each planet, then let its gravity well tug the ship.
/// Wells are applied one after another, so overlapping pulls add up.
fn orbit_planets(world: &mut World, mode: Mode) {
    let factor = mode.factor(WARP_PLANET_MULT);
    for planet in &mut world.planets {
        planet.angle += planet.speed * factor;

        let well = planet.position();
        if let Some(pull) = gravity_pull(world.ship.pos, well, GRAVITY_RADIUS, GRAVITY_PULL) {
            world.ship.pos += pull;
        }
    }
}

fn move_comets(world: &mut World, mode: Mode) {
    let factor = mode.factor(WARP_COMET_MULT);
    for (slot, comet) in world.comets.iter_mut().enumerate() {
        comet.pos += comet.vel * factor;

        if near_on_both_axes(comet.pos, world.ship.pos, COMET_PASS_DISTANCE) {
            world.events.push(WorldEvent::CometPass { slot });
        }

        if comet.is_gone() {
            *comet = Comet::spawn(&mut world.rng);
        }
    }
}

/// Dead enemies stay frozen where they died; only live ones move and wrap.
fn move_enemies(world: &mut World) {
    for enemy in &mut world.enemies {
        if !enemy.alive {
            continue;
        }
        enemy.pos.x -= ENEMY_SPEED;
        if enemy.pos.x < 0.0 {
            enemy.respawn(&mut world.rng);
        }
    }
}

fn update_pulse(world: &mut World) {
    if !world.pulse.active {
        return;
    }

    world.pulse.radius += PULSE_STEP;
    let radius = world.pulse.radius as f32;

    for (slot, enemy) in world.enemies.iter_mut().enumerate() {
        if enemy.alive && strictly_within(world.ship.pos, enemy.pos, radius) {
            enemy.alive = false;
            log::debug!("Enemy {slot} destroyed by pulse (r={radius})");
            world.events.push(WorldEvent::EnemyDestroyed { slot });
        }
    }

    if world.pulse.radius > PULSE_MAX {
        world.pulse.active = false;
        log::debug!("Pulse expired at r={}", world.pulse.radius);
        world.events.push(WorldEvent::PulseExpired);
    }
}
