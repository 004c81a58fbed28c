//! Input handling
//!
//! Turns key events into ship nudges and mode changes. Runs before
//! `advance` in the same tick.

use glam::Vec2;

use crate::consts::SHIP_STEP;
use crate::platform::{Haptics, InputEvent, Key, Phase};
use crate::sim::{Mode, World};

/// Apply one input event to the world
///
/// - Arrows (press or repeat) nudge the ship by `SHIP_STEP`
/// - Action press enters warp, fires the pulse and buzzes once
/// - Action release leaves warp; a pulse in flight keeps going
/// - Back press requests exit
pub fn handle_input(world: &mut World, event: InputEvent, haptics: &mut impl Haptics) {
    match (event.key, event.phase) {
        (Key::Up | Key::Down | Key::Left | Key::Right, Phase::Press | Phase::Repeat) => {
            world.ship.pos += direction(event.key) * SHIP_STEP;
        }
        (Key::Action, Phase::Press) => {
            world.mode = Mode::Warp;
            world.pulse.fire();
            haptics.vibrate_once();
            log::debug!("Warp on, pulse fired at tick {}", world.ticks());
        }
        (Key::Action, Phase::Release) => {
            world.mode = Mode::Interactive;
            log::debug!("Warp off at tick {}", world.ticks());
        }
        (Key::Back, Phase::Press) => {
            world.exit_requested = true;
            log::info!("Exit requested at tick {}", world.ticks());
        }
        _ => {}
    }
}

/// Screen-space unit step for an arrow key (y grows downward)
fn direction(key: Key) -> Vec2 {
    match key {
        Key::Up => Vec2::NEG_Y,
        Key::Down => Vec2::Y,
        Key::Left => Vec2::NEG_X,
        Key::Right => Vec2::X,
        Key::Action | Key::Back => Vec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PULSE_MAX;
    use crate::platform::{LogHaptics, NoHaptics};

    #[test]
    fn test_arrows_move_ship() {
        let mut world = World::new(1);
        let start = world.ship.pos;

        handle_input(&mut world, InputEvent::press(Key::Right), &mut NoHaptics);
        handle_input(&mut world, InputEvent::repeat(Key::Right), &mut NoHaptics);
        handle_input(&mut world, InputEvent::press(Key::Up), &mut NoHaptics);
        assert_eq!(world.ship.pos, start + Vec2::new(4.0, -2.0));

        handle_input(&mut world, InputEvent::press(Key::Left), &mut NoHaptics);
        handle_input(&mut world, InputEvent::press(Key::Down), &mut NoHaptics);
        assert_eq!(world.ship.pos, start + Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_arrow_release_does_nothing() {
        let mut world = World::new(1);
        let start = world.ship.pos;
        handle_input(&mut world, InputEvent::release(Key::Left), &mut NoHaptics);
        assert_eq!(world.ship.pos, start);
        assert_eq!(world.mode, Mode::Interactive);
    }

    #[test]
    fn test_action_press_warps_and_fires() {
        let mut world = World::new(1);
        world.pulse.radius = 9;
        let mut haptics = LogHaptics::default();

        handle_input(&mut world, InputEvent::press(Key::Action), &mut haptics);

        assert_eq!(world.mode, Mode::Warp);
        assert!(world.pulse.active);
        assert_eq!(world.pulse.radius, 0);
        assert_eq!(haptics.count, 1);
    }

    #[test]
    fn test_action_repeat_does_not_refire() {
        let mut world = World::new(1);
        let mut haptics = LogHaptics::default();
        handle_input(&mut world, InputEvent::press(Key::Action), &mut haptics);
        world.step();
        world.step();

        handle_input(&mut world, InputEvent::repeat(Key::Action), &mut haptics);
        assert_eq!(world.pulse.radius, 2);
        assert_eq!(haptics.count, 1);
    }

    #[test]
    fn test_release_ends_warp_but_not_pulse() {
        let mut world = World::new(3);
        handle_input(&mut world, InputEvent::press(Key::Action), &mut NoHaptics);

        let held_ticks = 5;
        for _ in 0..held_ticks {
            assert_eq!(world.mode, Mode::Warp);
            world.step();
        }

        handle_input(&mut world, InputEvent::release(Key::Action), &mut NoHaptics);
        assert_eq!(world.mode, Mode::Interactive);
        assert!(world.pulse.active);

        let mut ticks_after_release = 0;
        while world.pulse.active {
            world.step();
            assert_eq!(world.mode, Mode::Interactive);
            ticks_after_release += 1;
        }
        assert_eq!(held_ticks + ticks_after_release, PULSE_MAX + 1);
    }

    #[test]
    fn test_back_requests_exit() {
        let mut world = World::new(1);
        handle_input(&mut world, InputEvent::release(Key::Back), &mut NoHaptics);
        assert!(!world.exit_requested());

        handle_input(&mut world, InputEvent::press(Key::Back), &mut NoHaptics);
        assert!(world.exit_requested());

        // The world keeps ticking; stopping is the host's call
        world.step();
        assert!(world.exit_requested());
    }
}
