//! Proximity tests for gravity wells and the sonar pulse
//!
//! Both use strict comparisons: a point exactly on a boundary is outside.

use glam::Vec2;

/// Displacement that pulls `pos` toward `well` by `step` along the unit
/// vector, or `None` when `pos` is not strictly inside `radius`.
///
/// A point sitting exactly on the well center has no direction to be pulled
/// in and gets no pull.
pub fn gravity_pull(pos: Vec2, well: Vec2, radius: f32, step: f32) -> Option<Vec2> {
    let delta = well - pos;
    let dist = delta.length();
    if dist >= radius || dist == 0.0 {
        return None;
    }
    Some(delta / dist * step)
}

/// True when `point` lies strictly inside the circle of `radius` around `center`
#[inline]
pub fn strictly_within(center: Vec2, point: Vec2, radius: f32) -> bool {
    center.distance(point) < radius
}

/// Comet-style closeness check: within `reach` on both axes
#[inline]
pub fn near_on_both_axes(a: Vec2, b: Vec2, reach: f32) -> bool {
    let d = (a - b).abs();
    d.x < reach && d.y < reach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_pull_inside_well() {
        let ship = Vec2::new(20.0, 32.0);
        let planet = Vec2::new(30.0, 32.0);

        let pull = gravity_pull(ship, planet, 18.0, 0.4).unwrap();
        assert!((pull.x - 0.4).abs() < 1e-6);
        assert!(pull.y.abs() < 1e-6);
    }

    #[test]
    fn test_gravity_pull_boundary_and_outside() {
        let ship = Vec2::new(0.0, 0.0);
        assert!(gravity_pull(ship, Vec2::new(18.0, 0.0), 18.0, 0.4).is_none());
        assert!(gravity_pull(ship, Vec2::new(0.0, 25.0), 18.0, 0.4).is_none());
    }

    #[test]
    fn test_gravity_pull_zero_distance() {
        let p = Vec2::new(64.0, 32.0);
        assert!(gravity_pull(p, p, 18.0, 0.4).is_none());
    }

    #[test]
    fn test_gravity_pull_diagonal_is_unit_step() {
        let pull = gravity_pull(Vec2::ZERO, Vec2::new(3.0, 4.0), 18.0, 0.4).unwrap();
        assert!((pull.length() - 0.4).abs() < 1e-6);
        assert!((pull.x - 0.24).abs() < 1e-6);
        assert!((pull.y - 0.32).abs() < 1e-6);
    }

    #[test]
    fn test_strictly_within() {
        let c = Vec2::new(10.0, 10.0);
        assert!(strictly_within(c, Vec2::new(14.0, 10.0), 5.0));
        assert!(!strictly_within(c, Vec2::new(15.0, 10.0), 5.0));
        assert!(!strictly_within(c, Vec2::new(13.0, 14.0), 5.0));
    }

    #[test]
    fn test_near_on_both_axes() {
        let ship = Vec2::new(20.0, 32.0);
        assert!(near_on_both_axes(ship, Vec2::new(25.0, 27.5), 6.0));
        assert!(!near_on_both_axes(ship, Vec2::new(26.0, 32.0), 6.0));
        assert!(!near_on_both_axes(ship, Vec2::new(20.0, 40.0), 6.0));
    }
}
