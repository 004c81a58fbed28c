//! 1-bit software framebuffer matching the 128x64 display
//!
//! Each row is one `u128`, bit `x` set = pixel lit. Anything drawn off
//! screen is clipped.

use std::fmt;

use super::canvas::Canvas;
use crate::consts::{SCREEN_H, SCREEN_W};

const ROWS: usize = SCREEN_H as usize;

#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    rows: [u128; ROWS],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self { rows: [0; ROWS] }
    }
}

impl Framebuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rows = [0; ROWS];
    }

    #[inline]
    fn in_bounds(x: i32, y: i32) -> bool {
        (0..SCREEN_W).contains(&x) && (0..SCREEN_H).contains(&y)
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32) {
        if Self::in_bounds(x, y) {
            self.rows[y as usize] |= 1u128 << x;
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        Self::in_bounds(x, y) && self.rows[y as usize] & (1u128 << x) != 0
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    /// Plot the four symmetric points of an axis-aligned conic
    fn plot4(&mut self, cx: i32, cy: i32, x: i32, y: i32) {
        self.set(cx + x, cy + y);
        self.set(cx - x, cy + y);
        self.set(cx + x, cy - y);
        self.set(cx - x, cy - y);
    }
}

impl Canvas for Framebuffer {
    fn draw_dot(&mut self, x: i32, y: i32) {
        self.set(x, y);
    }

    /// Bresenham
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Midpoint circle
    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32) {
        if r < 0 {
            return;
        }
        let (mut x, mut y) = (r, 0);
        let mut err = 1 - r;
        while x >= y {
            self.plot4(cx, cy, x, y);
            self.plot4(cx, cy, y, x);
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Midpoint ellipse
    fn draw_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32) {
        if rx < 0 || ry < 0 {
            return;
        }
        if rx == 0 || ry == 0 {
            self.draw_line(cx - rx, cy - ry, cx + rx, cy + ry);
            return;
        }

        let rx2 = (rx as i64) * (rx as i64);
        let ry2 = (ry as i64) * (ry as i64);
        let (mut x, mut y) = (0i64, ry as i64);
        let mut dx = 0i64;
        let mut dy = 2 * rx2 * y;

        // Region 1: slope shallower than -1
        let mut p = ry2 - rx2 * ry as i64 + rx2 / 4;
        while dx < dy {
            self.plot4(cx, cy, x as i32, y as i32);
            x += 1;
            dx += 2 * ry2;
            if p < 0 {
                p += dx + ry2;
            } else {
                y -= 1;
                dy -= 2 * rx2;
                p += dx - dy + ry2;
            }
        }

        // Region 2
        let xf = x as f64 + 0.5;
        let yf = (y - 1) as f64;
        let mut p = (ry2 as f64 * xf * xf + rx2 as f64 * yf * yf - (rx2 * ry2) as f64) as i64;
        while y >= 0 {
            self.plot4(cx, cy, x as i32, y as i32);
            y -= 1;
            dy -= 2 * rx2;
            if p > 0 {
                p += rx2 - dy;
            } else {
                x += 1;
                dx += 2 * ry2;
                p += dx - dy + rx2;
            }
        }
    }
}

/// Two pixel rows per text line using half-block characters
impl fmt::Display for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..SCREEN_H).step_by(2) {
            let line: String = (0..SCREEN_W)
                .map(|x| match (self.get(x, y), self.get(x, y + 1)) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framebuffer")
            .field("lit", &self.lit_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dots_clip() {
        let mut fb = Framebuffer::new();
        fb.draw_dot(0, 0);
        fb.draw_dot(127, 63);
        fb.draw_dot(-1, 5);
        fb.draw_dot(128, 5);
        fb.draw_dot(5, 64);
        assert!(fb.get(0, 0));
        assert!(fb.get(127, 63));
        assert_eq!(fb.lit_count(), 2);
    }

    #[test]
    fn test_line_endpoints_and_length() {
        let mut fb = Framebuffer::new();
        fb.draw_line(10, 10, 20, 10);
        assert_eq!(fb.lit_count(), 11);

        fb.clear();
        fb.draw_line(30, 5, 25, 15);
        assert!(fb.get(30, 5));
        assert!(fb.get(25, 15));
        assert_eq!(fb.lit_count(), 11);
    }

    #[test]
    fn test_circle_outline() {
        let mut fb = Framebuffer::new();
        fb.draw_circle(40, 30, 3);
        assert!(fb.get(43, 30));
        assert!(fb.get(37, 30));
        assert!(fb.get(40, 27));
        assert!(fb.get(40, 33));
        assert!(!fb.get(40, 30));

        fb.clear();
        fb.draw_circle(40, 30, 0);
        assert_eq!(fb.lit_count(), 1);

        fb.clear();
        fb.draw_circle(40, 30, -2);
        assert_eq!(fb.lit_count(), 0);
    }

    #[test]
    fn test_ellipse_extents() {
        let mut fb = Framebuffer::new();
        fb.draw_ellipse(60, 30, 8, 4);
        assert!(fb.get(60, 26));
        assert!(fb.get(60, 34));
        assert!(fb.get(68, 30) || fb.get(67, 30));
        assert!(fb.get(52, 30) || fb.get(53, 30));
        assert!(!fb.get(60, 30));
        for y in 0..SCREEN_H {
            for x in 0..SCREEN_W {
                if fb.get(x, y) {
                    assert!((52..=68).contains(&x) && (26..=34).contains(&y));
                }
            }
        }
    }

    #[test]
    fn test_display_shape() {
        let mut fb = Framebuffer::new();
        fb.draw_dot(0, 0);
        fb.draw_dot(1, 1);
        let text = fb.to_string();
        assert_eq!(text.lines().count(), 32);
        assert!(text.starts_with("▀▄\n"));
    }
}
