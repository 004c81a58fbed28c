//! Glyphs and filled shapes built from canvas primitives

use super::canvas::Canvas;
use crate::settings::{DitherMode, ShipStyle};

/// Filled disk with a dither pattern. `tick` drives the xor shimmer.
pub fn dithered_disk(canvas: &mut impl Canvas, cx: i32, cy: i32, r: i32, mode: DitherMode, tick: u64) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r && mode.lit(dx, dy, tick) {
                canvas.draw_dot(cx + dx, cy + dy);
            }
        }
    }
}

/// Player ship in the chosen style, centered at (x, y)
pub fn ship(canvas: &mut impl Canvas, x: i32, y: i32, style: ShipStyle) {
    match style {
        ShipStyle::Dolphin => dolphin(canvas, x, y),
        ShipStyle::Ufo => ufo(canvas, x, y),
        ShipStyle::Arrow => arrow(canvas, x, y),
    }
}

/// Dolphin-shaped saucer: three hull lines, dorsal fin, nose, forked tail, eye
pub fn dolphin(canvas: &mut impl Canvas, x: i32, y: i32) {
    canvas.draw_line(x - 9, y, x + 9, y);
    canvas.draw_line(x - 6, y - 2, x + 6, y - 2);
    canvas.draw_line(x - 4, y - 4, x + 4, y - 4);
    canvas.draw_line(x, y - 4, x + 1, y - 7); // fin
    canvas.draw_line(x + 6, y - 1, x + 9, y); // nose
    canvas.draw_line(x - 9, y, x - 11, y - 1); // tail
    canvas.draw_line(x - 9, y, x - 11, y + 1);
    canvas.draw_dot(x + 3, y - 2); // eye
}

/// Classic saucer with a dome and three lights
pub fn ufo(canvas: &mut impl Canvas, x: i32, y: i32) {
    canvas.draw_line(x - 8, y, x + 8, y);
    canvas.draw_line(x - 6, y - 2, x + 6, y - 2);
    canvas.draw_line(x - 4, y - 4, x + 4, y - 4);
    canvas.draw_circle(x, y - 5, 3);
    canvas.draw_dot(x - 5, y + 1);
    canvas.draw_dot(x, y + 2);
    canvas.draw_dot(x + 5, y + 1);
}

/// Minimal arrow pointing right
pub fn arrow(canvas: &mut impl Canvas, x: i32, y: i32) {
    canvas.draw_line(x - 4, y, x + 4, y);
    canvas.draw_line(x - 4, y, x - 8, y - 2);
    canvas.draw_line(x - 4, y, x - 8, y + 2);
}

/// Enemy drone: ring, crosshair, center dot
pub fn enemy(canvas: &mut impl Canvas, x: i32, y: i32) {
    canvas.draw_circle(x, y, 3);
    canvas.draw_line(x - 4, y, x + 4, y);
    canvas.draw_dot(x, y);
}

/// HUD glyph in a 5x5 cell at (x, y): an X or a small ring, flipping every
/// 8 ticks
pub fn hud_glyph(canvas: &mut impl Canvas, x: i32, y: i32, t: u64) {
    if (t >> 3) & 1 == 1 {
        canvas.draw_line(x, y, x + 4, y + 4);
        canvas.draw_line(x + 4, y, x, y + 4);
    } else {
        canvas.draw_circle(x + 2, y + 2, 2);
    }
}
