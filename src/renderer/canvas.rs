//! Drawing surface abstraction
//!
//! The composer only ever writes to a canvas; clipping is the canvas's job.

/// Write-only 2D drawing primitives over integer pixel coordinates
pub trait Canvas {
    fn draw_dot(&mut self, x: i32, y: i32);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);
    /// Circle outline; a negative radius draws nothing
    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32);
    /// Axis-aligned ellipse outline
    fn draw_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32);
}

/// A single recorded primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Dot { x: i32, y: i32 },
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    Circle { cx: i32, cy: i32, r: i32 },
    Ellipse { cx: i32, cy: i32, rx: i32, ry: i32 },
}

/// Canvas that records calls in order, for replay on another thread or
/// for inspection
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    calls: Vec<DrawCall>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Play the recorded calls onto another canvas
    pub fn replay(&self, canvas: &mut impl Canvas) {
        for call in &self.calls {
            match *call {
                DrawCall::Dot { x, y } => canvas.draw_dot(x, y),
                DrawCall::Line { x0, y0, x1, y1 } => canvas.draw_line(x0, y0, x1, y1),
                DrawCall::Circle { cx, cy, r } => canvas.draw_circle(cx, cy, r),
                DrawCall::Ellipse { cx, cy, rx, ry } => canvas.draw_ellipse(cx, cy, rx, ry),
            }
        }
    }
}

impl Canvas for DrawList {
    fn draw_dot(&mut self, x: i32, y: i32) {
        self.calls.push(DrawCall::Dot { x, y });
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.calls.push(DrawCall::Line { x0, y0, x1, y1 });
    }

    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32) {
        self.calls.push(DrawCall::Circle { cx, cy, r });
    }

    fn draw_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32) {
        self.calls.push(DrawCall::Ellipse { cx, cy, rx, ry });
    }
}
