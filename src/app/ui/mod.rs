//! Control surface widgets.
//!
//! Widget geometry is kept in window pixels with the origin at the top-left
//! corner, and only converted to nannou's centred, y-up coordinates when
//! drawing.

use super::*;

pub mod slider;

pub use slider::Slider;

/// An axis-aligned rectangle in window pixels (top-left origin).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl PixelRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether `point` lies inside the rectangle. The right and bottom edges
    /// are exclusive.
    pub fn contains(&self, point: Vec2) -> bool {
        (self.x..self.x + self.w).contains(&point.x)
            && (self.y..self.y + self.h).contains(&point.y)
    }

    /// The rectangle in the window's drawing coordinates.
    pub fn to_world(self, window: Rect) -> Rect {
        Rect::from_x_y_w_h(
            window.left() + self.x + self.w * 0.5,
            window.top() - self.y - self.h * 0.5,
            self.w,
            self.h,
        )
    }
}

/// Converts a point in drawing coordinates to window pixels.
pub fn to_pixels(window: Rect, point: Vec2) -> Vec2 {
    vec2(point.x - window.left(), window.top() - point.y)
}

/// Converts a `0xRRGGBBAA` colour for drawing.
pub fn color(code: u32) -> Rgba8 {
    let [r, g, b, a] = hex_rgba(code);
    rgba8(r, g, b, a)
}
