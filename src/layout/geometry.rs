//! Screen geometry.
//!
//! Positions are in window pixels with the origin at the top-left corner and
//! y growing downward. The renderer's world space is centered on the window
//! with y growing upward; `WindowSize::to_world` converts between the two.

use serde::{Deserialize, Serialize};

/// Window dimensions in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}

impl WindowSize {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a top-left/y-down screen point to centered/y-up world space.
    #[must_use]
    pub fn to_world(self, x: f32, y: f32) -> (f32, f32) {
        (x - self.width / 2.0, self.height / 2.0 - y)
    }
}

/// Axis-aligned rectangle in screen space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A square with its top-left corner at `(x, y)`.
    #[must_use]
    pub const fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(x, y, size, size)
    }

    /// Center of the rectangle in screen space.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Center of the rectangle in world space, for center-anchored sprites.
    #[must_use]
    pub fn world_center(&self, window: WindowSize) -> (f32, f32) {
        let (cx, cy) = self.center();
        window.to_world(cx, cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world_corners() {
        let window = WindowSize::default();

        assert_eq!(window.to_world(0.0, 0.0), (-600.0, 400.0));
        assert_eq!(window.to_world(600.0, 400.0), (0.0, 0.0));
        assert_eq!(window.to_world(1200.0, 800.0), (600.0, -400.0));
    }

    #[test]
    fn test_rect_center() {
        let rect = ScreenRect::new(830.0, 50.0, 64.0, 64.0);
        assert_eq!(rect.center(), (862.0, 82.0));
        assert_eq!(rect.world_center(WindowSize::default()), (262.0, 318.0));
    }

    #[test]
    fn test_full_window_background() {
        let window = WindowSize::new(1200.0, 800.0);
        let background = ScreenRect::new(0.0, 0.0, window.width, window.height);
        assert_eq!(background.world_center(window), (0.0, 0.0));
    }
}
