//! Axis-aligned rectangle geometry
//!
//! Rectangles are stored as top-left corner plus size, in viewport pixels
//! with y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.size.y
    }

    /// Right edge (x + w)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge (y + h)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.pos.x + amount,
            self.pos.y + amount,
            self.size.x - amount * 2.0,
            self.size.y - amount * 2.0,
        )
    }

    /// Point at fractional coordinates (0..1 on each axis) inside the rect
    pub fn lerp_point(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x * fx, self.pos.y + self.size.y * fy)
    }

    /// True if the horizontal spans overlap (strict)
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.pos.x < other.right() && self.right() > other.pos.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_inset() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0).inset(12.0);
        assert_eq!(r, Rect::new(12.0, 12.0, 76.0, 26.0));
    }

    #[test]
    fn test_overlaps_x_touching_is_false() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 500.0, 10.0, 10.0);
        assert!(!a.overlaps_x(&b));
        let c = Rect::new(9.5, 500.0, 10.0, 10.0);
        assert!(a.overlaps_x(&c));
    }
}
