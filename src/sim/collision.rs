//! Collision detection between the player and obstacles
//!
//! Everything in the lane is an axis-aligned box, so the only test needed is
//! a strict rectangle overlap: boxes that merely share an edge do not collide.

use super::rect::Rect;
use super::state::{Obstacle, Player};

/// Strict axis-aligned overlap test
///
/// True iff `a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y`.
#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && a.right() > b.x() && a.y() < b.bottom() && a.bottom() > b.y()
}

/// Check whether an obstacle hits the player
#[inline]
pub fn player_hit(player: &Player, obstacle: &Obstacle) -> bool {
    rects_intersect(&player.rect(), &obstacle.rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_corner() {
        let player = Rect::new(100.0, 100.0, 46.0, 86.0);
        let obstacle = Rect::new(100.0, 100.0, 10.0, 10.0);
        assert!(rects_intersect(&player, &obstacle));
    }

    #[test]
    fn test_touching_right_edge_is_not_a_hit() {
        let player = Rect::new(100.0, 100.0, 46.0, 86.0);
        let obstacle = Rect::new(146.0, 100.0, 10.0, 10.0);
        assert!(!rects_intersect(&player, &obstacle));
    }

    #[test]
    fn test_touching_top_edge_is_not_a_hit() {
        let player = Rect::new(100.0, 100.0, 46.0, 86.0);
        let obstacle = Rect::new(110.0, 90.0, 10.0, 10.0);
        assert!(!rects_intersect(&player, &obstacle));

        // One pixel lower and it overlaps
        let obstacle = Rect::new(110.0, 91.0, 10.0, 10.0);
        assert!(rects_intersect(&player, &obstacle));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!rects_intersect(&a, &b));
    }

    #[test]
    fn test_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(rects_intersect(&outer, &inner));
        assert!(rects_intersect(&inner, &outer));
    }

    fn arb_rect() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 1.0f32..200.0, 1.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(rects_intersect(&a, &b), rects_intersect(&b, &a));
        }

        #[test]
        fn rect_intersects_itself(a in arb_rect()) {
            prop_assert!(rects_intersect(&a, &a));
        }
    }
}
