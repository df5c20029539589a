//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in viewport pixel coordinates.

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering a rectangle
pub fn quad(rect: Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (rect.x(), rect.y());
    let (x1, y1) = (rect.right(), rect.bottom());

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Rectangle outline with the stroke centred on the rect's edges
pub fn rect_outline(rect: Rect, color: [f32; 4], width: f32) -> Vec<Vertex> {
    let half = width / 2.0;
    let outer = rect.inset(-half);

    let mut vertices = Vec::with_capacity(24);
    // Top and bottom bands span the full outer width
    vertices.extend(quad(Rect::new(outer.x(), outer.y(), outer.w(), width), color));
    vertices.extend(quad(
        Rect::new(outer.x(), outer.bottom() - width, outer.w(), width),
        color,
    ));
    // Left and right bands fill the gap between them
    let side_h = outer.h() - width * 2.0;
    if side_h > 0.0 {
        vertices.extend(quad(Rect::new(outer.x(), outer.y() + width, width, side_h), color));
        vertices.extend(quad(
            Rect::new(outer.right() - width, outer.y() + width, width, side_h),
            color,
        ));
    }
    vertices
}

/// A line segment of the given thickness
pub fn thick_line(from: Vec2, to: Vec2, color: [f32; 4], width: f32) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Fan triangulation of a convex polygon
pub fn convex_polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    let anchor = points[0];
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(anchor.x, anchor.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_quad_corners() {
        let v = quad(Rect::new(10.0, 20.0, 30.0, 40.0), WHITE);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[5].position, [40.0, 60.0]);
    }

    #[test]
    fn test_outline_is_centred_on_edges() {
        let v = rect_outline(Rect::new(10.0, 10.0, 100.0, 50.0), WHITE, 2.0);
        assert_eq!(v.len(), 24);
        let min_x = v.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_y = v.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(min_x, 9.0);
        assert_eq!(max_y, 61.0);
    }

    #[test]
    fn test_degenerate_shapes_are_empty() {
        assert!(thick_line(Vec2::ONE, Vec2::ONE, WHITE, 2.0).is_empty());
        assert!(convex_polygon(&[Vec2::ZERO, Vec2::ONE], WHITE).is_empty());
    }

    #[test]
    fn test_polygon_fan() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];
        assert_eq!(convex_polygon(&square, WHITE).len(), 6);
    }
}
