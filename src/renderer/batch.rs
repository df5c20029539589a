//! Painter that collects triangles for the GPU

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use super::{Color, Painter};
use crate::sim::Rect;

/// Accumulates one frame of vertices in viewport pixel coordinates
///
/// Sprites are never reported as loaded, so every entity is drawn
/// procedurally.
#[derive(Debug, Clone)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
    clear_color: Color,
}

impl Default for VertexBatch {
    fn default() -> Self {
        Self {
            vertices: Vec::with_capacity(1024),
            clear_color: colors::BACKGROUND,
        }
    }
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Painter for VertexBatch {
    /// Starts a new frame: drops queued vertices and sets the clear color
    fn clear(&mut self, color: Color) {
        self.vertices.clear();
        self.clear_color = color;
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(shapes::quad(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.vertices.extend(shapes::rect_outline(rect, color, width));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        self.vertices.extend(shapes::convex_polygon(points, color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.vertices.extend(shapes::thick_line(from, to, color, width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_frame;
    use crate::sim::{GameState, Viewport};

    #[test]
    fn test_clear_starts_new_frame() {
        let mut batch = VertexBatch::new();
        batch.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), [1.0; 4]);
        assert_eq!(batch.vertices().len(), 6);

        batch.clear([0.0, 0.0, 0.0, 1.0]);
        assert!(batch.is_empty());
        assert_eq!(batch.clear_color(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_frames_do_not_accumulate() {
        let state = GameState::new(Viewport::default());
        let mut batch = VertexBatch::new();
        draw_frame(&mut batch, &state.snapshot());
        let first = batch.vertices().len();
        draw_frame(&mut batch, &state.snapshot());
        assert!(first > 0);
        assert_eq!(batch.vertices().len(), first);
    }
}
