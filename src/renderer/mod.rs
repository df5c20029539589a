//! Rendering module
//!
//! The simulation never draws. Each frame the driver hands a `FrameSnapshot`
//! to `scene::draw_frame`, which issues primitives against a `Painter`.
//! `VertexBatch` turns those primitives into triangles for the WebGPU
//! pipeline in `pipeline`.

pub mod batch;
pub mod hud;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod sprites;
pub mod vertex;

pub use batch::VertexBatch;
pub use hud::{Overlay, hud_score_text, hud_speed_text, overlay_for};
pub use pipeline::RenderState;
pub use scene::draw_frame;
pub use sprites::{EntityRenderer, ProceduralRenderer, SpriteKind, SpriteRenderer};

use glam::Vec2;

use crate::sim::Rect;

/// RGBA color, components in 0..1
pub type Color = [f32; 4];

/// Draw primitives offered by a presentation backend
///
/// Coordinates are viewport pixels, y down. Strokes are centred on the path.
pub trait Painter {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);
    /// Fill a convex polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    /// Natural pixel size of a loaded sprite, `None` while it is unavailable
    fn sprite_size(&self, _kind: SpriteKind) -> Option<Vec2> {
        None
    }

    /// Copy the `src` region of a sprite into `dst`
    fn draw_sprite(&mut self, _kind: SpriteKind, _src: Rect, _dst: Rect) {}
}
