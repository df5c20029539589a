//! Entity renderers
//!
//! Each entity is drawn either from its sprite, when the painter reports the
//! sprite as loaded with a usable size, or procedurally. The choice is made
//! per draw call, so a sprite that finishes loading mid-run is picked up on
//! the next frame.

use glam::Vec2;

use super::Painter;
use super::vertex::colors;
use crate::sim::Rect;

/// Sprite slots a painter may provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Obstacle,
}

/// Something that can draw one entity into a destination rect
pub trait EntityRenderer {
    fn draw<P: Painter + ?Sized>(&self, painter: &mut P, dst: Rect);
}

/// Draw an entity with whichever renderer is available right now
pub fn draw_entity<P: Painter + ?Sized>(painter: &mut P, kind: SpriteKind, dst: Rect) {
    match SpriteRenderer::ready(painter, kind) {
        Some(sprite) => sprite.draw(painter, dst),
        None => ProceduralRenderer { kind }.draw(painter, dst),
    }
}

/// Draws from a loaded sprite image
#[derive(Debug, Clone, Copy)]
pub struct SpriteRenderer {
    pub kind: SpriteKind,
    /// Natural size of the image in pixels
    pub natural_size: Vec2,
}

impl SpriteRenderer {
    /// Sprite renderer if the painter has a non-empty image for `kind`
    pub fn ready<P: Painter + ?Sized>(painter: &P, kind: SpriteKind) -> Option<Self> {
        painter
            .sprite_size(kind)
            .filter(|size| size.x > 0.0 && size.y > 0.0)
            .map(|natural_size| Self { kind, natural_size })
    }

    /// Source region that covers `dst` without distortion, centred
    pub fn cover_crop(&self, dst: Rect) -> Rect {
        let natural = self.natural_size;
        let scale = (dst.w() / natural.x).max(dst.h() / natural.y);
        let crop = dst.size / scale;
        let offset = (natural - crop) / 2.0;
        Rect {
            pos: offset,
            size: crop,
        }
    }
}

impl EntityRenderer for SpriteRenderer {
    fn draw<P: Painter + ?Sized>(&self, painter: &mut P, dst: Rect) {
        match self.kind {
            SpriteKind::Player => {
                painter.draw_sprite(self.kind, self.cover_crop(dst), dst);
                painter.stroke_rect(dst.inset(1.0), colors::CAR_TRIM, 2.0);
            }
            SpriteKind::Obstacle => {
                let full = Rect {
                    pos: Vec2::ZERO,
                    size: self.natural_size,
                };
                painter.draw_sprite(self.kind, full, dst);
                painter.stroke_rect(dst.inset(1.0), colors::OBSTACLE_OUTLINE, 2.0);
            }
        }
    }
}

/// Draws with solid shapes only
#[derive(Debug, Clone, Copy)]
pub struct ProceduralRenderer {
    pub kind: SpriteKind,
}

impl EntityRenderer for ProceduralRenderer {
    fn draw<P: Painter + ?Sized>(&self, painter: &mut P, dst: Rect) {
        match self.kind {
            SpriteKind::Player => draw_car(painter, dst),
            SpriteKind::Obstacle => {
                painter.fill_rect(dst, colors::OBSTACLE);
                painter.stroke_rect(dst.inset(1.0), colors::OBSTACLE_OUTLINE, 2.0);
            }
        }
    }
}

/// Top-down sports car filling `r`
fn draw_car<P: Painter + ?Sized>(painter: &mut P, r: Rect) {
    let (x, y, w, h) = (r.x(), r.y(), r.w(), r.h());
    let body_y = y + h * 0.18;
    let body_h = h * 0.70;
    let corner = (w * 0.22).min(12.0);
    let body = Rect::new(x, body_y, w, body_h);

    // Body with a raked nose on the right and chamfered corners
    painter.fill_polygon(
        &[
            Vec2::new(x + corner, body_y),
            Vec2::new(x + w * 0.72, body_y),
            Vec2::new(x + w, body_y + body_h * 0.22),
            Vec2::new(x + w, body_y + body_h - corner),
            Vec2::new(x + w - corner, body_y + body_h),
            Vec2::new(x + corner, body_y + body_h),
            Vec2::new(x, body_y + body_h - corner),
            Vec2::new(x, body_y + corner),
        ],
        colors::CAR_BODY,
    );

    painter.fill_polygon(
        &[
            body.lerp_point(0.10, 0.12),
            body.lerp_point(0.70, 0.12),
            body.lerp_point(0.92, 0.30),
            body.lerp_point(0.92, 0.40),
            body.lerp_point(0.10, 0.40),
        ],
        colors::CAR_WINDSHIELD,
    );

    painter.fill_polygon(
        &[
            body.lerp_point(0.16, 0.16),
            body.lerp_point(0.62, 0.16),
            body.lerp_point(0.78, 0.28),
            body.lerp_point(0.16, 0.28),
        ],
        colors::CAR_HIGHLIGHT,
    );

    let wheel_w = w * 0.22;
    let wheel_h = h * 0.11;
    for (fx, fy) in [(0.10, 0.10), (0.68, 0.10), (0.10, 0.80), (0.68, 0.80)] {
        let corner = r.lerp_point(fx, fy);
        painter.fill_rect(
            Rect::new(corner.x, corner.y, wheel_w, wheel_h),
            colors::CAR_WHEEL,
        );
    }

    painter.line(
        r.lerp_point(0.10, 0.52),
        r.lerp_point(0.92, 0.52),
        colors::CAR_TRIM,
        2.0,
    );
    painter.stroke_rect(r.inset(1.0), colors::CAR_TRIM, 2.0);
}
