//! Frame composition: road, obstacles, player

use glam::Vec2;

use super::Painter;
use super::sprites::{SpriteKind, draw_entity};
use super::vertex::colors;
use crate::consts::LANE_MARGIN;
use crate::sim::{FrameSnapshot, Viewport};

/// Length of each centre line dash and of each gap
const DASH: f32 = 18.0;

/// Draw one complete frame
pub fn draw_frame<P: Painter + ?Sized>(painter: &mut P, snapshot: &FrameSnapshot) {
    draw_road(painter, &snapshot.viewport);

    for obstacle in &snapshot.obstacles {
        draw_entity(painter, SpriteKind::Obstacle, *obstacle);
    }

    draw_entity(painter, SpriteKind::Player, snapshot.player);
}

fn draw_road<P: Painter + ?Sized>(painter: &mut P, viewport: &Viewport) {
    painter.clear(colors::BACKGROUND);

    let lane = viewport.rect().inset(LANE_MARGIN);
    painter.fill_rect(lane, colors::LANE_FILL);
    painter.stroke_rect(lane, colors::LANE_BORDER, 2.0);

    let x = viewport.width / 2.0;
    let end = viewport.height - DASH;
    let mut y = DASH;
    while y < end {
        let dash_end = (y + DASH).min(end);
        painter.line(Vec2::new(x, y), Vec2::new(x, dash_end), colors::CENTER_LINE, 3.0);
        y += DASH * 2.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::sprites::tests::{Call, RecordingPainter};
    use crate::sim::{GameState, Obstacle, Rect};

    #[test]
    fn test_frame_order() {
        let mut state = GameState::new(Viewport::default());
        state.obstacles.push(Obstacle {
            id: 1,
            rect: Rect::new(50.0, 60.0, 30.0, 40.0),
            speed: 220.0,
        });

        let mut painter = RecordingPainter::default();
        draw_frame(&mut painter, &state.snapshot());

        assert_eq!(painter.calls[0], Call::Clear);
        let obstacle_fill = painter
            .calls
            .iter()
            .position(|c| *c == Call::FillRect(Rect::new(50.0, 60.0, 30.0, 40.0), colors::OBSTACLE))
            .unwrap();
        let car_body = painter
            .calls
            .iter()
            .position(|c| *c == Call::Polygon(8))
            .unwrap();
        assert!(obstacle_fill < car_body);
    }

    #[test]
    fn test_dashes_cover_lane_height() {
        let viewport = Viewport::default();
        let state = GameState::new(viewport);
        let mut painter = RecordingPainter::default();
        draw_frame(&mut painter, &state.snapshot());

        // Dashes start every 36px below 702: 18, 54, ..., 666
        let lines = painter.calls.iter().filter(|c| **c == Call::Line).count();
        // One more line is the car's stripe
        assert_eq!(lines - 1, 19);
    }

    #[test]
    fn test_sprites_used_when_loaded() {
        let mut state = GameState::new(Viewport::default());
        state.obstacles.push(Obstacle {
            id: 1,
            rect: Rect::new(50.0, 60.0, 30.0, 40.0),
            speed: 220.0,
        });
        let mut painter = RecordingPainter::default();
        painter.sprites.insert(SpriteKind::Player, Vec2::new(92.0, 172.0));
        painter.sprites.insert(SpriteKind::Obstacle, Vec2::new(32.0, 32.0));

        draw_frame(&mut painter, &state.snapshot());
        assert_eq!(painter.sprite_calls().len(), 2);
    }
}
