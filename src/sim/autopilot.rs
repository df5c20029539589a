//! Demo-mode steering
//!
//! Picks a direction that moves the player out of the column of the most
//! imminent obstacle. Only used when `TickInput::autopilot` is set.

use super::state::{GameState, InputState, Obstacle};
use crate::consts::LANE_MARGIN;

/// Horizontal slack added on both sides of the player when looking for threats
const THREAT_PADDING: f32 = 8.0;

/// Choose held directions for this step
pub fn steer(state: &GameState) -> InputState {
    let player = state.player.rect();
    let mut guard = player;
    guard.pos.x -= THREAT_PADDING;
    guard.size.x += THREAT_PADDING * 2.0;

    // Lowest obstacle that is still above the player's bottom edge
    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.rect.y() < player.bottom() && guard.overlaps_x(&o.rect))
        .max_by(|a, b| a.rect.bottom().total_cmp(&b.rect.bottom()));

    let Some(threat) = threat else {
        return InputState::default();
    };

    if go_left(state, threat) {
        InputState::new(true, false)
    } else {
        InputState::new(false, true)
    }
}

/// Prefer the side the player is already on, unless that side lacks room
fn go_left(state: &GameState, threat: &Obstacle) -> bool {
    let player = state.player.rect();
    let room_left = threat.rect.x() - LANE_MARGIN;
    let room_right = state.viewport.width - LANE_MARGIN - threat.rect.right();
    let fits_left = room_left >= player.w() + THREAT_PADDING;
    let fits_right = room_right >= player.w() + THREAT_PADDING;

    match (fits_left, fits_right) {
        (true, false) => true,
        (false, true) => false,
        _ => player.center().x < threat.rect.center().x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::Viewport;

    fn running_state() -> GameState {
        let mut state = GameState::new(Viewport::default());
        state.start();
        state
    }

    fn obstacle_at(x: f32, y: f32, w: f32) -> Obstacle {
        Obstacle {
            id: 1,
            rect: Rect::new(x, y, w, 40.0),
            speed: 220.0,
        }
    }

    #[test]
    fn test_no_threat_holds_still() {
        let state = running_state();
        assert_eq!(steer(&state), InputState::default());
    }

    #[test]
    fn test_dodges_away_from_obstacle_center() {
        let mut state = running_state();
        // Player spans 187..233; obstacle slightly to the right of centre
        state.obstacles.push(obstacle_at(200.0, 300.0, 40.0));
        assert_eq!(steer(&state), InputState::new(true, false));

        state.obstacles[0].rect.pos.x = 170.0;
        assert_eq!(steer(&state), InputState::new(false, true));
    }

    #[test]
    fn test_ignores_obstacles_in_other_columns() {
        let mut state = running_state();
        state.obstacles.push(obstacle_at(20.0, 300.0, 40.0));
        assert_eq!(steer(&state), InputState::default());
    }

    #[test]
    fn test_avoids_the_wall_side() {
        let mut state = running_state();
        state.player.pos.x = LANE_MARGIN;
        // Obstacle left of the player's centre but hugging the left wall
        state.obstacles.push(obstacle_at(16.0, 300.0, 30.0));
        assert_eq!(steer(&state), InputState::new(false, true));
    }
}
