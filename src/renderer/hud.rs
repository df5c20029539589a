//! HUD and overlay text

use crate::sim::{FrameSnapshot, GamePhase};

/// Title and message shown over the lane between runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub title: String,
    pub text: String,
}

pub fn hud_score_text(snapshot: &FrameSnapshot) -> String {
    snapshot.score.to_string()
}

/// Speed multiplier with one decimal, e.g. `1.5x`
pub fn hud_speed_text(snapshot: &FrameSnapshot) -> String {
    format!("{:.1}x", snapshot.speed_scale)
}

/// Overlay for the current phase; `None` while a run is active
pub fn overlay_for(snapshot: &FrameSnapshot) -> Option<Overlay> {
    match snapshot.phase {
        GamePhase::Running => None,
        GamePhase::Idle => Some(Overlay {
            title: "Obstacle Racing".to_string(),
            text: "Press Enter to start".to_string(),
        }),
        GamePhase::GameOver => Some(Overlay {
            title: "Game Over".to_string(),
            text: format!("Score: {} - Press Enter to play again", snapshot.score),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Viewport};

    #[test]
    fn test_hud_text() {
        let mut state = GameState::new(Viewport::default());
        state.score = 42;
        state.speed_scale = 1.77;
        let snapshot = state.snapshot();
        assert_eq!(hud_score_text(&snapshot), "42");
        assert_eq!(hud_speed_text(&snapshot), "1.8x");
    }

    #[test]
    fn test_overlay_per_phase() {
        let mut state = GameState::new(Viewport::default());
        assert_eq!(overlay_for(&state.snapshot()).map(|o| o.title), Some("Obstacle Racing".into()));

        state.start();
        assert_eq!(overlay_for(&state.snapshot()), None);

        state.score = 9;
        state.game_over();
        let overlay = overlay_for(&state.snapshot()).unwrap();
        assert_eq!(overlay.title, "Game Over");
        assert!(overlay.text.contains("Score: 9"));
    }
}
