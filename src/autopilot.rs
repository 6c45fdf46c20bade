//! Demo pilot that flies the bird toward the next gap
//!
//! Produces the same input events a player would, so the simulation cannot
//! tell the difference.

use crate::sim::{Game, InputEvent};

/// Fallback target when no obstacle is ahead
const CRUISE_Y: f32 = 200.0;
/// Aim this far below the gap center; a flap lifts the bird about 40px
const AIM_BELOW_CENTER: f32 = 15.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Flap key is down and must be released next frame
    holding: bool,
    flaps: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flaps(&self) -> u64 {
        self.flaps
    }

    /// Height the bird's center should hover at
    pub fn target_y(game: &Game) -> f32 {
        let bird = game.bird();
        game.obstacles()
            .iter()
            .find(|o| o.right() > bird.position.x)
            .map(|o| o.gap_center() + AIM_BELOW_CENTER)
            .unwrap_or(CRUISE_Y)
    }

    /// Input for the coming frame
    pub fn events(&mut self, game: &Game) -> Vec<InputEvent> {
        if !game.is_playing() {
            return Vec::new();
        }
        if self.holding {
            self.holding = false;
            return vec![InputEvent::FlapUp];
        }

        let bird = game.bird();
        if bird.fall_speed > 0.0 && bird.center_y() > Self::target_y(game) {
            self.holding = true;
            self.flaps += 1;
            return vec![InputEvent::FlapDown];
        }
        Vec::new()
    }
}
