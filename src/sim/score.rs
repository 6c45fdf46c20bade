//! Pass-through scoring

use super::obstacle::Obstacle;
use crate::audio::{AudioSink, SoundEffect};

/// Counts obstacles the bird has cleared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Award one point per obstacle that crossed the pass threshold since the
    /// last call, playing the point cue for each. Returns the points awarded.
    pub fn evaluate<'a>(
        &mut self,
        obstacles: impl IntoIterator<Item = &'a mut Obstacle>,
        audio: &mut dyn AudioSink,
    ) -> u32 {
        let mut awarded = 0;
        for obstacle in obstacles {
            if obstacle.is_passed() {
                awarded += 1;
                audio.play(SoundEffect::Point);
            }
        }
        self.score += awarded;
        awarded
    }
}
