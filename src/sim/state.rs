//! Run state machine
//!
//! Two states only. GameOver is terminal for gameplay: the host leaves it by
//! exiting, never by returning to Playing.

use serde::{Deserialize, Serialize};

use super::tick::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Playing,
    GameOver,
}

/// Owns the [`GameState`] and its transitions
#[derive(Debug, Clone, Default)]
pub struct GameStateMachine {
    state: GameState,
}

impl GameStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == GameState::Playing
    }

    /// Switch to GameOver. True only for the call that made the transition.
    pub fn enter_game_over(&mut self) -> bool {
        if self.state == GameState::GameOver {
            return false;
        }
        self.state = GameState::GameOver;
        true
    }

    /// Whether `event` ends the run. Window close always does; the quit key
    /// only once the game is over.
    pub fn wants_quit(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Quit => true,
            InputEvent::QuitKey => self.state == GameState::GameOver,
            _ => false,
        }
    }
}

/// End-of-run report logged by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub seed: u64,
    /// Gameplay ticks simulated before GameOver (or quit)
    pub ticks: u64,
    pub score: u32,
    pub state: GameState,
}
