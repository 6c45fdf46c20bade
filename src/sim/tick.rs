//! Fixed timestep simulation tick
//!
//! One call per frame: input, then entity updates, spawning, collision,
//! scoring and the game over transition.

use std::rc::Rc;
use std::time::Duration;

use super::collision::collides;
use super::game::Game;
use super::overlay::Overlay;
use super::registry::Updatable;
use crate::audio::{AudioSink, SoundEffect};
use crate::consts::SCREEN_HEIGHT;

/// Host input delivered to a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    /// Flap key pressed
    FlapDown,
    /// Flap key released
    FlapUp,
    /// Escape pressed
    QuitKey,
    /// Anything else
    Other,
}

/// What the host loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Advance the game by one frame
pub fn tick(
    game: &mut Game,
    events: &[InputEvent],
    dt: Duration,
    audio: &mut dyn AudioSink,
) -> FrameOutcome {
    for event in events {
        if game.machine.wants_quit(event) {
            log::info!("Quit requested after {} ticks", game.time_ticks);
            return FrameOutcome::Quit;
        }
        if game.machine.is_playing() {
            game.registry.bird_mut().handle_input(event);
        }
    }

    // Backdrop keeps moving behind the game over banner
    game.background.update();

    if !game.machine.is_playing() {
        return FrameOutcome::Continue;
    }

    game.time_ticks += 1;
    game.registry.update_pass();

    for obstacle in game.spawner.advance(dt, &mut game.rng) {
        game.registry.spawn_obstacle(obstacle);
    }

    let hit = collides(game.registry.bird(), game.registry.obstacles());

    if game.score.evaluate(game.registry.obstacles_mut(), audio) > 0 {
        let score = game.score.score();
        game.registry.set_score(score);
        log::debug!("Score {}", score);
    }

    let off_screen = game.registry.bird().is_off_screen(SCREEN_HEIGHT as f32);

    if (hit || off_screen) && game.machine.enter_game_over() {
        audio.play(SoundEffect::Hit);
        game.registry
            .show_overlay(Overlay::centered(Rc::clone(&game.game_over)));
        game.spawner.stop();
        log::info!(
            "Game over after {} ticks ({}), score {}",
            game.time_ticks,
            if hit { "collision" } else { "left the screen" },
            game.score.score()
        );
    }

    FrameOutcome::Continue
}
