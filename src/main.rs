//! Flappy entry point
//!
//! Runs the simulation headless: procedural sprites, logged audio and a
//! tracing renderer, flown by the autopilot.

use flappy::Settings;
use flappy::assets::procedural;
use flappy::audio::LogAudio;
use flappy::autopilot::Autopilot;
use flappy::clock::FrameClock;
use flappy::renderer::{LogRenderer, Renderer};
use flappy::sim::{FrameOutcome, Game, InputEvent, tick};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Flappy (headless) starting...");

    let settings = Settings::load();
    let atlas = procedural::atlas()?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut game = Game::new(&atlas, seed)?;

    let mut audio = LogAudio::from_settings(&settings);
    let mut renderer = LogRenderer::default();
    let mut clock = FrameClock::new(settings.fps);
    let mut pilot = Autopilot::new();
    let mut game_over_frames = 0u64;

    loop {
        let mut events = if settings.autopilot {
            pilot.events(&game)
        } else {
            Vec::new()
        };
        if !game.is_playing() {
            // Nobody at the keyboard: press Escape once the banner has been up a while
            game_over_frames += 1;
            if game_over_frames > settings.linger_frames {
                events.push(InputEvent::QuitKey);
            }
        }

        if tick(&mut game, &events, clock.tick_duration(), &mut audio) == FrameOutcome::Quit {
            break;
        }
        renderer.present(&game.draw_list());
        clock.wait();

        if settings.max_frames.is_some_and(|max| clock.frames() >= max) {
            log::info!("Frame limit of {} reached", clock.frames());
            break;
        }
    }

    log::info!(
        "Run finished after {} frames, {} flaps: {}",
        renderer.frames(),
        pilot.flaps(),
        serde_json::to_string(&game.summary())?
    );
    Ok(())
}
