//! Flappy - a side-scrolling gap-dodging arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, obstacles, scoring, game state)
//! - `assets`: Sprite surfaces, pixel masks and the asset provider seam
//! - `renderer`: Layered draw lists handed to the display collaborator
//! - `audio`: Fire-and-forget sound cues
//! - `clock`: Fixed-rate frame pacing
//! - `settings`: Host preferences
//! - `autopilot`: Demo pilot for headless runs

pub mod assets;
pub mod audio;
pub mod autopilot;
pub mod clock;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 288;
    pub const SCREEN_HEIGHT: u32 = 512;

    /// Target frame rate; one simulation tick per frame
    pub const FPS: u32 = 60;

    /// Bird physics (pixels per tick)
    pub const GRAVITY: f32 = 0.4;
    pub const FLAP_STRENGTH: f32 = 6.0;

    /// Animation accumulator increments per tick
    pub const ANIMATION_SPEED: f32 = 0.1;
    pub const FLAP_ANIMATION_SPEED: f32 = 0.2;
    /// Ticks the fast animation keeps running after the flap key is released
    pub const FLAP_DURATION: u32 = 15;

    /// Bird spawns off-screen and glides right to its resting column
    pub const BIRD_START_X: f32 = -50.0;
    pub const BIRD_START_Y: f32 = 50.0;
    pub const BIRD_REST_X: f32 = 50.0;
    pub const BIRD_GLIDE_SPEED: f32 = 3.0;

    /// Vertical space between the top and bottom pipe
    pub const PIPE_GAP: u32 = 100;
    pub const PIPE_SPEED: f32 = 2.0;
    /// Obstacles left of this x have been passed by the bird
    pub const PASS_THRESHOLD_X: f32 = BIRD_REST_X;
    /// Closest the gap center may get to the ceiling or the floor
    pub const GAP_MARGIN: f32 = 100.0;
    pub const SPAWN_INTERVAL: Duration = Duration::from_millis(1500);

    pub const BACKGROUND_SPEED: f32 = 2.0;
    pub const FLOOR_SPEED: f32 = PIPE_SPEED;

    /// Top edge of the score readout
    pub const SCORE_Y: f32 = 20.0;
}
