//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacles oldest first)
//! - No windowing, audio or decoding dependencies

pub mod background;
pub mod bird;
pub mod collision;
pub mod game;
pub mod obstacle;
pub mod overlay;
pub mod registry;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use background::{Background, Floor, ScrollingTiles};
pub use bird::{Bird, BirdPhysics};
pub use collision::{CollisionHit, collides, first_hit};
pub use game::Game;
pub use obstacle::{Obstacle, PipePair};
pub use overlay::{Overlay, ScoreDisplay};
pub use registry::{Drawable, EntityRegistry, Updatable};
pub use score::ScoreTracker;
pub use spawner::{IntervalTimer, ObstacleSpawner, gap_bounds};
pub use state::{GameState, GameStateMachine, RunSummary};
pub use tick::{FrameOutcome, InputEvent, tick};
