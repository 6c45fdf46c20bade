//! The assembled simulation world

use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::background::{Background, Floor};
use super::bird::{Bird, BirdPhysics};
use super::obstacle::{Obstacle, PipePair};
use super::overlay::ScoreDisplay;
use super::registry::{Drawable, EntityRegistry};
use super::score::ScoreTracker;
use super::spawner::ObstacleSpawner;
use super::state::{GameState, GameStateMachine, RunSummary};
use crate::assets::{AssetError, AssetProvider, Sprite, names};
use crate::consts::PIPE_GAP;
use crate::renderer::DrawList;

/// Everything one run needs, advanced by [`tick`](super::tick::tick)
#[derive(Debug)]
pub struct Game {
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    /// Gameplay ticks simulated (stops advancing at GameOver)
    pub(crate) time_ticks: u64,
    pub(crate) machine: GameStateMachine,
    pub(crate) background: Background,
    pub(crate) registry: EntityRegistry,
    pub(crate) spawner: ObstacleSpawner,
    pub(crate) score: ScoreTracker,
    pub(crate) game_over: Rc<Sprite>,
}

impl Game {
    /// Resolve every sprite up front; a missing one fails the whole run
    /// before the first frame. Score digits are optional.
    pub fn new<A: AssetProvider + ?Sized>(assets: &A, seed: u64) -> Result<Self, AssetError> {
        let [up, level, down] = names::BIRD_FRAMES;
        let bird = Bird::new(
            [assets.sprite(up)?, assets.sprite(level)?, assets.sprite(down)?],
            BirdPhysics::default(),
        );
        let background = Background::new(assets.sprite(names::BACKGROUND)?);
        let floor = Floor::new(assets.sprite(names::FLOOR)?);
        let pipes = Rc::new(PipePair::new(assets.sprite(names::PIPE)?, PIPE_GAP));
        let game_over = assets.sprite(names::GAME_OVER)?;

        let digits: Option<Vec<_>> = names::DIGITS.iter().map(|n| assets.try_sprite(n)).collect();
        if digits.is_none() {
            log::debug!("Score digits unavailable, score readout disabled");
        }
        let score_display = ScoreDisplay::new(digits.unwrap_or_default());

        let spawner = ObstacleSpawner::new(pipes, floor.height());
        log::info!("New run with seed {}", seed);

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            machine: GameStateMachine::new(),
            background,
            registry: EntityRegistry::new(bird, floor, score_display),
            spawner,
            score: ScoreTracker::new(),
            game_over,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn state(&self) -> GameState {
        self.machine.state()
    }

    pub fn is_playing(&self) -> bool {
        self.machine.is_playing()
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn bird(&self) -> &Bird {
        self.registry.bird()
    }

    /// Live obstacles, oldest first
    pub fn obstacles(&self) -> &[Obstacle] {
        self.registry.obstacles()
    }

    pub fn background(&self) -> &Background {
        &self.background
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn spawner(&self) -> &ObstacleSpawner {
        &self.spawner
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            seed: self.seed,
            ticks: self.time_ticks,
            score: self.score(),
            state: self.state(),
        }
    }

    /// Frame contents, back to front: background, then the layered entities
    pub fn draw_list(&self) -> DrawList {
        let mut list = DrawList::new();
        self.background.draw(&mut list);
        self.registry.draw_pass(&mut list);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{SpriteAtlas, procedural};
    use crate::consts::{BIRD_START_X, BIRD_START_Y};
    use crate::renderer::Layer;
    use glam::Vec2;

    #[test]
    fn test_new_game_starts_playing() {
        let atlas = procedural::atlas().unwrap();
        let game = Game::new(&atlas, 42).unwrap();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.time_ticks(), 0);
        assert!(game.obstacles().is_empty());
        assert_eq!(game.bird().position, Vec2::new(BIRD_START_X, BIRD_START_Y));
        // Procedural floor is 112px tall
        assert_eq!(game.spawner().bounds(), (100.0, 300.0));
    }

    #[test]
    fn test_missing_sprite_is_fatal() {
        let atlas = SpriteAtlas::new();
        match Game::new(&atlas, 1) {
            Err(AssetError::Missing { name }) => assert_eq!(name, "redbird-0"),
            other => panic!("expected missing sprite, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_digits_are_optional() {
        let full = procedural::atlas().unwrap();
        let mut atlas = SpriteAtlas::new();
        for name in names::BIRD_FRAMES
            .iter()
            .chain(&[names::PIPE, names::BACKGROUND, names::FLOOR, names::GAME_OVER])
        {
            let sprite = full.sprite(name).unwrap();
            atlas.insert(Sprite::clone(&sprite));
        }
        let game = Game::new(&atlas, 1).unwrap();
        assert_eq!(game.draw_list().count_on(Layer::Ui), 0);
    }

    #[test]
    fn test_draw_list_is_back_to_front() {
        let atlas = procedural::atlas().unwrap();
        let game = Game::new(&atlas, 42).unwrap();
        let list = game.draw_list();
        let layers: Vec<Layer> = list.iter().map(|c| c.layer).collect();
        let mut sorted = layers.clone();
        sorted.sort();
        assert_eq!(layers, sorted);
        assert_eq!(list.count_on(Layer::Background), 2);
        assert_eq!(list.count_on(Layer::Floor), 2);
        assert_eq!(list.count_on(Layer::Player), 1);
        // Score "0"
        assert_eq!(list.count_on(Layer::Ui), 1);
    }
}
