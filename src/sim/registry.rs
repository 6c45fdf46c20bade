//! Entity capabilities and the layered entity registry
//!
//! Every entity owns its own state. The registry holds them in typed slots
//! and composes the per-frame update and draw passes in layer order by
//! borrowing them through the [`Updatable`] and [`Drawable`] capabilities.

use crate::renderer::{DrawList, Layer};

use super::background::Floor;
use super::bird::Bird;
use super::obstacle::Obstacle;
use super::overlay::{Overlay, ScoreDisplay};

/// Advances once per gameplay tick
pub trait Updatable {
    fn update(&mut self);

    /// Dead entities are dropped after the update pass
    fn is_alive(&self) -> bool {
        true
    }
}

/// Emits blits for one frame
pub trait Drawable {
    fn layer(&self) -> Layer;
    fn draw(&self, list: &mut DrawList);
}

/// Gameplay entities, iterated by layer
#[derive(Debug)]
pub struct EntityRegistry {
    bird: Bird,
    obstacles: Vec<Obstacle>,
    floor: Floor,
    score_display: ScoreDisplay,
    overlay: Option<Overlay>,
}

impl EntityRegistry {
    pub fn new(bird: Bird, floor: Floor, score_display: ScoreDisplay) -> Self {
        Self {
            bird,
            obstacles: Vec::new(),
            floor,
            score_display,
            overlay: None,
        }
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    /// Live obstacles, oldest first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn floor(&self) -> &Floor {
        &self.floor
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn spawn_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Show the one-shot overlay; later calls keep the first one
    pub fn show_overlay(&mut self, overlay: Overlay) {
        if self.overlay.is_none() {
            self.overlay = Some(overlay);
        }
    }

    pub fn set_score(&mut self, score: u32) {
        self.score_display.set_value(score);
    }

    fn updatables(&mut self) -> Vec<&mut dyn Updatable> {
        let mut entities: Vec<&mut dyn Updatable> = Vec::with_capacity(self.obstacles.len() + 2);
        for obstacle in &mut self.obstacles {
            entities.push(obstacle);
        }
        entities.push(&mut self.floor);
        entities.push(&mut self.bird);
        entities
    }

    fn drawables(&self) -> Vec<&dyn Drawable> {
        let mut entities: Vec<&dyn Drawable> = Vec::with_capacity(self.obstacles.len() + 4);
        entities.push(&self.bird);
        entities.push(&self.floor);
        for obstacle in &self.obstacles {
            entities.push(obstacle);
        }
        entities.push(&self.score_display);
        if let Some(overlay) = &self.overlay {
            entities.push(overlay);
        }
        entities.sort_by_key(|e| e.layer());
        entities
    }

    /// Update every entity (obstacles, floor, then bird), then drop the dead ones
    pub fn update_pass(&mut self) {
        for entity in self.updatables() {
            entity.update();
        }
        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.is_alive());
        let removed = before - self.obstacles.len();
        if removed > 0 {
            log::debug!("Removed {} off-screen obstacle(s)", removed);
        }
    }

    /// Append every entity's blits, back to front
    pub fn draw_pass(&self, list: &mut DrawList) {
        for entity in self.drawables() {
            entity.draw(list);
        }
    }
}
