//! Layered draw commands

use std::rc::Rc;

use glam::Vec2;

use crate::assets::Sprite;

/// Render layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Background,
    Obstacle,
    Floor,
    Player,
    Ui,
}

/// One sprite blit at a top-left screen position
#[derive(Debug, Clone)]
pub struct DrawCommand {
    pub sprite: Rc<Sprite>,
    pub position: Vec2,
    pub layer: Layer,
}

/// Ordered blits for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sprite: &Rc<Sprite>, position: Vec2, layer: Layer) {
        self.commands.push(DrawCommand {
            sprite: Rc::clone(sprite),
            position,
            layer,
        });
    }

    /// Stable sort by layer; blits within a layer keep submission order
    pub fn sort_by_layer(&mut self) {
        self.commands.sort_by_key(|c| c.layer);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of blits on `layer`
    pub fn count_on(&self, layer: Layer) -> usize {
        self.commands.iter().filter(|c| c.layer == layer).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }
}
