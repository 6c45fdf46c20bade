//! UI-layer entities: the game over banner and the score readout

use std::rc::Rc;

use glam::Vec2;

use super::registry::Drawable;
use crate::assets::Sprite;
use crate::consts::{SCORE_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::{DrawList, Layer};

/// Static sprite on the UI layer
#[derive(Debug, Clone)]
pub struct Overlay {
    sprite: Rc<Sprite>,
    position: Vec2,
}

impl Overlay {
    /// Centered on the screen
    pub fn centered(sprite: Rc<Sprite>) -> Self {
        let half = sprite.size().as_vec2() / 2.0;
        let center = Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32) / 2.0;
        Self {
            position: (center - half).floor(),
            sprite,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn sprite(&self) -> &Rc<Sprite> {
        &self.sprite
    }
}

impl Drawable for Overlay {
    fn layer(&self) -> Layer {
        Layer::Ui
    }

    fn draw(&self, list: &mut DrawList) {
        list.push(&self.sprite, self.position, Layer::Ui);
    }
}

/// Current score drawn as digit sprites, centered near the top.
/// Draws nothing when digit sprites are unavailable.
#[derive(Debug, Clone, Default)]
pub struct ScoreDisplay {
    digits: Vec<Rc<Sprite>>,
    value: u32,
}

impl ScoreDisplay {
    /// `digits[n]` must be the glyph for `n`; any other length disables drawing
    pub fn new(digits: Vec<Rc<Sprite>>) -> Self {
        let digits = if digits.len() == 10 { digits } else { Vec::new() };
        Self { digits, value: 0 }
    }

    pub fn set_value(&mut self, value: u32) {
        self.value = value;
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    fn glyphs(&self) -> Vec<&Rc<Sprite>> {
        self.value
            .to_string()
            .bytes()
            .map(|b| &self.digits[(b - b'0') as usize])
            .collect()
    }
}

impl Drawable for ScoreDisplay {
    fn layer(&self) -> Layer {
        Layer::Ui
    }

    fn draw(&self, list: &mut DrawList) {
        if self.digits.is_empty() {
            return;
        }
        let glyphs = self.glyphs();
        let total: u32 = glyphs.iter().map(|g| g.width()).sum();
        let mut x = ((SCREEN_WIDTH - total.min(SCREEN_WIDTH)) / 2) as f32;
        for glyph in glyphs {
            list.push(glyph, Vec2::new(x, SCORE_Y), Layer::Ui);
            x += glyph.width() as f32;
        }
    }
}
