//! Horizontally tiling scrollers: the sky backdrop and the floor strip
//!
//! Each scroller cycles two copies of one sprite placed exactly one tile
//! width apart. A copy whose right edge reaches x=0 jumps back behind the
//! other, so the pair always covers the screen.

use std::rc::Rc;

use glam::Vec2;

use super::registry::{Drawable, Updatable};
use crate::assets::Sprite;
use crate::consts::{BACKGROUND_SPEED, FLOOR_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::{DrawList, Layer};

/// Two copies of a sprite scrolling left in lockstep
#[derive(Debug, Clone)]
pub struct ScrollingTiles {
    sprite: Rc<Sprite>,
    /// Left edges of the two copies
    xs: [f32; 2],
    y: f32,
    /// Distance between copies
    span: f32,
    speed: f32,
    layer: Layer,
}

impl ScrollingTiles {
    pub fn new(sprite: Rc<Sprite>, y: f32, span: f32, speed: f32, layer: Layer) -> Self {
        Self {
            sprite,
            xs: [0.0, span],
            y,
            span,
            speed,
            layer,
        }
    }

    pub fn positions(&self) -> [Vec2; 2] {
        self.xs.map(|x| Vec2::new(x, self.y))
    }

    pub fn span(&self) -> f32 {
        self.span
    }

    pub fn scroll(&mut self) {
        for x in &mut self.xs {
            *x -= self.speed;
            if *x + self.span <= 0.0 {
                // Lands at one span, right behind the other copy
                *x += 2.0 * self.span;
            }
        }
    }

    fn blit(&self, list: &mut DrawList) {
        for position in self.positions() {
            list.push(&self.sprite, position, self.layer);
        }
    }
}

/// Decorative sky; scrolls every frame regardless of game state
#[derive(Debug, Clone)]
pub struct Background {
    tiles: ScrollingTiles,
}

impl Background {
    pub fn new(sprite: Rc<Sprite>) -> Self {
        Self {
            tiles: ScrollingTiles::new(
                sprite,
                0.0,
                SCREEN_WIDTH as f32,
                BACKGROUND_SPEED,
                Layer::Background,
            ),
        }
    }

    pub fn tiles(&self) -> &ScrollingTiles {
        &self.tiles
    }
}

impl Updatable for Background {
    fn update(&mut self) {
        self.tiles.scroll();
    }
}

impl Drawable for Background {
    fn layer(&self) -> Layer {
        Layer::Background
    }

    fn draw(&self, list: &mut DrawList) {
        self.tiles.blit(list);
    }
}

/// Ground strip anchored to the bottom edge; freezes with the rest of the
/// gameplay entities
#[derive(Debug, Clone)]
pub struct Floor {
    tiles: ScrollingTiles,
}

impl Floor {
    pub fn new(sprite: Rc<Sprite>) -> Self {
        let y = SCREEN_HEIGHT as f32 - sprite.height() as f32;
        let span = sprite.width().max(1) as f32;
        Self {
            tiles: ScrollingTiles::new(sprite, y, span, FLOOR_SPEED, Layer::Floor),
        }
    }

    /// Height of the strip; obstacle gaps stay clear of it
    pub fn height(&self) -> f32 {
        self.tiles.sprite.height() as f32
    }

    pub fn tiles(&self) -> &ScrollingTiles {
        &self.tiles
    }
}

impl Updatable for Floor {
    fn update(&mut self) {
        self.tiles.scroll();
    }
}

impl Drawable for Floor {
    fn layer(&self) -> Layer {
        Layer::Floor
    }

    fn draw(&self, list: &mut DrawList) {
        self.tiles.blit(list);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sprite(name: &str, w: u32, h: u32) -> Rc<Sprite> {
        Rc::new(Sprite::from_rgba(name, w, h, vec![255; (w * h * 4) as usize]).unwrap())
    }

    #[test]
    fn test_tile_wraps_to_screen_width() {
        let mut bg = Background::new(sprite("background", SCREEN_WIDTH, 8));
        let ticks = (SCREEN_WIDTH as f32 / BACKGROUND_SPEED) as usize;
        for _ in 0..ticks {
            bg.update();
        }
        let [a, b] = bg.tiles().positions();
        assert_eq!(a.x, SCREEN_WIDTH as f32);
        assert_eq!(b.x, 0.0);
    }

    #[test]
    fn test_floor_sits_on_bottom_edge() {
        let floor = Floor::new(sprite("floor", 336, 112));
        assert_eq!(floor.height(), 112.0);
        let [a, b] = floor.tiles().positions();
        assert_eq!(a, Vec2::new(0.0, 400.0));
        assert_eq!(b, Vec2::new(336.0, 400.0));
    }

    #[test]
    fn test_draws_both_copies_on_own_layer() {
        let floor = Floor::new(sprite("floor", 40, 10));
        let mut list = DrawList::new();
        floor.draw(&mut list);
        assert_eq!(list.count_on(Layer::Floor), 2);
    }

    proptest! {
        #[test]
        fn prop_copies_stay_one_span_apart(ticks in 0usize..2000, speed in 0.5f32..7.0) {
            let mut tiles = ScrollingTiles::new(sprite("t", 4, 4), 0.0, 288.0, speed, Layer::Background);
            for _ in 0..ticks {
                tiles.scroll();
            }
            let [a, b] = tiles.positions();
            prop_assert!(((a.x - b.x).abs() - 288.0).abs() < 0.5);
            // The pair always covers the screen
            prop_assert!(a.x.min(b.x) <= 0.5);
            prop_assert!(a.x.min(b.x) > -288.0);
        }
    }
}
