//! Pipe pairs the bird must fly between

use std::rc::Rc;

use glam::{IVec2, Vec2};

use super::registry::{Drawable, Updatable};
use crate::assets::{Mask, Sprite};
use crate::consts::{PASS_THRESHOLD_X, PIPE_SPEED};
use crate::renderer::{DrawList, Layer};

/// Shared art and collision mask for every obstacle.
///
/// The obstacle is one tall column: the flipped pipe on top, `gap` empty
/// rows, then the upright pipe. The combined mask is composed once and shared.
#[derive(Debug)]
pub struct PipePair {
    top: Rc<Sprite>,
    bottom: Rc<Sprite>,
    mask: Mask,
    gap: u32,
}

impl PipePair {
    /// `pipe` is the upright (lower) pipe
    pub fn new(pipe: Rc<Sprite>, gap: u32) -> Self {
        let top = Rc::new(pipe.flipped_vertical(format!("{}-flipped", pipe.name())));
        let (width, height) = (pipe.width(), pipe.height());

        let mut mask = Mask::new(width, height * 2 + gap);
        mask.draw(top.mask(), IVec2::ZERO);
        mask.draw(pipe.mask(), IVec2::new(0, (height + gap) as i32));

        Self {
            top,
            bottom: pipe,
            mask,
            gap,
        }
    }

    pub fn width(&self) -> f32 {
        self.mask.width() as f32
    }

    /// Height of the whole column, both pipes and the gap
    pub fn height(&self) -> f32 {
        self.mask.height() as f32
    }

    pub fn pipe_height(&self) -> f32 {
        self.bottom.height() as f32
    }

    pub fn gap(&self) -> f32 {
        self.gap as f32
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Top-left corner of the whole column
    pub position: Vec2,
    speed: f32,
    pipes: Rc<PipePair>,
    passed: bool,
}

impl Obstacle {
    /// Column whose left edge is at `x` and whose gap is centered on `gap_center`
    pub fn new(pipes: Rc<PipePair>, x: f32, gap_center: f32) -> Self {
        let y = gap_center - pipes.height() / 2.0;
        Self {
            position: Vec2::new(x, y),
            speed: PIPE_SPEED,
            pipes,
            passed: false,
        }
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.pipes.width()
    }

    /// Vertical extent of the gap as `(top, bottom)`
    pub fn gap_span(&self) -> (f32, f32) {
        let top = self.position.y + self.pipes.pipe_height();
        (top, top + self.pipes.gap())
    }

    pub fn gap_center(&self) -> f32 {
        let (top, bottom) = self.gap_span();
        (top + bottom) / 2.0
    }

    pub fn mask(&self) -> &Mask {
        self.pipes.mask()
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// True exactly once: the first call after the column has moved left of
    /// the bird's resting column. Marks the obstacle as passed.
    pub fn is_passed(&mut self) -> bool {
        if self.position.x < PASS_THRESHOLD_X && !self.passed {
            self.passed = true;
            return true;
        }
        false
    }
}

impl Updatable for Obstacle {
    fn update(&mut self) {
        self.position.x -= self.speed;
    }

    fn is_alive(&self) -> bool {
        self.right() > 0.0
    }
}

impl Drawable for Obstacle {
    fn layer(&self) -> Layer {
        Layer::Obstacle
    }

    fn draw(&self, list: &mut DrawList) {
        let bottom_y = self.position.y + self.pipes.pipe_height() + self.pipes.gap();
        list.push(&self.pipes.top, self.position, Layer::Obstacle);
        list.push(
            &self.pipes.bottom,
            Vec2::new(self.position.x, bottom_y),
            Layer::Obstacle,
        );
    }
}
