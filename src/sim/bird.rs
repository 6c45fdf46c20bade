//! The player's bird: gravity, flap input, entry glide and wing animation

use std::rc::Rc;

use glam::Vec2;

use super::registry::{Drawable, Updatable};
use super::tick::InputEvent;
use crate::assets::{AssetError, Mask, Sprite};
use crate::consts::*;
use crate::renderer::{DrawList, Layer};

/// Vertical motion constants (pixels per tick)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdPhysics {
    pub gravity: f32,
    pub flap_strength: f32,
}

impl Default for BirdPhysics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            flap_strength: FLAP_STRENGTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Bird {
    /// Top-left corner in screen pixels
    pub position: Vec2,
    /// Vertical velocity, positive is down
    pub fall_speed: f32,
    physics: BirdPhysics,
    /// Animation cycle: wings up, level, down, level
    frames: Vec<Rc<Sprite>>,
    animation_index: usize,
    animation_timer: f32,
    /// Flap key currently held
    flapping: bool,
    /// Fast-animation ticks left after the flap key was released
    flap_timer: u32,
}

impl Bird {
    /// `wings` are the up/level/down frames; the level frame is reused on the
    /// downstroke so the cycle is up, level, down, level.
    pub fn new(wings: [Rc<Sprite>; 3], physics: BirdPhysics) -> Self {
        let [up, level, down] = wings;
        Self::from_cycle(vec![up, Rc::clone(&level), down, level], physics)
    }

    /// Bird with an arbitrary animation cycle
    pub fn with_frames(frames: Vec<Rc<Sprite>>, physics: BirdPhysics) -> Result<Self, AssetError> {
        if frames.is_empty() {
            return Err(AssetError::EmptyAnimation);
        }
        Ok(Self::from_cycle(frames, physics))
    }

    fn from_cycle(frames: Vec<Rc<Sprite>>, physics: BirdPhysics) -> Self {
        Self {
            position: Vec2::new(BIRD_START_X, BIRD_START_Y),
            fall_speed: 0.0,
            physics,
            frames,
            animation_index: 0,
            animation_timer: 0.0,
            flapping: false,
            flap_timer: 0,
        }
    }

    pub fn physics(&self) -> BirdPhysics {
        self.physics
    }

    /// React to flap key presses and releases; everything else is ignored
    pub fn handle_input(&mut self, event: &InputEvent) {
        match event {
            InputEvent::FlapDown => {
                self.flapping = true;
                self.fall_speed = -self.physics.flap_strength;
            }
            InputEvent::FlapUp => {
                self.flapping = false;
                self.flap_timer = FLAP_DURATION;
            }
            _ => {}
        }
    }

    fn animate(&mut self) {
        let fast = self.flapping || self.flap_timer > 0;
        self.animation_timer += if fast {
            FLAP_ANIMATION_SPEED
        } else {
            ANIMATION_SPEED
        };
        if self.animation_timer >= 1.0 {
            self.animation_timer -= 1.0;
            self.animation_index = (self.animation_index + 1) % self.frames.len();
        }
        if !self.flapping {
            self.flap_timer = self.flap_timer.saturating_sub(1);
        }
    }

    /// Index into the animation cycle
    pub fn frame_index(&self) -> usize {
        self.animation_index
    }

    pub fn is_flapping(&self) -> bool {
        self.flapping
    }

    /// Whether the wings are beating at the fast rate
    pub fn is_animating_fast(&self) -> bool {
        self.flapping || self.flap_timer > 0
    }

    pub fn current_sprite(&self) -> &Rc<Sprite> {
        &self.frames[self.animation_index]
    }

    /// Collision mask of the frame currently displayed
    pub fn current_mask(&self) -> &Mask {
        self.current_sprite().mask()
    }

    pub fn size(&self) -> Vec2 {
        self.current_sprite().size().as_vec2()
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size().y
    }

    pub fn center_y(&self) -> f32 {
        self.position.y + self.size().y / 2.0
    }

    /// Fell through the bottom edge or rose fully above the top edge
    pub fn is_off_screen(&self, screen_height: f32) -> bool {
        self.top() >= screen_height || self.bottom() < 0.0
    }
}

impl Updatable for Bird {
    fn update(&mut self) {
        self.animate();

        self.fall_speed += self.physics.gravity;
        self.position.y += self.fall_speed;

        // Entry glide to the resting column
        if self.position.x < BIRD_REST_X {
            self.position.x = (self.position.x + BIRD_GLIDE_SPEED).min(BIRD_REST_X);
        }
    }
}

impl Drawable for Bird {
    fn layer(&self) -> Layer {
        Layer::Player
    }

    fn draw(&self, list: &mut DrawList) {
        list.push(self.current_sprite(), self.position, Layer::Player);
    }
}
