//! Sprite surfaces and asset resolution
//!
//! The simulation never touches files or image formats. It asks an
//! [`AssetProvider`] for sprites by logical name ("redbird-0", "pipe-green",
//! ...) and shares the returned handles between every entity that uses them.

pub mod mask;
pub mod procedural;

use std::collections::HashMap;
use std::rc::Rc;

use glam::UVec2;
use thiserror::Error;

pub use mask::{DEFAULT_ALPHA_THRESHOLD, Mask};

/// Logical sprite names the simulation resolves at startup
pub mod names {
    pub const BIRD_FRAMES: [&str; 3] = ["redbird-0", "redbird-1", "redbird-2"];
    pub const PIPE: &str = "pipe-green";
    pub const BACKGROUND: &str = "background";
    pub const FLOOR: &str = "floor";
    pub const GAME_OVER: &str = "gameover";
    pub const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("sprite `{name}` not found")]
    Missing { name: String },
    #[error("sprite `{name}` is invalid: {reason}")]
    InvalidImage { name: String, reason: String },
    #[error("animation needs at least one frame")]
    EmptyAnimation,
}

/// An immutable RGBA surface plus the opacity mask derived from it
#[derive(Debug, Clone)]
pub struct Sprite {
    name: String,
    size: UVec2,
    rgba: Vec<u8>,
    mask: Mask,
}

impl Sprite {
    /// Wrap a decoded RGBA8 buffer (4 bytes per pixel, row-major)
    pub fn from_rgba(
        name: impl Into<String>,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    ) -> Result<Self, AssetError> {
        let name = name.into();
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(AssetError::InvalidImage {
                name,
                reason: format!("expected {} bytes, got {}", expected, rgba.len()),
            });
        }
        let alpha: Vec<u8> = rgba.chunks_exact(4).map(|px| px[3]).collect();
        let mask = Mask::from_alpha(width, height, &alpha, DEFAULT_ALPHA_THRESHOLD).ok_or_else(
            || AssetError::InvalidImage {
                name: name.clone(),
                reason: "alpha channel does not match dimensions".to_string(),
            },
        )?;
        Ok(Self {
            name,
            size: UVec2::new(width, height),
            rgba,
            mask,
        })
    }

    /// Top-to-bottom mirror image (used for the upper pipe)
    pub fn flipped_vertical(&self, name: impl Into<String>) -> Self {
        let row = (self.size.x as usize * 4).max(1);
        let rgba = self
            .rgba
            .chunks_exact(row)
            .rev()
            .flatten()
            .copied()
            .collect();
        Self {
            name: name.into(),
            size: self.size,
            rgba,
            mask: self.mask.flipped_vertical(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> UVec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.y
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    #[inline]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }
}

/// Resolves logical sprite names to shared surfaces
pub trait AssetProvider {
    fn sprite(&self, name: &str) -> Result<Rc<Sprite>, AssetError>;

    /// Lookup for optional sprites whose absence is not fatal
    fn try_sprite(&self, name: &str) -> Option<Rc<Sprite>> {
        self.sprite(name).ok()
    }
}

/// In-memory name -> sprite table
#[derive(Debug, Default, Clone)]
pub struct SpriteAtlas {
    sprites: HashMap<String, Rc<Sprite>>,
}

impl SpriteAtlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sprite under its own name, replacing any previous entry
    pub fn insert(&mut self, sprite: Sprite) -> Rc<Sprite> {
        let sprite = Rc::new(sprite);
        self.sprites
            .insert(sprite.name().to_string(), Rc::clone(&sprite));
        sprite
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl AssetProvider for SpriteAtlas {
    fn sprite(&self, name: &str) -> Result<Rc<Sprite>, AssetError> {
        self.sprites
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::Missing {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(name: &str, w: u32, h: u32) -> Sprite {
        Sprite::from_rgba(name, w, h, vec![255; (w * h * 4) as usize]).unwrap()
    }

    #[test]
    fn test_mask_follows_alpha() {
        // 2x1: left pixel opaque, right transparent
        let sprite = Sprite::from_rgba("half", 2, 1, vec![9, 9, 9, 255, 9, 9, 9, 0]).unwrap();
        assert!(sprite.mask().get(0, 0));
        assert!(!sprite.mask().get(1, 0));
    }

    #[test]
    fn test_wrong_buffer_size_is_rejected() {
        let err = Sprite::from_rgba("bad", 4, 4, vec![0; 10]).unwrap_err();
        assert!(matches!(err, AssetError::InvalidImage { ref name, .. } if name == "bad"));
    }

    #[test]
    fn test_flip_moves_rows() {
        let mut rgba = vec![0; 2 * 2 * 4];
        // Opaque top-left pixel
        rgba[3] = 255;
        let sprite = Sprite::from_rgba("corner", 2, 2, rgba).unwrap();
        let flipped = sprite.flipped_vertical("corner-flipped");
        assert_eq!(flipped.name(), "corner-flipped");
        assert!(flipped.mask().get(0, 1));
        assert!(!flipped.mask().get(0, 0));
        assert_eq!(flipped.rgba()[2 * 4 + 3], 255);
    }

    #[test]
    fn test_atlas_lookup() {
        let mut atlas = SpriteAtlas::new();
        let inserted = atlas.insert(solid("floor", 3, 2));
        let found = atlas.sprite("floor").unwrap();
        assert!(Rc::ptr_eq(&inserted, &found));
        assert_eq!(atlas.len(), 1);
    }

    #[test]
    fn test_atlas_missing_is_an_error() {
        let atlas = SpriteAtlas::new();
        let err = atlas.sprite("gameover").unwrap_err();
        assert!(matches!(err, AssetError::Missing { ref name } if name == "gameover"));
        assert!(atlas.try_sprite("gameover").is_none());
    }
}
