//! Procedurally generated sprite atlas
//!
//! Image decoding is a host concern, so the crate ships flat-shaded stand-ins
//! with the classic sprite dimensions. Every name the simulation resolves is
//! present, including the optional score digits.

use super::{AssetError, Sprite, SpriteAtlas, names};

pub const BIRD_SIZE: (u32, u32) = (34, 24);
pub const PIPE_SIZE: (u32, u32) = (52, 320);
pub const BACKGROUND_SIZE: (u32, u32) = (288, 512);
pub const FLOOR_SIZE: (u32, u32) = (336, 112);
pub const GAME_OVER_SIZE: (u32, u32) = (192, 42);
pub const DIGIT_SIZE: (u32, u32) = (24, 36);

/// Height of the pipe's rim at its open end
const PIPE_LIP: u32 = 24;
/// Stroke width of digit segments
const SEGMENT: u32 = 4;

type Rgb = [u8; 3];

const SKY: Rgb = [78, 192, 202];
const SKYLINE: Rgb = [228, 253, 208];
const GROUND: Rgb = [222, 216, 149];
const GRASS: Rgb = [115, 191, 46];
const PIPE_BODY: Rgb = [116, 191, 46];
const PIPE_RIM: Rgb = [84, 56, 71];
const BIRD_BODY: Rgb = [212, 56, 41];
const BIRD_WING: Rgb = [250, 250, 230];
const BIRD_BEAK: Rgb = [250, 160, 30];
const BANNER: Rgb = [252, 160, 72];
const INK: Rgb = [255, 255, 255];

/// Rasterize a sprite; pixels where `shade` returns `None` stay transparent
fn paint(
    name: &str,
    (width, height): (u32, u32),
    shade: impl Fn(u32, u32) -> Option<Rgb>,
) -> Result<Sprite, AssetError> {
    let mut rgba = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            match shade(x, y) {
                Some([r, g, b]) => rgba.extend_from_slice(&[r, g, b, 255]),
                None => rgba.extend_from_slice(&[0, 0, 0, 0]),
            }
        }
    }
    Sprite::from_rgba(name, width, height, rgba)
}

/// Bird frame `frame` (0 = wings up, 1 = level, 2 = wings down)
fn bird(frame: usize) -> Result<Sprite, AssetError> {
    let (w, h) = BIRD_SIZE;
    let (cx, cy) = (w as f32 / 2.0 - 0.5, h as f32 / 2.0 - 0.5);
    let (rx, ry) = (w as f32 / 2.0 - 1.0, h as f32 / 2.0 - 1.0);
    let wing_top = 6 + frame as u32 * 4;

    paint(names::BIRD_FRAMES[frame], BIRD_SIZE, |x, y| {
        if (28..w).contains(&x) && (11..15).contains(&y) {
            return Some(BIRD_BEAK);
        }
        let dx = (x as f32 - cx) / rx;
        let dy = (y as f32 - cy) / ry;
        if dx * dx + dy * dy > 1.0 {
            return None;
        }
        if (4..14).contains(&x) && (wing_top..wing_top + 5).contains(&y) {
            Some(BIRD_WING)
        } else {
            Some(BIRD_BODY)
        }
    })
}

/// Upright pipe with its rim at the top, as the lower obstacle half
fn pipe() -> Result<Sprite, AssetError> {
    let (w, _) = PIPE_SIZE;
    paint(names::PIPE, PIPE_SIZE, |x, y| {
        if y < PIPE_LIP {
            Some(PIPE_RIM)
        } else if (2..w - 2).contains(&x) {
            Some(PIPE_BODY)
        } else {
            None
        }
    })
}

fn background() -> Result<Sprite, AssetError> {
    let (_, h) = BACKGROUND_SIZE;
    paint(names::BACKGROUND, BACKGROUND_SIZE, |_, y| {
        if y > h * 3 / 4 { Some(SKYLINE) } else { Some(SKY) }
    })
}

fn floor() -> Result<Sprite, AssetError> {
    paint(names::FLOOR, FLOOR_SIZE, |x, y| {
        if y < 12 && (x / 12) % 2 == 0 {
            Some(GRASS)
        } else {
            Some(GROUND)
        }
    })
}

fn game_over() -> Result<Sprite, AssetError> {
    let (w, h) = GAME_OVER_SIZE;
    paint(names::GAME_OVER, GAME_OVER_SIZE, |x, y| {
        let corner = (x < 3 || x >= w - 3) && (y < 3 || y >= h - 3);
        if corner { None } else { Some(BANNER) }
    })
}

/// Seven-segment digit glyph
fn digit(value: usize) -> Result<Sprite, AssetError> {
    // Segment bits: a=top, b=top-right, c=bottom-right, d=bottom,
    // e=bottom-left, f=top-left, g=middle
    const SEGMENTS: [u8; 10] = [
        0b0111111, 0b0000110, 0b1011011, 0b1001111, 0b1100110, 0b1101101, 0b1111101, 0b0000111,
        0b1111111, 0b1101111,
    ];
    let (w, h) = DIGIT_SIZE;
    let lit = SEGMENTS[value];
    let mid = h / 2;

    paint(names::DIGITS[value], DIGIT_SIZE, move |x, y| {
        let left = x < SEGMENT;
        let right = x >= w - SEGMENT;
        let upper = y <= mid;
        let on = |bit: u8| lit & (1 << bit) != 0;

        let hit = (y < SEGMENT && on(0))
            || (right && upper && on(1))
            || (right && !upper && on(2))
            || (y >= h - SEGMENT && on(3))
            || (left && !upper && on(4))
            || (left && upper && on(5))
            || ((mid - SEGMENT / 2..mid + SEGMENT / 2).contains(&y) && on(6));
        hit.then_some(INK)
    })
}

/// Build the complete atlas
pub fn atlas() -> Result<SpriteAtlas, AssetError> {
    let mut atlas = SpriteAtlas::new();
    for frame in 0..names::BIRD_FRAMES.len() {
        atlas.insert(bird(frame)?);
    }
    atlas.insert(pipe()?);
    atlas.insert(background()?);
    atlas.insert(floor()?);
    atlas.insert(game_over()?);
    for value in 0..names::DIGITS.len() {
        atlas.insert(digit(value)?);
    }
    log::debug!("Generated {} procedural sprites", atlas.len());
    Ok(atlas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetProvider;

    #[test]
    fn test_atlas_has_every_sprite() {
        let atlas = atlas().unwrap();
        for name in names::BIRD_FRAMES
            .iter()
            .chain(names::DIGITS.iter())
            .chain([names::PIPE, names::BACKGROUND, names::FLOOR, names::GAME_OVER].iter())
        {
            assert!(atlas.sprite(name).is_ok(), "missing {}", name);
        }
    }

    #[test]
    fn test_sprite_dimensions() {
        let atlas = atlas().unwrap();
        assert_eq!(atlas.sprite("redbird-1").unwrap().width(), BIRD_SIZE.0);
        assert_eq!(atlas.sprite("pipe-green").unwrap().height(), PIPE_SIZE.1);
        assert_eq!(atlas.sprite("floor").unwrap().height(), FLOOR_SIZE.1);
        assert_eq!(atlas.sprite("background").unwrap().width(), BACKGROUND_SIZE.0);
    }

    #[test]
    fn test_bird_is_not_rectangular() {
        let sprite = bird(0).unwrap();
        let mask = sprite.mask();
        assert!(!mask.get(0, 0));
        assert!(mask.get(17, 12));
        assert!(mask.count() < BIRD_SIZE.0 * BIRD_SIZE.1);
    }

    #[test]
    fn test_pipe_has_open_sides_below_rim() {
        let sprite = pipe().unwrap();
        assert!(sprite.mask().get(0, 0));
        assert!(!sprite.mask().get(0, 100));
        assert!(sprite.mask().get(25, 100));
    }

    #[test]
    fn test_digit_one_is_narrow() {
        let one = digit(1).unwrap();
        let eight = digit(8).unwrap();
        assert!(one.mask().count() < eight.mask().count());
        assert!(!one.mask().get(0, 10));
    }
}
