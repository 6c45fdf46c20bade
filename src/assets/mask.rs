//! Per-pixel collision masks
//!
//! A mask is a packed bitset with one bit per pixel, set where the sprite is
//! opaque. Overlap tests place one mask's origin at an integer offset from
//! the other's origin and look for any coinciding set bit.

use glam::IVec2;

/// Alpha value at or above which a pixel counts as solid
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 127;

const WORD_BITS: u32 = 64;

/// Packed opacity bitmap, row-major
#[derive(Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    /// u64 words per row
    stride: usize,
    words: Vec<u64>,
}

impl Mask {
    /// Create an empty (fully transparent) mask
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width.div_ceil(WORD_BITS) as usize;
        Self {
            width,
            height,
            stride,
            words: vec![0; stride * height as usize],
        }
    }

    /// Create a fully solid mask
    pub fn filled(width: u32, height: u32) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                mask.set(x, y, true);
            }
        }
        mask
    }

    /// Build a mask from one alpha byte per pixel.
    ///
    /// Returns `None` if `alpha` does not hold exactly `width * height` values.
    pub fn from_alpha(width: u32, height: u32, alpha: &[u8], threshold: u8) -> Option<Self> {
        if alpha.len() != width as usize * height as usize {
            return None;
        }
        let mut mask = Self::new(width, height);
        for (i, &a) in alpha.iter().enumerate() {
            if a >= threshold {
                let x = (i % width as usize) as u32;
                let y = (i / width as usize) as u32;
                mask.set(x, y, true);
            }
        }
        Some(mask)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> (usize, u64) {
        let word = y as usize * self.stride + (x / WORD_BITS) as usize;
        (word, 1u64 << (x % WORD_BITS))
    }

    /// Bit at (x, y); pixels outside the mask are clear
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let (word, bit) = self.index(x as u32, y as u32);
        self.words[word] & bit != 0
    }

    /// Set or clear the bit at (x, y). Out-of-range writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, solid: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let (word, bit) = self.index(x, y);
        if solid {
            self.words[word] |= bit;
        } else {
            self.words[word] &= !bit;
        }
    }

    /// Number of solid pixels
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Mirror the mask top-to-bottom
    pub fn flipped_vertical(&self) -> Self {
        let mut flipped = Self::new(self.width, self.height);
        for y in 0..self.height as usize {
            let src = &self.words[y * self.stride..(y + 1) * self.stride];
            let dst_row = self.height as usize - 1 - y;
            flipped.words[dst_row * self.stride..(dst_row + 1) * self.stride].copy_from_slice(src);
        }
        flipped
    }

    /// OR `other` into this mask with its origin at `offset`, clipped to bounds
    pub fn draw(&mut self, other: &Mask, offset: IVec2) {
        for oy in 0..other.height as i32 {
            for ox in 0..other.width as i32 {
                if !other.get(ox, oy) {
                    continue;
                }
                let (x, y) = (ox + offset.x, oy + offset.y);
                if x >= 0 && y >= 0 {
                    self.set(x as u32, y as u32, true);
                }
            }
        }
    }

    /// First solid pixel shared with `other` placed at `offset`, in this mask's coordinates
    pub fn overlap_point(&self, other: &Mask, offset: IVec2) -> Option<IVec2> {
        let x_start = offset.x.max(0);
        let y_start = offset.y.max(0);
        let x_end = (offset.x + other.width as i32).min(self.width as i32);
        let y_end = (offset.y + other.height as i32).min(self.height as i32);

        for y in y_start..y_end {
            for x in x_start..x_end {
                if self.get(x, y) && other.get(x - offset.x, y - offset.y) {
                    return Some(IVec2::new(x, y));
                }
            }
        }
        None
    }

    /// Whether any solid pixel coincides with `other` placed at `offset`
    #[inline]
    pub fn overlaps(&self, other: &Mask, offset: IVec2) -> bool {
        self.overlap_point(other, offset).is_some()
    }
}

impl std::fmt::Debug for Mask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mask")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("solid", &self.count())
            .finish()
    }
}
