//! Owned RGBA8 pixel buffers.

/// One RGBA pixel.
pub type Rgba = [u8; 4];

pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// Row-major RGBA8 image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Bitmap {
    /// Fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        Self::solid(width, height, TRANSPARENT)
    }

    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    /// Wrap existing pixels. Returns `None` when the length does not match.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Copy a `width` x `height` region starting at `(x, y)`.
    ///
    /// Parts of the region outside the source stay transparent.
    pub fn sub_image(&self, x: u32, y: u32, width: u32, height: u32) -> Bitmap {
        let mut out = Bitmap::new(width, height);
        for dy in 0..height {
            for dx in 0..width {
                if let Some(px) = self.get(x.saturating_add(dx), y.saturating_add(dy)) {
                    out.set(dx, dy, px);
                }
            }
        }
        out
    }

    /// Mirror image around the vertical axis.
    pub fn flipped_horizontal(&self) -> Bitmap {
        let mut pixels = self.pixels.clone();
        if self.width > 0 {
            for row in pixels.chunks_exact_mut(self.width as usize) {
                row.reverse();
            }
        }
        Bitmap {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = [255, 0, 0, 255];
    const BLUE: Rgba = [0, 0, 255, 255];

    #[test]
    fn from_pixels_checks_length() {
        assert!(Bitmap::from_pixels(2, 2, vec![RED; 3]).is_none());
        let b = Bitmap::from_pixels(2, 1, vec![RED, BLUE]).unwrap();
        assert_eq!(b.get(1, 0), Some(BLUE));
        assert_eq!(b.get(2, 0), None);
    }

    #[test]
    fn sub_image_clips_to_source() {
        let mut b = Bitmap::solid(3, 2, RED);
        b.set(2, 1, BLUE);
        let s = b.sub_image(2, 1, 2, 2);
        assert_eq!(s.get(0, 0), Some(BLUE));
        assert_eq!(s.get(1, 0), Some(TRANSPARENT));
        assert_eq!(s.get(0, 1), Some(TRANSPARENT));
    }

    #[test]
    fn flip_reverses_each_row() {
        let b = Bitmap::from_pixels(3, 2, vec![RED, BLUE, BLUE, BLUE, BLUE, RED]).unwrap();
        let f = b.flipped_horizontal();
        assert_eq!(f.pixels(), &[BLUE, BLUE, RED, RED, BLUE, BLUE]);
        assert_eq!(f.flipped_horizontal(), b);
    }

    #[test]
    fn flip_of_empty_bitmap_is_empty() {
        assert!(Bitmap::new(0, 4).flipped_horizontal().is_empty());
    }
}
