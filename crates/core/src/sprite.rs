//! Sprite sheets: horizontal strips of equally sized frames.

use std::collections::HashMap;

use crate::bitmap::Bitmap;
use crate::player::SheetKind;
use crate::types::Direction;

/// Cut a strip into `frame_w` x `frame_h` frames, left to right.
///
/// A trailing partial frame is dropped.
pub fn slice_frames(strip: &Bitmap, frame_w: u32, frame_h: u32) -> Vec<Bitmap> {
    if frame_w == 0 || frame_h == 0 {
        return Vec::new();
    }
    (0..strip.width() / frame_w)
        .map(|i| strip.sub_image(i * frame_w, 0, frame_w, frame_h))
        .collect()
}

/// The frame currently selected for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteFrame {
    pub kind: SheetKind,
    pub direction: Direction,
    pub index: usize,
}

/// All animation strips of one character, in both facing directions.
///
/// Source strips face right; left-facing frames are mirrored copies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteSet {
    sheets: HashMap<(SheetKind, Direction), Vec<Bitmap>>,
}

impl SpriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slice `strip` and store it under `kind`. Returns the number of frames.
    pub fn insert_strip(&mut self, kind: SheetKind, strip: &Bitmap, frame_w: u32, frame_h: u32) -> usize {
        let right = slice_frames(strip, frame_w, frame_h);
        let left = right.iter().map(Bitmap::flipped_horizontal).collect();
        let n = right.len();
        self.sheets.insert((kind, Direction::Right), right);
        self.sheets.insert((kind, Direction::Left), left);
        n
    }

    pub fn frames(&self, kind: SheetKind, direction: Direction) -> &[Bitmap] {
        self.sheets
            .get(&(kind, direction))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn frame(&self, frame: SpriteFrame) -> Option<&Bitmap> {
        self.frames(frame.kind, frame.direction).get(frame.index)
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Rgba;

    const A: Rgba = [10, 0, 0, 255];
    const B: Rgba = [0, 20, 0, 255];

    fn strip() -> Bitmap {
        // Two 2x1 frames: [A, B] [B, B], plus one stray column.
        Bitmap::from_pixels(5, 1, vec![A, B, B, B, A]).unwrap()
    }

    #[test]
    fn slices_left_to_right_and_drops_partial_frame() {
        let frames = slice_frames(&strip(), 2, 1);
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].pixels(), &[A, B]);
        assert_eq!(frames[1].pixels(), &[B, B]);
        assert!(slice_frames(&strip(), 0, 1).is_empty());
    }

    #[test]
    fn left_frames_are_mirrored() {
        let mut set = SpriteSet::new();
        assert!(set.is_empty());
        assert_eq!(set.insert_strip(SheetKind::Run, &strip(), 2, 1), 2);

        let right = set.frames(SheetKind::Run, Direction::Right);
        let left = set.frames(SheetKind::Run, Direction::Left);
        assert_eq!(right[0].pixels(), &[A, B]);
        assert_eq!(left[0].pixels(), &[B, A]);
        assert!(!set.is_empty());
    }

    #[test]
    fn missing_sheet_has_no_frames() {
        let set = SpriteSet::new();
        assert!(set.frames(SheetKind::Idle, Direction::Left).is_empty());
        let frame = SpriteFrame {
            kind: SheetKind::Idle,
            direction: Direction::Left,
            index: 0,
        };
        assert!(set.frame(frame).is_none());
    }
}
