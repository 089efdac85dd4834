//! Pixel canvas with half-block output.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub const UPPER_HALF_BLOCK: char = '\u{2580}';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u16,
    /// Pixel rows, twice the terminal rows.
    height: u16,
    px: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            px: vec![Rgb::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.px
            .resize((width as usize) * (height as usize), Rgb::default());
    }

    pub fn fill(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    pub fn set(&mut self, x: i64, y: i64, c: Rgb) {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            self.px[y as usize * self.width as usize + x as usize] = c;
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.px[y as usize * self.width as usize + x as usize])
    }

    /// Write the canvas into `fb`, resizing it to `width` x `height / 2` cells.
    ///
    /// An odd last pixel row is dropped.
    pub fn to_framebuffer(&self, fb: &mut FrameBuffer) {
        let rows = self.height / 2;
        fb.resize(self.width, rows);

        for row in 0..rows {
            for col in 0..self.width {
                let top = self.px[(row as usize * 2) * self.width as usize + col as usize];
                let bot = self.px[(row as usize * 2 + 1) * self.width as usize + col as usize];
                let cell = if top == bot {
                    CellStyle::new(top, bot).into_cell(' ')
                } else {
                    CellStyle::new(top, bot).into_cell(UPPER_HALF_BLOCK)
                };
                fb.set(col, row, cell);
            }
        }
    }
}
