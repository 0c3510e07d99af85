//! Depth-tested character framebuffer.
//!
//! Three same-shaped planes (glyph, depth, foreground color) stored as flat
//! vectors indexed `y * width + x`.

use crate::types::{RenderPoint, Shading};

/// Glyph of a cell nothing has been plotted into.
pub const BLANK: char = ' ';

/// A snapshot of one cell, for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub depth: f64,
    pub color: Option<u8>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: BLANK,
            depth: f64::INFINITY,
            color: None,
        }
    }
}

/// 2D framebuffer of shaded cells with a nearest-wins depth test.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<char>,
    depth: Vec<f64>,
    colors: Vec<Option<u8>>,
    shading: Shading,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16, shading: Shading) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![BLANK; len],
            depth: vec![f64::INFINITY; len],
            colors: vec![None; len],
            shading,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Rebuild the planes for a new terminal size.
    ///
    /// Every cell is reset to blank regardless of what it held. Returns `false`
    /// (and leaves the contents alone) when the size is unchanged.
    pub fn resize(&mut self, width: u16, height: u16) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.glyphs = vec![BLANK; len];
        self.depth = vec![f64::INFINITY; len];
        self.colors = vec![None; len];
        true
    }

    /// Reset every cell to blank, infinitely far, uncolored.
    pub fn clear(&mut self) {
        self.glyphs.fill(BLANK);
        self.depth.fill(f64::INFINITY);
        self.colors.fill(None);
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Plot a sample if it is on screen and strictly nearer than what the cell holds.
    ///
    /// Equal depths keep the earlier write.
    #[inline]
    pub fn add_point(&mut self, x: i32, y: i32, depth: f64, intensity: f64) {
        let Some(i) = self.idx(x, y) else {
            return;
        };
        if depth < self.depth[i] {
            self.depth[i] = depth;
            self.glyphs[i] = self.shading.glyph(intensity);
            self.colors[i] = self.shading.color(intensity);
        }
    }

    pub fn plot(&mut self, point: &RenderPoint) {
        self.add_point(point.x, point.y, point.depth, point.intensity);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(i32::from(x), i32::from(y)).map(|i| Cell {
            ch: self.glyphs[i],
            depth: self.depth[i],
            color: self.colors[i],
        })
    }

    /// Glyphs and colors of row `y`.
    pub fn row(&self, y: u16) -> (&[char], &[Option<u8>]) {
        let w = self.width as usize;
        let start = (y as usize) * w;
        (&self.glyphs[start..start + w], &self.colors[start..start + w])
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// True when no cell has been plotted since the last clear.
    pub fn is_blank(&self) -> bool {
        self.depth.iter().all(|d| d.is_infinite())
            && self.glyphs.iter().all(|&c| c == BLANK)
            && self.colors.iter().all(Option::is_none)
    }
}
