//! Glyph and depth grids for a single frame.

use crate::types::BLANK;

/// Square glyph grid plus its inverse-depth grid.
///
/// Both grids are flat arenas indexed `row * size + col`. A depth of `0.0`
/// marks an empty cell; any written cell has a strictly positive depth.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffers {
    size: u16,
    glyphs: Vec<char>,
    depth: Vec<f64>,
}

impl FrameBuffers {
    pub fn new(size: u16) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            glyphs: vec![BLANK; len],
            depth: vec![0.0; len],
        }
    }

    /// Width and height of the grid.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Reset every cell to blank with zero depth.
    pub fn clear(&mut self) {
        self.glyphs.fill(BLANK);
        self.depth.fill(0.0);
    }

    /// Flat index of `(col, row)`, or `None` outside the grid.
    #[inline(always)]
    pub fn index(&self, col: i32, row: i32) -> Option<usize> {
        let size = self.size as i32;
        if col < 0 || row < 0 || col >= size || row >= size {
            return None;
        }
        Some((row as usize) * (self.size as usize) + (col as usize))
    }

    pub fn glyph(&self, col: u16, row: u16) -> Option<char> {
        self.index(col as i32, row as i32).map(|i| self.glyphs[i])
    }

    pub fn depth(&self, col: u16, row: u16) -> Option<f64> {
        self.index(col as i32, row as i32).map(|i| self.depth[i])
    }

    pub fn is_occupied(&self, col: u16, row: u16) -> bool {
        self.depth(col, row).is_some_and(|z| z > 0.0)
    }

    /// Depth stored at a flat index.
    #[inline(always)]
    pub(crate) fn depth_at(&self, idx: usize) -> f64 {
        self.depth[idx]
    }

    /// Write glyph and depth of one cell together.
    #[inline(always)]
    pub(crate) fn store(&mut self, idx: usize, glyph: char, ooz: f64) {
        self.depth[idx] = ooz;
        self.glyphs[idx] = glyph;
    }

    /// One row of glyphs.
    pub fn row(&self, row: u16) -> Option<&[char]> {
        if row >= self.size {
            return None;
        }
        let w = self.size as usize;
        let start = (row as usize) * w;
        Some(&self.glyphs[start..start + w])
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn depths(&self) -> &[f64] {
        &self.depth
    }

    pub fn occupied_count(&self) -> usize {
        self.depth.iter().filter(|&&z| z > 0.0).count()
    }
}
