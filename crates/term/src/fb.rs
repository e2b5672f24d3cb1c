//! Framebuffer for terminal rendering.
//!
//! Cells are bare glyphs drawn in the terminal's default colors.

/// Glyph of an unwritten cell.
pub const BLANK_CELL: char = ' ';

/// 2D framebuffer of character cells, sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK_CELL; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// Keeps the allocation when the size is unchanged or shrinks.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, BLANK_CELL);
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK_CELL);
    }

    /// Set one cell; out-of-range writes are dropped.
    pub fn put_char(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch);
            cx += 1;
        }
    }

    /// Write a number in decimal without allocating.
    pub fn put_u16(&mut self, x: u16, y: u16, n: u16) {
        let mut digits = [0u8; 5];
        let mut len = 0;
        let mut v = n;
        loop {
            digits[len] = b'0' + (v % 10) as u8;
            len += 1;
            v /= 10;
            if v == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char);
        }
    }

    /// Text of one row, for tests and debugging.
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width).filter_map(|x| self.get(x, y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_outside_are_ignored() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(3, 0, 'x');
        fb.put_char(0, 2, 'x');
        assert!(fb.cells().iter().all(|&c| c == BLANK_CELL));
    }

    #[test]
    fn put_str_truncates_at_edge() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(1, 0, "abc");
        assert_eq!(fb.row_string(0), " ab");
    }

    #[test]
    fn put_u16_writes_decimal() {
        let mut fb = FrameBuffer::new(6, 3);
        fb.put_u16(0, 0, 0);
        fb.put_u16(0, 1, 80);
        fb.put_u16(0, 2, 65535);
        assert_eq!(fb.row_string(0), "0     ");
        assert_eq!(fb.row_string(1), "80    ");
        assert_eq!(fb.row_string(2), "65535 ");
    }

    #[test]
    fn clear_blanks_written_cells() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "@@@@");
        fb.clear();
        assert_eq!(fb.row_string(0), "    ");
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.resize(2, 3);
        assert_eq!((fb.width(), fb.height()), (2, 3));
        assert_eq!(fb.cells().len(), 6);
    }
}
