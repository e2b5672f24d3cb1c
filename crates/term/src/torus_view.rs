//! TorusView: maps the renderer's glyph grid into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::FrameBuffers;
use crate::fb::FrameBuffer;
use crate::types::TorusConfig;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Crops the square glyph grid onto a (usually shorter) terminal.
///
/// Grid row `y_offset` lands on terminal row 0; columns map one to one.
#[derive(Debug, Clone, Copy)]
pub struct TorusView {
    y_offset: u16,
    show_size: bool,
}

impl Default for TorusView {
    fn default() -> Self {
        Self::new(&TorusConfig::default())
    }
}

impl TorusView {
    pub fn new(config: &TorusConfig) -> Self {
        Self {
            y_offset: config.y_offset,
            show_size: config.show_size_overlay,
        }
    }

    pub fn with_size_overlay(mut self, show: bool) -> Self {
        self.show_size = show;
        self
    }

    pub fn y_offset(&self) -> u16 {
        self.y_offset
    }

    /// Render the glyph grid into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse one framebuffer
    /// across frames; it is only reallocated when the viewport grows.
    pub fn render_into(&self, buffers: &FrameBuffers, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let cols = viewport.width.min(buffers.size()) as usize;
        for y in 0..viewport.height {
            let Some(row) = buffers.row(y.saturating_add(self.y_offset)) else {
                break;
            };
            for (x, &ch) in row[..cols].iter().enumerate() {
                fb.put_char(x as u16, y, ch);
            }
        }

        if self.show_size {
            fb.put_u16(0, 0, viewport.width);
            fb.put_u16(0, 1, viewport.height);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, buffers: &FrameBuffers, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(buffers, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FrameRenderer;
    use crate::types::Orientation;

    fn frame() -> FrameBuffers {
        let config = TorusConfig::default();
        let mut buffers = FrameBuffers::new(config.grid_size);
        FrameRenderer::new(&config).compute(Orientation::new(0.6, 1.1), &mut buffers);
        buffers
    }

    #[test]
    fn rows_are_offset_by_crop() {
        let buffers = frame();
        let view = TorusView::default();
        let fb = view.render(&buffers, Viewport::new(200, 60));

        for y in 0..60u16 {
            for x in 0..200u16 {
                assert_eq!(fb.get(x, y).unwrap(), buffers.glyph(x, y + 20).unwrap());
            }
        }
    }

    #[test]
    fn configured_offset_moves_the_crop() {
        let buffers = frame();
        let config = TorusConfig::default().with_y_offset(70);
        let view = TorusView::new(&config);
        assert_eq!(view.y_offset(), 70);

        let fb = view.render(&buffers, Viewport::new(200, 40));
        for y in 0..40u16 {
            assert_eq!(fb.get(100, y).unwrap(), buffers.glyph(100, y + 70).unwrap());
        }
    }

    #[test]
    fn narrow_viewport_is_cropped() {
        let buffers = frame();
        let fb = TorusView::default().render(&buffers, Viewport::new(80, 24));
        assert_eq!((fb.width(), fb.height()), (80, 24));
        assert_eq!(fb.get(79, 23).unwrap(), buffers.glyph(79, 43).unwrap());
    }

    #[test]
    fn tall_viewport_leaves_rows_past_grid_blank() {
        let buffers = frame();
        let fb = TorusView::default().render(&buffers, Viewport::new(10, 190));
        assert!((180..190).all(|y| fb.row_string(y) == "          "));
    }

    #[test]
    fn size_overlay_shows_dimensions() {
        let buffers = FrameBuffers::new(200);
        let view = TorusView::default().with_size_overlay(true);
        let fb = view.render(&buffers, Viewport::new(132, 43));
        assert!(fb.row_string(0).starts_with("132 "));
        assert!(fb.row_string(1).starts_with("43 "));
    }
}
