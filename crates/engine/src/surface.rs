//! Display surface seam between the loop and the terminal.

use anyhow::Result;

use crate::term::{FrameBuffer, TerminalRenderer};

/// Something frames can be presented on.
pub trait Surface {
    /// `(columns, rows)` available for drawing.
    fn size(&self) -> (u16, u16);

    /// Show `fb`. Implementations may swap its contents out.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;

    /// Drop any cached state so the next frame is drawn in full.
    fn invalidate(&mut self) {}
}

impl Surface for TerminalRenderer {
    fn size(&self) -> (u16, u16) {
        TerminalRenderer::size(self)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.draw_swap(fb)?;
        Ok(())
    }

    fn invalidate(&mut self) {
        TerminalRenderer::invalidate(self);
    }
}
