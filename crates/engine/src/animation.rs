//! Animation loop - rotate, render, present, repeat.
//!
//! Each tick renders the frame for the current orientation, advances the
//! angles by fixed deltas, waits out the rest of the tick and then presents.
//! Rotation speed is therefore tied to the achieved frame rate, not to wall
//! clock time. Cancellation is only checked after a frame has been
//! presented, so a frame is never left half drawn.

use anyhow::Result;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::core::{FrameBuffers, FrameRenderer};
use crate::surface::Surface;
use crate::term::{FrameBuffer, TorusView, Viewport};
use crate::types::{Orientation, TorusConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct Animation {
    config: TorusConfig,
    orientation: Orientation,
    renderer: FrameRenderer,
    buffers: FrameBuffers,
    view: TorusView,
    fb: FrameBuffer,
    state: LoopState,
    frames: u64,
}

impl Animation {
    pub fn new(config: TorusConfig) -> Self {
        Self {
            orientation: config.initial,
            renderer: FrameRenderer::new(&config),
            buffers: FrameBuffers::new(config.grid_size),
            view: TorusView::new(&config),
            fb: FrameBuffer::new(0, 0),
            state: LoopState::Running,
            frames: 0,
            config,
        }
    }

    /// Orientation the next frame will be rendered at.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Glyph/depth grids of the most recent frame.
    pub fn buffers(&self) -> &FrameBuffers {
        &self.buffers
    }

    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    /// Render the current orientation, then advance it.
    pub fn step(&mut self) {
        self.renderer.compute(self.orientation, &mut self.buffers);
        self.orientation.advance(self.config.a_step, self.config.b_step);
        self.frames += 1;
    }

    /// Push the latest frame to `surface`.
    pub fn present<S: Surface>(&mut self, surface: &mut S) -> Result<()> {
        let (width, height) = surface.size();
        self.view
            .render_into(&self.buffers, Viewport::new(width, height), &mut self.fb);
        surface.present(&mut self.fb)
    }

    /// React to a terminal resize.
    pub fn resize<S: Surface>(&mut self, surface: &mut S, width: u16, height: u16) {
        if self.config.rescale_on_resize {
            self.renderer.recompute_k1(width as f64);
        }
        debug!(
            width,
            height,
            k1 = self.renderer.projection().k1(),
            "resize"
        );
        surface.invalidate();
    }

    /// Run until `cancel` fires (or its sender is dropped).
    ///
    /// `resizes` carries the latest terminal size; it is checked once per tick.
    pub async fn run<S: Surface>(
        &mut self,
        surface: &mut S,
        mut cancel: oneshot::Receiver<()>,
        mut resizes: watch::Receiver<(u16, u16)>,
    ) -> Result<LoopState> {
        let mut ticker = time::interval(self.config.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.state = LoopState::Running;
        info!(
            a = self.orientation.a,
            b = self.orientation.b,
            "animation started"
        );

        while self.state == LoopState::Running {
            if resizes.has_changed().unwrap_or(false) {
                let (width, height) = *resizes.borrow_and_update();
                self.resize(surface, width, height);
            }

            self.step();
            ticker.tick().await;
            if let Err(err) = self.present(surface) {
                self.state = LoopState::Stopped;
                return Err(err);
            }

            match cancel.try_recv() {
                Ok(()) => self.state = LoopState::Stopped,
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    warn!("input listener went away without a key press");
                    self.state = LoopState::Stopped;
                }
            }
        }

        info!(frames = self.frames, "animation stopped");
        Ok(self.state)
    }
}
