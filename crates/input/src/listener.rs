//! Input listener task.
//!
//! Blocks on the terminal for events and turns them into the two signals the
//! animation reacts to: a one-shot cancellation on the first key press, and
//! the latest terminal size on resize.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::map::{classify, InputSignal};
use crate::types::INPUT_POLL_MS;

/// Source of terminal events.
pub trait EventSource {
    /// Wait up to `timeout` for an event to become available.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// Events from the process's controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Why the listener returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerExit {
    /// A key was pressed and the cancellation was raised.
    Quit,
    /// The animation dropped its end of the cancellation channel.
    RendererGone,
}

/// Run the listener until a key press or until the receiver of `cancel` goes away.
///
/// `poll_interval` bounds how long a stopped animation can keep the listener alive.
pub fn run_listener<E: EventSource>(
    source: &mut E,
    cancel: oneshot::Sender<()>,
    size: &watch::Sender<(u16, u16)>,
    poll_interval: Duration,
) -> Result<ListenerExit> {
    loop {
        if cancel.is_closed() {
            return Ok(ListenerExit::RendererGone);
        }
        if !source.poll(poll_interval)? {
            continue;
        }

        match classify(&source.read()?) {
            InputSignal::Quit => {
                info!("key pressed, stopping animation");
                // The receiver may already be gone; either way we are done.
                let _ = cancel.send(());
                return Ok(ListenerExit::Quit);
            }
            InputSignal::Resize { width, height } => {
                debug!(width, height, "terminal resized");
                size.send_replace((width, height));
            }
            InputSignal::Ignore => {}
        }
    }
}

/// Spawn the listener for the real terminal on tokio's blocking pool.
pub fn spawn_listener(
    cancel: oneshot::Sender<()>,
    size: watch::Sender<(u16, u16)>,
) -> JoinHandle<Result<ListenerExit>> {
    tokio::task::spawn_blocking(move || {
        run_listener(
            &mut CrosstermEvents,
            cancel,
            &size,
            Duration::from_millis(INPUT_POLL_MS),
        )
    })
}
