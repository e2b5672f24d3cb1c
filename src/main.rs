//! Terminal torus runner (default binary).
//!
//! Spins a shaded ASCII torus until any key is pressed. Rendering runs on the
//! async runtime; the terminal is read by a separate blocking listener task.
//! Logs go to `tui-torus.log` in the system temp directory (filter with
//! `RUST_LOG`), never to the terminal being drawn on.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tokio::sync::{oneshot, watch};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tui_torus::engine::Animation;
use tui_torus::input::spawn_listener;
use tui_torus::term::TerminalRenderer;
use tui_torus::types::TorusConfig;

const LOG_FILE: &str = "tui-torus.log";

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let mut term = TerminalRenderer::new();
    // On failure `enter` has already undone its own partial setup.
    term.enter().context("failed to initialize terminal")?;
    TerminalRenderer::install_panic_hook();

    let result = run(&mut term).await;

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        error!(%err, "failed to restore terminal");
    }
    result
}

async fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = TorusConfig::default().with_size_overlay(true);
    let (width, height) = term.size();
    info!(width, height, "terminal ready");

    let (cancel_tx, cancel_rx) = oneshot::channel();
    let (size_tx, size_rx) = watch::channel((width, height));
    let listener = spawn_listener(cancel_tx, size_tx);

    let mut animation = Animation::new(config);
    let state = animation.run(term, cancel_rx, size_rx).await;

    // The loop dropped its receiver; the listener notices within one poll.
    let exit = listener.await.context("input listener panicked")??;
    info!(?exit, ?state, "shutdown");
    state.map(|_| ())
}

fn init_logging() -> Result<()> {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
