use std::io;

use thiserror::Error;

/// Failures at the terminal boundary. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum TermError {
    #[error("stdin and stdout must both be a terminal")]
    NotATty,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
