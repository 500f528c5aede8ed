use std::io;

use thiserror::Error;

/// Errors surfaced by the binary's terminal setup and frame loop.
///
/// Core gameplay is total and never errors; everything here is I/O around
/// the terminal session.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}
