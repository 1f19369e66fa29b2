//! Platform error types.
//!
//! Everything here is fatal during startup. At runtime only the play/pause
//! variants can occur, and those are logged rather than propagated.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not open audio stream: {0}")]
    StreamBuild(String),

    #[error("could not start audio playback: {0}")]
    StreamPlay(String),

    #[error("could not pause audio playback: {0}")]
    StreamPause(String),

    #[error("could not create window: {0}")]
    WindowBuild(String),
}
