//! Error types for the launch sequencer

use thiserror::Error;

/// Sequencer lifecycle errors
#[derive(Debug, Error)]
pub enum SequencerError {
    /// The welcome ritual needs at least one greeting
    #[error("Welcome ritual has no greetings")]
    NoGreetings,

    /// `mount` was called more than once
    #[error("Sequencer already mounted")]
    AlreadyMounted,

    /// The sequencer was unmounted
    #[error("Sequencer disposed")]
    Disposed,

    /// Timers need a tokio runtime
    #[error("No tokio runtime available: {0}")]
    NoRuntime(String),
}

/// Status fetch errors
#[derive(Debug, Error)]
pub enum StatusError {
    /// Request failed or returned a non-success status
    #[error("Status request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered but did not report success
    #[error("Status endpoint reported failure")]
    Unsuccessful,
}
