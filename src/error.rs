//! Error types for sinetone operations.

use thiserror::Error;

/// Error type for format validation, synthesis, and playback operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid audio format: {0}")]
    InvalidFormat(String),

    #[error("Sample buffer has no frames")]
    EmptyBuffer,

    #[error("No output device available")]
    NoOutputDevice,

    #[error("Failed to query device config")]
    DeviceConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("Failed to build audio stream")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("Failed to start audio stream")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("Unsupported sample format: {0}")]
    UnsupportedSampleFormat(cpal::SampleFormat),

    #[cfg(feature = "wav-export")]
    #[error("WAV write failed: {0}")]
    Wav(#[from] hound::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
