//! Sinetone - a faded sine tone, looped through the default audio output.
//!
//! The whole pipeline is linear: describe an [`AudioFormat`], synthesize a
//! [`SampleBuffer`] with [`synthesize`] and [`apply_edge_fade`], then hand it
//! to [`play_looping`], which loops it through a [`PlaybackEngine`] for a
//! caller-supplied duration and stops.

pub mod buffer;
pub mod engine;
pub mod error;
pub mod format;
pub mod source;
pub mod synth;
#[cfg(feature = "wav-export")]
pub mod wav;

// Re-export commonly used types at the crate root
pub use buffer::SampleBuffer;
pub use engine::{PlaybackEngine, play_looping};
pub use error::{Error, Result};
pub use format::{AudioFormat, DEFAULT_SAMPLE_RATE};
pub use source::{LoopingBuffer, SampleSource};
pub use synth::{FADE_IN_END, FADE_OUT_START, ToneSpec, apply_edge_fade, synthesize};
#[cfg(feature = "wav-export")]
pub use wav::write_wav;
