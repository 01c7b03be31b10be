//! Sine tone synthesis and the edge-fade envelope.
//!
//! Synthesis is a pure function of the sample index: filling the same buffer
//! twice with the same parameters produces bit-identical output. No phase
//! accumulator is involved, so there is no drift to reason about.

use std::f64::consts::PI;

use crate::{AudioFormat, Error, Result, SampleBuffer};

/// Frames before this index get the fade-in taper.
pub const FADE_IN_END: usize = 4000;

/// Frames after this index get the fade-out taper.
pub const FADE_OUT_START: usize = 40100;

/// Gain applied to the tapered regions.
const FADE_GAIN: f64 = 3.5;

/// The taper runs at half the buffer's base angular rate, so it spans half a
/// sine cycle over the full buffer: near zero at both edges, ~FADE_GAIN in
/// the middle (where it is never applied).
const FADE_RATE: f64 = 0.5;

/// Parameters for a single synthesized tone.
///
/// # Examples
///
/// ```
/// use sinetone::ToneSpec;
///
/// let spec = ToneSpec::default();
/// assert_eq!(spec.frequency_hz, 440.0);
/// assert_eq!(spec.amplitude, 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Frequency of the sine wave in Hz.
    pub frequency_hz: f64,
    /// Peak amplitude, typically in (0.0, 1.0].
    pub amplitude: f64,
}

impl Default for ToneSpec {
    /// 440 Hz (A4) at amplitude 0.3.
    fn default() -> Self {
        Self {
            frequency_hz: 440.0,
            amplitude: 0.3,
        }
    }
}

/// Fills a new monophonic buffer with a sine tone.
///
/// For each frame `i` of `frames` total:
/// `sample[i] = amplitude * sin(2π * frequency * i / frames)`.
///
/// The step divisor is the frame count, not the sample rate; with the
/// default one-second buffer at 44100 Hz the two coincide.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for non-mono formats and
/// [`Error::EmptyBuffer`] for a zero frame count.
pub fn synthesize(spec: ToneSpec, format: AudioFormat, frames: usize) -> Result<SampleBuffer> {
    if format.channels() != 1 {
        return Err(Error::InvalidFormat(format!(
            "tone synthesis is monophonic (got {} channels)",
            format.channels()
        )));
    }
    let mut buffer = SampleBuffer::zeroed(format, frames)?;
    let step = 2.0 * PI / frames as f64;
    for (i, sample) in buffer.samples_mut().iter_mut().enumerate() {
        *sample = spec.amplitude * (spec.frequency_hz * i as f64 * step).sin();
    }
    Ok(buffer)
}

/// Tapers the edges of the buffer in place so playback does not click.
///
/// Frames with index below [`FADE_IN_END`] or above [`FADE_OUT_START`] are
/// multiplied by `3.5 * sin(0.5 * 2π * i / frames)`; everything in between
/// is left untouched. Not a principled envelope, just a demonstration fade
/// with fixed breakpoints tuned for the one-second 44100-frame buffer.
pub fn apply_edge_fade(buffer: &mut SampleBuffer) {
    let frames = buffer.frames();
    let step = 2.0 * PI / frames as f64;
    for (i, sample) in buffer.samples_mut().iter_mut().enumerate() {
        if i < FADE_IN_END || i > FADE_OUT_START {
            *sample *= FADE_GAIN * (FADE_RATE * i as f64 * step).sin();
        }
    }
}
