//! Audio format descriptor.
//!
//! An [`AudioFormat`] declares the sample rate and channel count that a
//! [`SampleBuffer`](crate::SampleBuffer) carries and that the playback engine
//! requests from the output device. It is immutable once constructed and its
//! invariants are checked at the constructor, so every downstream consumer
//! can rely on a positive sample rate and at least one channel.

use crate::{Error, Result};

/// Default sample rate in Hz (CD quality).
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Describes the layout of sampled audio: sample rate and channel count.
///
/// Construct with [`AudioFormat::new`], which validates the invariants
/// `sample_rate_hz > 0` and `channels >= 1`. The fields are private; a format
/// cannot be mutated after creation.
///
/// # Examples
///
/// ```
/// use sinetone::AudioFormat;
///
/// let format = AudioFormat::new(44100.0, 1).unwrap();
/// assert_eq!(format.sample_rate_hz(), 44100.0);
/// assert_eq!(format.channels(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioFormat {
    sample_rate_hz: f64,
    channels: u16,
}

impl AudioFormat {
    /// Creates a new format descriptor.
    ///
    /// # Arguments
    ///
    /// * `sample_rate_hz` - Samples per second, must be positive and finite
    /// * `channels` - Number of interleaved channels, must be at least 1
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if either invariant is violated.
    pub fn new(sample_rate_hz: f64, channels: u16) -> Result<Self> {
        if !(sample_rate_hz > 0.0) || !sample_rate_hz.is_finite() {
            return Err(Error::InvalidFormat(format!(
                "sample rate must be positive (got {sample_rate_hz})"
            )));
        }
        if channels == 0 {
            return Err(Error::InvalidFormat(
                "channel count must be >= 1 (got 0)".to_string(),
            ));
        }
        Ok(Self {
            sample_rate_hz,
            channels,
        })
    }

    /// Gets the sample rate in Hz.
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Gets the channel count.
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

impl Default for AudioFormat {
    /// 44100 Hz, monophonic.
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE,
            channels: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cd_mono() {
        let format = AudioFormat::default();
        assert_eq!(format.sample_rate_hz(), 44100.0);
        assert_eq!(format.channels(), 1);
    }

    #[test]
    fn test_rejects_zero_channels() {
        assert!(AudioFormat::new(44100.0, 0).is_err());
    }

    #[test]
    fn test_rejects_nonpositive_sample_rate() {
        assert!(AudioFormat::new(0.0, 1).is_err());
        assert!(AudioFormat::new(-44100.0, 1).is_err());
        assert!(AudioFormat::new(f64::NAN, 1).is_err());
    }

    #[test]
    fn test_accepts_valid_format() {
        let format = AudioFormat::new(48000.0, 2).unwrap();
        assert_eq!(format.sample_rate_hz(), 48000.0);
        assert_eq!(format.channels(), 2);
    }
}
