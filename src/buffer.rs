//! Fixed-length sample storage.

use crate::{AudioFormat, Error, Result};

/// A preallocated buffer of audio samples tagged with its format.
///
/// Samples are stored as `f64`, one per frame per channel, interleaved.
/// For monophonic audio one frame is one sample. The buffer is created
/// zero-filled and mutated in place by the synthesis step; once handed to
/// the playback engine it is shared immutably for the duration of playback.
///
/// Invariant: `samples.len() == frames * channels`, maintained by
/// construction (the sample vector is sized once and never resized).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    format: AudioFormat,
    samples: Vec<f64>,
}

impl SampleBuffer {
    /// Creates a zero-filled buffer holding `frames` frames of audio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyBuffer`] if `frames` is zero.
    pub fn zeroed(format: AudioFormat, frames: usize) -> Result<Self> {
        if frames == 0 {
            return Err(Error::EmptyBuffer);
        }
        Ok(Self {
            format,
            samples: vec![0.0; frames * format.channels() as usize],
        })
    }

    /// Gets the format this buffer was allocated for.
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Number of frames in the buffer.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.format.channels() as usize
    }

    /// Read-only view of the sample data.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Mutable view of the sample data, for in-place synthesis.
    pub fn samples_mut(&mut self) -> &mut [f64] {
        &mut self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_buffer_length_matches_frames() {
        let format = AudioFormat::default();
        let buffer = SampleBuffer::zeroed(format, 44100).unwrap();
        assert_eq!(buffer.frames(), 44100);
        assert_eq!(buffer.samples().len(), 44100);
        assert!(buffer.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_stereo_buffer_interleaves() {
        let format = AudioFormat::new(48000.0, 2).unwrap();
        let buffer = SampleBuffer::zeroed(format, 100).unwrap();
        assert_eq!(buffer.frames(), 100);
        assert_eq!(buffer.samples().len(), 200);
    }

    #[test]
    fn test_zero_frames_rejected() {
        let format = AudioFormat::default();
        assert!(matches!(
            SampleBuffer::zeroed(format, 0),
            Err(Error::EmptyBuffer)
        ));
    }
}
