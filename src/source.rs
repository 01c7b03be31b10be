//! Sample sources consumed by the playback engine.

use std::sync::Arc;

use crate::SampleBuffer;

/// Anything the playback engine can pull samples from.
///
/// The engine calls [`next_sample`](SampleSource::next_sample) once per
/// output frame from the audio callback, so implementations must be `Send`
/// and should avoid allocation or blocking.
pub trait SampleSource: Send + 'static {
    /// Produces the next sample, typically in [-1.0, 1.0].
    fn next_sample(&mut self) -> f64;

    /// Fills a slice with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` per element.
    fn fill(&mut self, out: &mut [f64]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

/// Plays a [`SampleBuffer`] from the start and wraps around indefinitely.
///
/// The buffer is shared through an `Arc` and never mutated during playback;
/// the source only advances a cursor. Dropping the source releases the
/// buffer reference.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use sinetone::{AudioFormat, LoopingBuffer, SampleBuffer, SampleSource};
///
/// let buffer = SampleBuffer::zeroed(AudioFormat::default(), 4).unwrap();
/// let mut source = LoopingBuffer::new(Arc::new(buffer));
/// for _ in 0..10 {
///     assert_eq!(source.next_sample(), 0.0);
/// }
/// ```
pub struct LoopingBuffer {
    buffer: Arc<SampleBuffer>,
    position: usize,
}

impl LoopingBuffer {
    /// Creates a looping source reading from the start of `buffer`.
    pub fn new(buffer: Arc<SampleBuffer>) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Current read position, in samples from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl SampleSource for LoopingBuffer {
    fn next_sample(&mut self) -> f64 {
        let sample = self.buffer.samples()[self.position];
        self.position += 1;
        if self.position >= self.buffer.samples().len() {
            self.position = 0;
        }
        sample
    }
}
