//! Playback through the system default audio output.
//!
//! [`PlaybackEngine`] wraps a cpal output stream: one source node feeding the
//! device's mixer. The engine moves through `Idle -> Playing -> Stopped`;
//! `stop` is unconditional and immediate, and dropping the engine stops
//! playback too, so a scoped engine can never outlive its caller.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, Sample, SampleFormat, StreamConfig};

use crate::{AudioFormat, Error, LoopingBuffer, Result, SampleBuffer, SampleSource};

/// Owns the output device and, once started, the output stream.
///
/// Construction resolves the default output device and its preferred stream
/// configuration; [`start`](PlaybackEngine::start) builds and plays the
/// stream. A start failure is returned as an error and no playback happens —
/// the engine stays idle and can be retried or dropped.
pub struct PlaybackEngine {
    device: cpal::Device,
    device_config: cpal::SupportedStreamConfig,
    stream: Option<cpal::Stream>,
}

impl PlaybackEngine {
    /// Opens the default host's default output device.
    ///
    /// # Errors
    ///
    /// [`Error::NoOutputDevice`] when the host has no output device,
    /// [`Error::DeviceConfig`] when it refuses to report a configuration.
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(Error::NoOutputDevice)?;
        let device_config = device.default_output_config()?;
        Ok(Self {
            device,
            device_config,
            stream: None,
        })
    }

    /// Starts playing `source` at the given format's sample rate.
    ///
    /// The source's mono output is duplicated across however many channels
    /// the device exposes. The stream keeps pulling samples until
    /// [`stop`](PlaybackEngine::stop) is called or the engine is dropped.
    /// Calling `start` while already playing is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedSampleFormat`] if the device wants a sample type
    /// other than f32/i16/u16, [`Error::BuildStream`] / [`Error::PlayStream`]
    /// for cpal failures. On any error the engine has not started and no
    /// playback is scheduled.
    pub fn start<S: SampleSource>(&mut self, source: S, format: AudioFormat) -> Result<()> {
        if self.stream.is_some() {
            return Ok(());
        }

        let stream_config = StreamConfig {
            channels: self.device_config.channels(),
            sample_rate: cpal::SampleRate(format.sample_rate_hz() as u32),
            buffer_size: cpal::BufferSize::Default,
        };

        let stream = match self.device_config.sample_format() {
            SampleFormat::F32 => self.build_stream::<f32, S>(&stream_config, source)?,
            SampleFormat::I16 => self.build_stream::<i16, S>(&stream_config, source)?,
            SampleFormat::U16 => self.build_stream::<u16, S>(&stream_config, source)?,
            sample_format => return Err(Error::UnsupportedSampleFormat(sample_format)),
        };

        stream.play()?;
        self.stream = Some(stream);
        Ok(())
    }

    /// Stops playback immediately, regardless of loop position.
    ///
    /// Safe to call at any time; a stopped or never-started engine stays
    /// stopped.
    pub fn stop(&mut self) {
        self.stream = None;
    }

    /// Whether the engine currently holds a playing stream.
    pub fn is_running(&self) -> bool {
        self.stream.is_some()
    }

    fn build_stream<T, S>(&self, config: &StreamConfig, mut source: S) -> Result<cpal::Stream>
    where
        T: Sample + FromSample<f64> + cpal::SizedSample,
        S: SampleSource,
    {
        let channels = config.channels as usize;

        let stream = self.device.build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let value: T = T::from_sample(source.next_sample());
                    for sample in frame.iter_mut() {
                        *sample = value;
                    }
                }
            },
            |err| eprintln!("Audio stream error: {err}"),
            None,
        )?;

        Ok(stream)
    }
}

/// Loops `buffer` through the default output for `duration`, then stops.
///
/// This is the whole driver: open the engine, start the looping source,
/// block for the requested wall-clock duration, stop. The engine is scoped
/// to this call, so playback also stops if an error unwinds mid-setup.
///
/// # Errors
///
/// Propagates every engine failure; on `Err` no sound was played.
pub fn play_looping(buffer: Arc<SampleBuffer>, duration: Duration) -> Result<()> {
    let format = buffer.format();
    let mut engine = PlaybackEngine::new()?;
    engine.start(LoopingBuffer::new(buffer), format)?;
    thread::sleep(duration);
    engine.stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Headless environments have no output device; either outcome is fine,
    // but construction and teardown must not panic.
    #[test]
    fn test_engine_construction_reports_errors_instead_of_panicking() {
        match PlaybackEngine::new() {
            Ok(mut engine) => {
                assert!(!engine.is_running());
                engine.stop();
                assert!(!engine.is_running());
            }
            Err(err) => {
                assert!(!err.to_string().is_empty());
            }
        }
    }

    #[test]
    fn test_stop_is_idempotent() {
        if let Ok(mut engine) = PlaybackEngine::new() {
            engine.stop();
            engine.stop();
            assert!(!engine.is_running());
        }
    }
}
