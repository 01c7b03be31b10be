//! WAV export for synthesized buffers.

use std::path::Path;

use crate::{Result, SampleBuffer};

/// Writes the buffer to `path` as 16-bit PCM WAV.
///
/// Samples are clamped to [-1.0, 1.0] before quantization.
///
/// # Errors
///
/// Returns [`Error::Wav`](crate::Error::Wav) on any hound failure.
pub fn write_wav(buffer: &SampleBuffer, path: impl AsRef<Path>) -> Result<()> {
    let spec = hound::WavSpec {
        channels: buffer.format().channels(),
        sample_rate: buffer.format().sample_rate_hz() as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in buffer.samples() {
        let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f64) as i16;
        writer.write_sample(quantized)?;
    }
    writer.finalize()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioFormat, ToneSpec, synthesize};

    #[test]
    fn test_written_wav_round_trips_spec() {
        let buffer = synthesize(ToneSpec::default(), AudioFormat::default(), 44100).unwrap();
        let path = std::env::temp_dir().join("sinetone_export_test.wav");
        write_wav(&buffer, &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(reader.len(), 44100);
        std::fs::remove_file(&path).unwrap();
    }
}
