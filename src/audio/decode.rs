//! WAV decoding using hound.

use crate::audio::Waveform;
use crate::error::{Error, Result};
use hound::{SampleFormat, WavReader};
use std::path::Path;
use tracing::debug;

/// Decode a WAV file to a mono waveform.
///
/// Integer PCM keeps its raw integer scale so amplitude thresholds stay in
/// the units of the recording. Float WAVs are read as-is. Multichannel audio
/// is averaged to mono.
pub fn decode_wav(path: &Path) -> Result<Waveform> {
    let mut reader = WavReader::open(path).map_err(|e| Error::AudioOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let interleaved: Vec<f64> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 1..=32) => reader
            .samples::<i32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>(),
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>(),
        (format, bits) => {
            return Err(Error::UnsupportedAudioFormat {
                format: format!("{format:?} {bits}-bit"),
            });
        }
    }
    .map_err(|e| Error::AudioDecode {
        path: path.to_path_buf(),
        source: e,
    })?;

    let samples = mix_to_mono(&interleaved, channels);

    debug!(
        "Decoded {} samples at {} Hz ({} channel(s)) from {}",
        samples.len(),
        spec.sample_rate,
        channels,
        path.display()
    );

    Ok(Waveform::new(samples, spec.sample_rate))
}

/// Average interleaved frames to a single channel.
fn mix_to_mono(interleaved: &[f64], channels: usize) -> Vec<f64> {
    if channels == 1 {
        return interleaved.to_vec();
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = channels as f64;
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / scale)
        .collect()
}
