//! Waveform type and the WAV decoder that produces it.

mod decode;
mod waveform;

pub use decode::decode_wav;
pub use waveform::Waveform;
