//! Waveform to spectrogram transform.

mod spectrogram;
mod stft;
mod window;

pub use spectrogram::{Spectrogram, compute_spectrogram};
pub use stft::{PsdGrid, stft_psd};
pub use window::dpss_window;
