//! Short-time power spectral density.

use crate::error::{Error, Result};
use ndarray::Array2;
use realfft::RealFftPlanner;

/// Raw output of [`stft_psd`], before band filtering and log compression.
#[derive(Debug, Clone, PartialEq)]
pub struct PsdGrid {
    /// One-sided frequency axis in Hz, ascending.
    pub freqs: Vec<f64>,
    /// Segment centre times in seconds.
    pub times: Vec<f64>,
    /// Power spectral density, `freqs.len()` rows by `times.len()` columns.
    pub power: Array2<f64>,
}

/// Compute a one-sided PSD for each windowed segment of `samples`.
///
/// Segments are `window.len()` samples long and start every `step` samples;
/// no padding is added, so a trailing partial segment is dropped. Each
/// segment has its mean removed before windowing. Power is density-scaled,
/// `|X|^2 / (fs * sum(w^2))`, and doubled for every bin except DC and Nyquist.
pub fn stft_psd(samples: &[f64], samp_freq: u32, window: &[f64], step: usize) -> Result<PsdGrid> {
    let nperseg = window.len();
    if samples.len() < nperseg {
        return Err(Error::WaveformTooShort {
            samples: samples.len(),
            window_size: nperseg,
        });
    }

    let fs = f64::from(samp_freq);
    let n_frames = (samples.len() - nperseg) / step + 1;
    let n_freqs = nperseg / 2 + 1;

    let mut planner = RealFftPlanner::<f64>::new();
    let r2c = planner.plan_fft_forward(nperseg);
    let mut input = r2c.make_input_vec();
    let mut spectrum = r2c.make_output_vec();

    let window_power: f64 = window.iter().map(|w| w * w).sum();
    let scale = 1.0 / (fs * window_power);

    let mut power = Array2::<f64>::zeros((n_freqs, n_frames));
    let mut times = Vec::with_capacity(n_frames);

    #[allow(clippy::cast_precision_loss)]
    let half_window = nperseg as f64 / 2.0;

    for frame in 0..n_frames {
        let start = frame * step;
        let segment = &samples[start..start + nperseg];

        #[allow(clippy::cast_precision_loss)]
        let mean = segment.iter().sum::<f64>() / nperseg as f64;
        for ((dst, &x), &w) in input.iter_mut().zip(segment).zip(window) {
            *dst = (x - mean) * w;
        }

        r2c.process(&mut input, &mut spectrum)
            .map_err(|e| Error::Transform {
                reason: e.to_string(),
            })?;

        for (k, bin) in spectrum.iter().enumerate() {
            let mut value = bin.norm_sqr() * scale;
            if k != 0 && !(nperseg.is_multiple_of(2) && k == nperseg / 2) {
                value *= 2.0;
            }
            power[[k, frame]] = value;
        }

        #[allow(clippy::cast_precision_loss)]
        times.push((start as f64 + half_window) / fs);
    }

    #[allow(clippy::cast_precision_loss)]
    let freqs = (0..n_freqs)
        .map(|k| k as f64 * fs / nperseg as f64)
        .collect();

    Ok(PsdGrid {
        freqs,
        times,
        power,
    })
}
