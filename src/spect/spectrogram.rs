//! Log-power song spectrograms.

use crate::audio::Waveform;
use crate::config::{SpectParams, validate_spect_params};
use crate::error::{Error, Result};
use crate::spect::{dpss_window, stft_psd};
use ndarray::{Array2, ArrayView2, Axis};
use std::cmp::Ordering;
use tracing::debug;

/// A log10-power spectrogram with its frequency and time axes.
///
/// Rows are frequency bins in ascending order, so row 0 is the lowest
/// retained frequency. Columns are time bins.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrogram {
    power: Array2<f64>,
    freq_bins: Vec<f64>,
    time_bins: Vec<f64>,
    samp_freq: u32,
}

impl Spectrogram {
    /// Assemble a spectrogram, checking that the axes match the grid.
    pub fn new(
        power: Array2<f64>,
        freq_bins: Vec<f64>,
        time_bins: Vec<f64>,
        samp_freq: u32,
    ) -> Result<Self> {
        let (rows, cols) = power.dim();
        if freq_bins.len() != rows {
            return Err(Error::LengthMismatch {
                what: "frequency bins",
                expected: rows,
                actual: freq_bins.len(),
            });
        }
        if time_bins.len() != cols {
            return Err(Error::LengthMismatch {
                what: "time bins",
                expected: cols,
                actual: time_bins.len(),
            });
        }
        Ok(Self {
            power,
            freq_bins,
            time_bins,
            samp_freq,
        })
    }

    /// Log10 power, frequency rows by time columns.
    pub fn power(&self) -> ArrayView2<'_, f64> {
        self.power.view()
    }

    /// Frequency of each row in Hz, ascending.
    pub fn freq_bins(&self) -> &[f64] {
        &self.freq_bins
    }

    /// Time of each column in seconds, ascending.
    pub fn time_bins(&self) -> &[f64] {
        &self.time_bins
    }

    /// Sampling frequency of the source recording in Hz.
    pub fn samp_freq(&self) -> u32 {
        self.samp_freq
    }

    /// Number of frequency rows.
    pub fn n_freq_bins(&self) -> usize {
        self.power.nrows()
    }

    /// Number of time columns.
    pub fn n_time_bins(&self) -> usize {
        self.power.ncols()
    }
}

/// Compute the log-power spectrogram of a waveform.
///
/// Uses a DPSS-tapered short-time PSD with the window size, step and taper
/// from `params`, keeps the rows with `low <= f < high`, and takes log10 of
/// every retained value. The waveform's own sampling frequency is used for
/// the axes; checking it against `params.samp_freq` is up to the caller.
///
/// # Errors
///
/// - [`Error::InvalidConfig`] if `params` is malformed or the band retains no bins
/// - [`Error::WaveformTooShort`] if the waveform is shorter than one window
/// - [`Error::NonPositivePower`] if a retained power value is zero, negative or NaN
pub fn compute_spectrogram(waveform: &Waveform, params: &SpectParams) -> Result<Spectrogram> {
    validate_spect_params(params)?;
    if waveform.samp_freq() == 0 {
        return Err(Error::InvalidConfig {
            message: "waveform sampling frequency must be positive".to_string(),
        });
    }

    let window = dpss_window(params.window_size, params.taper_width());
    let grid = stft_psd(
        waveform.samples(),
        waveform.samp_freq(),
        &window,
        params.window_step,
    )?;

    let [low, high] = params.freq_cutoffs;
    let rows: Vec<usize> = grid
        .freqs
        .iter()
        .enumerate()
        .filter(|&(_, &f)| f >= low && f < high)
        .map(|(i, _)| i)
        .collect();

    if rows.is_empty() {
        return Err(Error::InvalidConfig {
            message: format!(
                "freq_cutoffs [{low}, {high}) retain no frequency bins at {} Hz",
                waveform.samp_freq()
            ),
        });
    }

    // The one-sided axis is already ascending, so selecting rows in order
    // gives the lowest retained frequency at row 0.
    let mut power = grid.power.select(Axis(0), &rows);
    let freq_bins: Vec<f64> = rows.iter().map(|&i| grid.freqs[i]).collect();

    for ((row, col), value) in power.indexed_iter_mut() {
        let psd = *value;
        if psd.partial_cmp(&0.0) != Some(Ordering::Greater) {
            return Err(Error::NonPositivePower {
                freq_hz: freq_bins[row],
                time_s: grid.times[col],
                value: psd,
            });
        }
        *value = psd.log10();
    }

    debug!(
        "Spectrogram: {} frequency bins ({:.1}-{:.1} Hz) x {} time bins",
        freq_bins.len(),
        freq_bins[0],
        freq_bins[freq_bins.len() - 1],
        grid.times.len()
    );

    Spectrogram::new(power, freq_bins, grid.times, waveform.samp_freq())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_rejects_mismatched_axes() {
        let power = array![[1.0, 2.0], [3.0, 4.0]];
        let result = Spectrogram::new(power.clone(), vec![1.0], vec![0.0, 1.0], 1000);
        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                what: "frequency bins",
                ..
            })
        ));

        let result = Spectrogram::new(power, vec![1.0, 2.0], vec![0.0], 1000);
        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                what: "time bins",
                ..
            })
        ));
    }

    #[test]
    fn test_silence_is_non_positive_power() {
        let waveform = Waveform::new(vec![0.0; 2048], 32_000);
        let result = compute_spectrogram(&waveform, &SpectParams::default());
        assert!(matches!(result, Err(Error::NonPositivePower { .. })));
    }

    #[test]
    fn test_empty_band_is_invalid_config() {
        let waveform = Waveform::new(vec![1.0; 2048], 32_000);
        let params = SpectParams {
            freq_cutoffs: [20_000.0, 30_000.0],
            ..SpectParams::default()
        };
        let result = compute_spectrogram(&waveform, &params);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_invalid_params_fail_before_transform() {
        // Too short for any window, but the config error must win.
        let waveform = Waveform::new(vec![1.0; 4], 32_000);
        let params = SpectParams {
            window_step: 0,
            ..SpectParams::default()
        };
        let result = compute_spectrogram(&waveform, &params);
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }
}
