//! In-memory waveform.

/// A mono recording paired with its sampling frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f64>,
    samp_freq: u32,
}

impl Waveform {
    /// Wrap decoded samples.
    #[must_use]
    pub fn new(samples: Vec<f64>, samp_freq: u32) -> Self {
        Self { samples, samp_freq }
    }

    /// Raw samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sampling frequency in Hz.
    pub fn samp_freq(&self) -> u32 {
        self.samp_freq
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self) -> f64 {
        if self.samp_freq == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.samp_freq)
    }
}
