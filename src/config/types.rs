//! Configuration type definitions.

use crate::constants::{extract, segment, spect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spectrogram parameters.
    pub spect: SpectParams,

    /// Amplitude segmentation parameters.
    pub segment: SegmentParams,

    /// Syllable extraction parameters.
    pub extract: ExtractParams,
}

/// Parameters of the spectral transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectParams {
    /// FFT window size in samples.
    pub window_size: usize,

    /// Samples between consecutive window starts.
    pub window_step: usize,

    /// Retained band `[low, high)` in Hz.
    pub freq_cutoffs: [f64; 2],

    /// Expected sampling frequency of input recordings in Hz.
    pub samp_freq: u32,

    /// DPSS taper shape; the window's width parameter is
    /// `time_bandwidth / window_size`.
    pub time_bandwidth: f64,
}

impl Default for SpectParams {
    fn default() -> Self {
        Self {
            window_size: spect::DEFAULT_WINDOW_SIZE,
            window_step: spect::DEFAULT_WINDOW_STEP,
            freq_cutoffs: [spect::DEFAULT_FREQ_LOW, spect::DEFAULT_FREQ_HIGH],
            samp_freq: spect::DEFAULT_SAMP_FREQ,
            time_bandwidth: spect::DEFAULT_TIME_BANDWIDTH,
        }
    }
}

impl SpectParams {
    /// Samples shared by consecutive windows.
    pub fn overlap(&self) -> usize {
        self.window_size.saturating_sub(self.window_step)
    }

    /// DPSS width parameter for this window size.
    #[allow(clippy::cast_precision_loss)]
    pub fn taper_width(&self) -> f64 {
        self.time_bandwidth / self.window_size as f64
    }
}

/// Parameters of threshold segmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentParams {
    /// Amplitude above which a time bin belongs to a segment.
    pub threshold: f64,

    /// Segments this short or shorter are discarded (seconds).
    pub min_syl_dur: f64,

    /// Silent gaps this short or shorter are merged away (seconds).
    pub min_silent_dur: f64,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            threshold: segment::DEFAULT_THRESHOLD,
            min_syl_dur: segment::DEFAULT_MIN_SYL_DUR,
            min_silent_dur: segment::DEFAULT_MIN_SILENT_DUR,
        }
    }
}

/// Parameters of per-syllable extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractParams {
    /// Which labelled segments to extract.
    pub labels_to_use: LabelFilter,

    /// Output width of each syllable spectrogram in time bins.
    pub syl_spect_width: usize,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            labels_to_use: LabelFilter::All,
            syl_spect_width: extract::DEFAULT_SYL_SPECT_WIDTH,
        }
    }
}

/// Selects which labelled segments are extracted.
///
/// Written as `"all"` or as a string of label characters, e.g. `"iab"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LabelFilter {
    /// Every segment; extracted syllables carry no label.
    #[default]
    All,
    /// Only segments whose label is in the set.
    Only(BTreeSet<char>),
}

impl LabelFilter {
    /// Resolve the label reported for a segment, or `None` if it is skipped.
    ///
    /// The outer `Option` is the keep decision; the inner one is the label.
    pub fn resolve(&self, label: char) -> Option<Option<char>> {
        match self {
            Self::All => Some(None),
            Self::Only(set) if set.contains(&label) => Some(Some(label)),
            Self::Only(_) => None,
        }
    }
}

impl std::fmt::Display for LabelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "{}", extract::ALL_LABELS),
            Self::Only(set) => set.iter().try_for_each(|c| write!(f, "{c}")),
        }
    }
}

impl std::str::FromStr for LabelFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == extract::ALL_LABELS {
            return Ok(Self::All);
        }
        if s.is_empty() {
            return Err("label filter must be \"all\" or a non-empty set of labels".to_string());
        }
        Ok(Self::Only(s.chars().collect()))
    }
}

impl TryFrom<String> for LabelFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LabelFilter> for String {
    fn from(value: LabelFilter) -> Self {
        value.to_string()
    }
}
