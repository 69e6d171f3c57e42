//! Per-syllable spectrogram extraction.

use std::ops::Range;

use ndarray::{Array2, s};
use tracing::{debug, info};

use crate::audio::Waveform;
use crate::config::{
    ExtractParams, LabelFilter, SpectParams, validate_extract_params, validate_spect_params,
    validate_syl_spect_width,
};
use crate::constants::extract::MS_PER_SECOND;
use crate::error::{Error, Result};
use crate::extract::nearest_time_bin;
use crate::labels::LabelRecord;
use crate::spect::{Spectrogram, compute_spectrogram};

/// A fixed-width slice of a spectrogram around one syllable.
#[derive(Debug, Clone, PartialEq)]
pub struct SyllableSpect {
    /// Log power, frequency rows by time columns. Owned copy of the source.
    pub spect: Array2<f64>,
    /// Syllable label, or `None` when every label was selected.
    pub label: Option<char>,
}

impl SyllableSpect {
    /// Number of time columns.
    pub fn width(&self) -> usize {
        self.spect.ncols()
    }
}

/// Cut one spectrogram slice per selected labelled segment.
///
/// Label onsets and offsets (milliseconds) are mapped to the nearest time
/// bins. Each slice is `syl_spect_width` columns wide with the syllable
/// centred in it; syllables wider than that are cropped symmetrically. Near
/// the start or end of the recording the window is shifted to stay inside
/// the spectrogram, and if the spectrogram is too short for that the slice
/// comes out narrower. Slices are never zero-padded.
///
/// With [`LabelFilter::All`] every segment is extracted and its label is
/// reported as `None`. Output follows segment order.
pub fn extract_syllables(
    spect: &Spectrogram,
    labels: &LabelRecord,
    labels_to_use: &LabelFilter,
    syl_spect_width: usize,
) -> Result<Vec<SyllableSpect>> {
    labels.validate()?;
    validate_syl_spect_width(syl_spect_width)?;

    let time_bins = spect.time_bins();
    let n_cols = spect.n_time_bins();
    let power = spect.power();

    let mut syllables = Vec::new();
    for (i, (label, onset_ms, offset_ms)) in labels.iter().enumerate() {
        let Some(label) = labels_to_use.resolve(label) else {
            continue;
        };

        let (Some(onset), Some(offset)) = (
            nearest_time_bin(time_bins, onset_ms / MS_PER_SECOND),
            nearest_time_bin(time_bins, offset_ms / MS_PER_SECOND),
        ) else {
            return Err(Error::MalformedSegment {
                message: format!("segment {i}: spectrogram has no time bins"),
            });
        };

        let cols = syllable_window(onset, offset, syl_spect_width, n_cols);
        if cols.len() != syl_spect_width {
            debug!(
                "Segment {i} at {onset_ms} ms: window {cols:?} narrower than {syl_spect_width} bins"
            );
        }

        syllables.push(SyllableSpect {
            spect: power.slice(s![.., cols]).to_owned(),
            label,
        });
    }

    Ok(syllables)
}

/// Column range of a `width`-wide window centred on `onset..offset`.
///
/// If the centred window would start before column 0 it is pushed right;
/// otherwise, if it would run past `n_cols`, it is pushed left. Whatever
/// still falls outside `0..n_cols` is cut off. `width` must fit in an
/// `i64`, which [`validate_syl_spect_width`] guarantees.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn syllable_window(onset: usize, offset: usize, width: usize, n_cols: usize) -> Range<usize> {
    let (onset, offset, n) = (onset as i64, offset as i64, n_cols as i64);
    let width_diff = width as i64 - (offset - onset);

    let mut left = (width_diff as f64 / 2.0).round_ties_even() as i64;
    let mut right = width_diff - left;

    if left > onset {
        left = onset;
        right = width_diff - left;
    } else if offset + right > n {
        right = n - offset;
        left = width_diff - right;
    }

    let start = (onset - left).clamp(0, n);
    let end = (offset + right).clamp(start, n);
    start as usize..end as usize
}

/// Compute the spectrogram of a labelled recording and extract its syllables.
///
/// The recording's sampling frequency must equal `spect_params.samp_freq`;
/// this is checked before any other work.
pub fn extract_labeled_syllables(
    waveform: &Waveform,
    labels: &LabelRecord,
    spect_params: &SpectParams,
    extract_params: &ExtractParams,
) -> Result<Vec<SyllableSpect>> {
    if waveform.samp_freq() != spect_params.samp_freq {
        return Err(Error::SampleRateMismatch {
            expected: spect_params.samp_freq,
            actual: waveform.samp_freq(),
        });
    }
    validate_spect_params(spect_params)?;
    validate_extract_params(extract_params)?;
    labels.validate()?;

    let spect = compute_spectrogram(waveform, spect_params)?;
    let syllables = extract_syllables(
        &spect,
        labels,
        &extract_params.labels_to_use,
        extract_params.syl_spect_width,
    )?;

    info!(
        "Extracted {} of {} labelled syllables (labels: {})",
        syllables.len(),
        labels.len(),
        extract_params.labels_to_use
    );

    Ok(syllables)
}
