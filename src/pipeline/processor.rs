//! Single recording processing pipeline.

use crate::audio::Waveform;
use crate::config::{Config, validate_config};
use crate::error::{Error, Result};
use crate::extract::{SyllableSpect, extract_syllables};
use crate::labels::LabelRecord;
use crate::segment::{Segment, compute_amplitude, segment_song};
use crate::spect::compute_spectrogram;
use serde::Serialize;
use tracing::{debug, info};

/// Summary of one processed recording.
#[derive(Debug, Clone, Serialize)]
pub struct RecordingReport {
    /// Sampling frequency in Hz.
    pub samp_freq: u32,
    /// Recording length in seconds.
    pub duration_secs: f64,
    /// Spectrogram frequency rows.
    pub n_freq_bins: usize,
    /// Spectrogram time columns.
    pub n_time_bins: usize,
    /// Lowest and highest retained frequency in Hz.
    pub freq_range_hz: [f64; 2],
    /// Segments found by amplitude thresholding.
    pub segments: Vec<Segment>,
    /// Extracted syllables, empty when no labels were supplied.
    pub syllables: Vec<SyllableSummary>,
}

/// Shape and label of one extracted syllable.
#[derive(Debug, Clone, Serialize)]
pub struct SyllableSummary {
    /// Position among the extracted syllables.
    pub index: usize,
    /// Label, `None` when every label was selected.
    pub label: Option<char>,
    /// Width in time bins.
    pub width: usize,
}

/// Result of processing a single recording.
#[derive(Debug)]
pub struct ProcessResult {
    /// Serializable summary.
    pub report: RecordingReport,
    /// Extracted syllable spectrograms.
    pub syllables: Vec<SyllableSpect>,
}

/// Run the full pipeline on one recording.
///
/// Computes the spectrogram and amplitude envelope, segments the song
/// automatically and, when `labels` are given, extracts one spectrogram per
/// selected labelled syllable.
///
/// # Errors
///
/// Fails with [`Error::SampleRateMismatch`] before any work if the recording
/// was not sampled at `config.spect.samp_freq`; otherwise propagates the
/// first error of any stage. No partial result is returned.
pub fn process_recording(
    waveform: &Waveform,
    labels: Option<&LabelRecord>,
    config: &Config,
) -> Result<ProcessResult> {
    use std::time::Instant;

    let start_time = Instant::now();

    if waveform.samp_freq() != config.spect.samp_freq {
        return Err(Error::SampleRateMismatch {
            expected: config.spect.samp_freq,
            actual: waveform.samp_freq(),
        });
    }
    validate_config(config)?;

    info!(
        "Processing {:.2}s of audio at {} Hz",
        waveform.duration_secs(),
        waveform.samp_freq()
    );

    let spect = compute_spectrogram(waveform, &config.spect)?;
    let amplitude = compute_amplitude(&spect);
    let segments = segment_song(&amplitude, spect.time_bins(), &config.segment)?;
    info!("Found {} segments", segments.len());

    let syllables = match labels {
        Some(labels) => {
            let syllables = extract_syllables(
                &spect,
                labels,
                &config.extract.labels_to_use,
                config.extract.syl_spect_width,
            )?;
            info!(
                "Extracted {} of {} labelled syllables",
                syllables.len(),
                labels.len()
            );
            syllables
        }
        None => {
            debug!("No labels supplied, skipping syllable extraction");
            Vec::new()
        }
    };

    let freq_bins = spect.freq_bins();
    let report = RecordingReport {
        samp_freq: spect.samp_freq(),
        duration_secs: waveform.duration_secs(),
        n_freq_bins: spect.n_freq_bins(),
        n_time_bins: spect.n_time_bins(),
        freq_range_hz: [
            freq_bins.first().copied().unwrap_or_default(),
            freq_bins.last().copied().unwrap_or_default(),
        ],
        segments,
        syllables: syllables
            .iter()
            .enumerate()
            .map(|(index, s)| SyllableSummary {
                index,
                label: s.label,
                width: s.width(),
            })
            .collect(),
    };

    info!(
        "Processed recording in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(ProcessResult { report, syllables })
}

impl RecordingReport {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::ReportSerialize { source: e })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn burst_waveform(samp_freq: u32) -> Waveform {
        let mut state: u32 = 1;
        let samples = (0..16_000)
            .map(|i| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let hiss = f64::from(state >> 16) / 65_536.0 - 0.5;
                let t = f64::from(i) / 32_000.0;
                let tone = (2.0 * std::f64::consts::PI * 2500.0 * t).sin();
                if (4000..8000).contains(&i) {
                    10_000.0 * tone + hiss
                } else {
                    hiss
                }
            })
            .collect();
        Waveform::new(samples, samp_freq)
    }

    #[test]
    fn test_sample_rate_checked_first() {
        let mut config = Config::default();
        config.segment.threshold = f64::NAN;

        let result = process_recording(&burst_waveform(44_100), None, &config);
        assert!(matches!(result, Err(Error::SampleRateMismatch { .. })));
    }

    #[test]
    fn test_report_without_labels() {
        let result = process_recording(&burst_waveform(32_000), None, &Config::default()).unwrap();

        assert_eq!(result.report.samp_freq, 32_000);
        assert_eq!(result.report.n_freq_bins, 112);
        assert_eq!(result.report.n_time_bins, 485);
        assert!(result.report.syllables.is_empty());
        assert!(result.syllables.is_empty());
    }

    #[test]
    fn test_report_with_labels() {
        let labels = LabelRecord::new(vec!['a', 'b'], vec![130.0, 300.0], vec![240.0, 350.0]).unwrap();
        let mut config = Config::default();
        config.extract.labels_to_use = "a".parse().unwrap();

        let result = process_recording(&burst_waveform(32_000), Some(&labels), &config).unwrap();

        assert_eq!(result.syllables.len(), 1);
        assert_eq!(result.report.syllables[0].label, Some('a'));
        assert_eq!(result.report.syllables[0].width, 300);

        let json = result.report.to_json().unwrap();
        assert!(json.contains("\"segments\""));
    }
}
