//! Tests for syllable spectrogram extraction.

#![allow(clippy::cast_precision_loss, clippy::float_cmp)]

use ndarray::Array2;
use songseg::Error;
use songseg::audio::Waveform;
use songseg::config::{ExtractParams, LabelFilter, SpectParams};
use songseg::extract::{extract_labeled_syllables, extract_syllables};
use songseg::labels::LabelRecord;
use songseg::spect::Spectrogram;

/// 4 x 1000 spectrogram with 1 ms time bins whose values are the column index.
fn ramp_spectrogram() -> Spectrogram {
    let power = Array2::from_shape_fn((4, 1000), |(_, col)| col as f64);
    let freq_bins = vec![1000.0, 1062.5, 1125.0, 1187.5];
    let time_bins = (0..1000).map(|i| i as f64 * 0.001).collect();
    Spectrogram::new(power, freq_bins, time_bins, 32_000).unwrap()
}

fn three_syllables() -> LabelRecord {
    LabelRecord::new(
        vec!['a', 'x', 'b'],
        vec![200.0, 400.0, 600.0],
        vec![250.0, 450.0, 660.0],
    )
    .unwrap()
}

#[test]
fn test_all_labels_extracts_every_segment() {
    let spect = ramp_spectrogram();
    let syllables = extract_syllables(&spect, &three_syllables(), &LabelFilter::All, 300).unwrap();

    assert_eq!(syllables.len(), 3);
    assert!(syllables.iter().all(|s| s.label.is_none()));
    assert!(syllables.iter().all(|s| s.width() == 300));
    assert!(syllables.iter().all(|s| s.spect.nrows() == 4));
}

#[test]
fn test_label_subset_keeps_segment_order() {
    let spect = ramp_spectrogram();
    let filter: LabelFilter = "ab".parse().unwrap();

    let syllables = extract_syllables(&spect, &three_syllables(), &filter, 300).unwrap();

    let labels: Vec<_> = syllables.iter().map(|s| s.label).collect();
    assert_eq!(labels, vec![Some('a'), Some('b')]);
}

#[test]
fn test_syllable_is_centred_in_window() {
    let spect = ramp_spectrogram();
    let syllables = extract_syllables(&spect, &three_syllables(), &LabelFilter::All, 300).unwrap();

    // 'a' spans columns 200..250: 125 columns of context on each side.
    assert_eq!(syllables[0].spect[[0, 0]], 75.0);
    assert_eq!(syllables[0].spect[[3, 299]], 374.0);

    // 'b' spans 600..660: 120 columns on each side.
    assert_eq!(syllables[2].spect[[0, 0]], 480.0);
}

#[test]
fn test_window_shifted_near_recording_edges() {
    let spect = ramp_spectrogram();
    let labels = LabelRecord::new(vec!['a', 'b'], vec![10.0, 950.0], vec![60.0, 990.0]).unwrap();

    let syllables = extract_syllables(&spect, &labels, &LabelFilter::All, 300).unwrap();

    assert_eq!(syllables[0].spect[[0, 0]], 0.0);
    assert_eq!(syllables[0].width(), 300);
    assert_eq!(syllables[1].spect[[0, 299]], 999.0);
    assert_eq!(syllables[1].width(), 300);
}

#[test]
fn test_short_spectrogram_gives_narrow_output() {
    let spect = ramp_spectrogram();
    let labels = LabelRecord::new(vec!['a'], vec![400.0], vec![450.0]).unwrap();

    let syllables = extract_syllables(&spect, &labels, &LabelFilter::All, 2000).unwrap();

    assert_eq!(syllables[0].width(), 1000);
}

#[test]
fn test_no_matching_labels_is_empty() {
    let spect = ramp_spectrogram();
    let filter: LabelFilter = "z".parse().unwrap();

    let syllables = extract_syllables(&spect, &three_syllables(), &filter, 300).unwrap();

    assert!(syllables.is_empty());
}

#[test]
fn test_zero_width_rejected() {
    let spect = ramp_spectrogram();
    let result = extract_syllables(&spect, &three_syllables(), &LabelFilter::All, 0);
    assert!(matches!(result, Err(Error::InvalidConfig { .. })));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_width_beyond_signed_range_rejected() {
    let spect = ramp_spectrogram();
    let result = extract_syllables(&spect, &three_syllables(), &LabelFilter::All, usize::MAX);
    assert!(matches!(result, Err(Error::InvalidConfig { .. })));
}

#[test]
fn test_malformed_labels_rejected() {
    let spect = ramp_spectrogram();
    let labels = LabelRecord {
        labels: vec!['a'],
        onsets_ms: vec![300.0],
        offsets_ms: vec![200.0],
    };

    let result = extract_syllables(&spect, &labels, &LabelFilter::All, 300);
    assert!(matches!(result, Err(Error::MalformedSegment { .. })));
}

#[test]
fn test_mismatched_label_lengths_rejected() {
    let result = LabelRecord::new(vec!['a', 'b'], vec![0.0], vec![10.0, 20.0]);
    assert!(matches!(result, Err(Error::MalformedSegment { .. })));
}

#[test]
fn test_sample_rate_mismatch() {
    let waveform = Waveform::new(vec![0.5; 44_100], 44_100);
    let labels = LabelRecord::new(vec!['a'], vec![100.0], vec![200.0]).unwrap();

    let result = extract_labeled_syllables(
        &waveform,
        &labels,
        &SpectParams::default(),
        &ExtractParams::default(),
    );

    assert!(matches!(
        result,
        Err(Error::SampleRateMismatch {
            expected: 32_000,
            actual: 44_100
        })
    ));
}
