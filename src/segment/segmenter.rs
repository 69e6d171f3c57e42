//! Threshold segmentation of an amplitude envelope.

use crate::config::{SegmentParams, validate_segment_params};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A contiguous above-threshold stretch of song, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Start time in seconds.
    pub onset: f64,
    /// End time in seconds.
    pub offset: f64,
}

impl Segment {
    /// Length of the segment in seconds.
    pub fn duration(&self) -> f64 {
        self.offset - self.onset
    }
}

/// Divide a song into segments where the amplitude exceeds a threshold.
///
/// 1. Onsets are time bins where the amplitude rises above `threshold`,
///    offsets the bins where it falls back to or below it. The start and end
///    of the recording count as below threshold, so a song that starts loud
///    gets an onset at the first time bin and one that ends loud gets an
///    offset at the last time bin.
/// 2. Silent gaps of `min_silent_dur` or less are merged away: the offset
///    before the gap and the onset after it are both removed. The segments on
///    either side join into one; neither is dropped, and the last segment is
///    treated like any other.
/// 3. Segments of `min_syl_dur` or less are dropped.
///
/// Returned segments are ordered, non-overlapping and separated by more than
/// `min_silent_dur`.
pub fn segment_song(
    amplitude: &[f64],
    time_bins: &[f64],
    params: &SegmentParams,
) -> Result<Vec<Segment>> {
    validate_segment_params(params)?;
    if amplitude.len() != time_bins.len() {
        return Err(Error::LengthMismatch {
            what: "amplitude",
            expected: time_bins.len(),
            actual: amplitude.len(),
        });
    }

    let raw = threshold_crossings(amplitude, time_bins, params.threshold);
    let raw_count = raw.len();

    let mut segments = merge_short_gaps(raw, params.min_silent_dur);
    let merged_count = segments.len();

    segments.retain(|s| s.duration() > params.min_syl_dur);

    debug!(
        "Segmentation: {} threshold crossings, {} after gap merging, {} after duration filter",
        raw_count,
        merged_count,
        segments.len()
    );

    Ok(segments)
}

/// Pair rising and falling edges of `amplitude > threshold`.
fn threshold_crossings(amplitude: &[f64], time_bins: &[f64], threshold: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut onset: Option<f64> = None;

    for (&amp, &time) in amplitude.iter().zip(time_bins) {
        let above = amp > threshold;
        match (onset, above) {
            (None, true) => onset = Some(time),
            (Some(start), false) => {
                segments.push(Segment {
                    onset: start,
                    offset: time,
                });
                onset = None;
            }
            _ => {}
        }
    }

    if let (Some(start), Some(&last)) = (onset, time_bins.last()) {
        segments.push(Segment {
            onset: start,
            offset: last,
        });
    }

    segments
}

fn merge_short_gaps(raw: Vec<Segment>, min_silent_dur: f64) -> Vec<Segment> {
    let mut merged: Vec<Segment> = Vec::with_capacity(raw.len());
    for segment in raw {
        if let Some(last) = merged.last_mut()
            && segment.onset - last.offset <= min_silent_dur
        {
            last.offset = segment.offset;
        } else {
            merged.push(segment);
        }
    }
    merged
}
