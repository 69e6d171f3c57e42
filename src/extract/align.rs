//! Mapping label times onto spectrogram time bins.

/// Index of the time bin closest to `time`.
///
/// `time_bins` must be ascending. Ties go to the lower index. Returns `None`
/// only for an empty axis.
pub fn nearest_time_bin(time_bins: &[f64], time: f64) -> Option<usize> {
    if time_bins.is_empty() {
        return None;
    }

    let idx = time_bins.partition_point(|&t| t < time);
    if idx == 0 {
        return Some(0);
    }
    if idx == time_bins.len() {
        return Some(idx - 1);
    }

    let before = time - time_bins[idx - 1];
    let after = time_bins[idx] - time;
    Some(if before <= after { idx - 1 } else { idx })
}
