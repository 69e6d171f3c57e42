//! Amplitude envelope of a spectrogram.

use crate::spect::Spectrogram;
use ndarray::Axis;

/// Sum every frequency row of each time column.
///
/// The result has one value per time bin.
pub fn compute_amplitude(spect: &Spectrogram) -> Vec<f64> {
    spect.power().sum_axis(Axis(0)).to_vec()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sums_columns() {
        let spect = Spectrogram::new(
            array![[1.0, 2.0, -3.0], [4.0, 5.0, 1.0]],
            vec![1000.0, 1100.0],
            vec![0.0, 0.001, 0.002],
            32_000,
        )
        .unwrap();

        assert_eq!(compute_amplitude(&spect), vec![5.0, 7.0, -2.0]);
    }
}
