//! Discrete prolate spheroidal (Slepian) analysis window.
//!
//! The window is the eigenvector belonging to the largest eigenvalue of the
//! symmetric tridiagonal matrix
//!
//! ```text
//! diag[m]    = ((M - 1 - 2m) / 2)^2 * cos(2*pi*W)
//! off[m-1,m] = m * (M - m) / 2
//! ```
//!
//! with `W = width / 4`, scaled so its peak is 1.

use nalgebra::{DMatrix, SymmetricEigen};
use std::f64::consts::PI;

/// Build a DPSS window of `len` samples with full bandwidth `width`
/// (cycles per sample).
///
/// A `width` of `4 / len` gives the window used for song spectrograms.
pub fn dpss_window(len: usize, width: f64) -> Vec<f64> {
    match len {
        0 => return Vec::new(),
        1 => return vec![1.0],
        _ => {}
    }

    let eigen = SymmetricEigen::new(tridiagonal(len, width));
    let largest = eigen.eigenvalues.imax();

    let mut v: Vec<f64> = eigen.eigenvectors.column(largest).iter().copied().collect();
    normalize_peak(&mut v);
    v
}

#[allow(clippy::cast_precision_loss)]
fn tridiagonal(len: usize, width: f64) -> DMatrix<f64> {
    let m_len = len as f64;
    let cos_w = (2.0 * PI * width / 4.0).cos();

    DMatrix::from_fn(len, len, |row, col| {
        if row == col {
            let x = (m_len - 1.0 - 2.0 * row as f64) / 2.0;
            x * x * cos_w
        } else if row.abs_diff(col) == 1 {
            let m = row.max(col) as f64;
            m * (m_len - m) / 2.0
        } else {
            0.0
        }
    })
}

/// Scale so the largest-magnitude entry becomes exactly 1.
fn normalize_peak(v: &mut [f64]) {
    let peak = v
        .iter()
        .copied()
        .fold(0.0_f64, |acc, x| if x.abs() > acc.abs() { x } else { acc });
    if peak != 0.0 {
        v.iter_mut().for_each(|x| *x /= peak);
    }
}
