//! Ground-truth labels for one recording.

use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Parallel label, onset and offset sequences for one recording.
///
/// Times are in milliseconds, as label files store them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelRecord {
    /// One character per segment.
    pub labels: Vec<char>,
    /// Segment onsets in milliseconds.
    pub onsets_ms: Vec<f64>,
    /// Segment offsets in milliseconds.
    pub offsets_ms: Vec<f64>,
}

impl LabelRecord {
    /// Build a record and check it with [`LabelRecord::validate`].
    pub fn new(labels: Vec<char>, onsets_ms: Vec<f64>, offsets_ms: Vec<f64>) -> Result<Self> {
        let record = Self {
            labels,
            onsets_ms,
            offsets_ms,
        };
        record.validate()?;
        Ok(record)
    }

    /// Number of labelled segments.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the record holds no segments.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Check equal lengths and `onset < offset` for every segment.
    pub fn validate(&self) -> Result<()> {
        if self.onsets_ms.len() != self.labels.len() || self.offsets_ms.len() != self.labels.len()
        {
            return Err(Error::MalformedSegment {
                message: format!(
                    "{} labels, {} onsets and {} offsets",
                    self.labels.len(),
                    self.onsets_ms.len(),
                    self.offsets_ms.len()
                ),
            });
        }

        for (i, (onset, offset)) in self.onsets_ms.iter().zip(&self.offsets_ms).enumerate() {
            if onset.partial_cmp(offset) != Some(Ordering::Less) {
                return Err(Error::MalformedSegment {
                    message: format!(
                        "segment {i}: onset ({onset} ms) must be before offset ({offset} ms)"
                    ),
                });
            }
        }

        Ok(())
    }

    /// Iterate `(label, onset_ms, offset_ms)` triples in segment order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64, f64)> + '_ {
        self.labels
            .iter()
            .zip(&self.onsets_ms)
            .zip(&self.offsets_ms)
            .map(|((&label, &onset), &offset)| (label, onset, offset))
    }
}
