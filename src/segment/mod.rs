//! Amplitude envelope and threshold segmentation.

mod amplitude;
mod segmenter;

pub use amplitude::compute_amplitude;
pub use segmenter::{Segment, segment_song};
