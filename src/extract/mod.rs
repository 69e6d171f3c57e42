//! Syllable spectrogram extraction from labelled recordings.

mod align;
mod extractor;

pub use align::nearest_time_bin;
pub use extractor::{SyllableSpect, extract_labeled_syllables, extract_syllables};
