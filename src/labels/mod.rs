//! Ground-truth syllable labels.
//!
//! Label files annotate a recording with one character per syllable and the
//! syllable's onset and offset in milliseconds.

mod parser;
mod record;

pub use parser::read_label_file;
pub use record::LabelRecord;
