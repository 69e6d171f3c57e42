//! Processing pipeline for a single recording.

mod processor;

pub use processor::{ProcessResult, RecordingReport, SyllableSummary, process_recording};
