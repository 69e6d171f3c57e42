//! Configuration loading and management.

mod file;
mod paths;
mod types;
mod validate;

pub use file::{load_config_file, load_default_config, save_config, save_default_config};
pub use paths::{config_dir, config_file_path};
pub use types::{Config, ExtractParams, LabelFilter, SegmentParams, SpectParams};
pub use validate::{
    validate_config, validate_extract_params, validate_segment_params, validate_spect_params,
    validate_syl_spect_width,
};
