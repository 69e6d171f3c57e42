//! Configuration validation.

use crate::config::{Config, ExtractParams, SegmentParams, SpectParams};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_spect_params(&config.spect)?;
    validate_segment_params(&config.segment)?;
    validate_extract_params(&config.extract)?;
    Ok(())
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig { message }
}

/// Validate spectrogram parameters before any transform work.
pub fn validate_spect_params(params: &SpectParams) -> Result<()> {
    if params.window_size == 0 {
        return Err(invalid("window_size must be at least 1".to_string()));
    }

    if params.window_step == 0 || params.window_step > params.window_size {
        return Err(invalid(format!(
            "window_step must be between 1 and window_size ({}), got {}",
            params.window_size, params.window_step
        )));
    }

    let [low, high] = params.freq_cutoffs;
    if !low.is_finite() || !high.is_finite() || low < 0.0 || low >= high {
        return Err(invalid(format!(
            "freq_cutoffs must satisfy 0 <= low < high, got [{low}, {high}]"
        )));
    }

    if params.samp_freq == 0 {
        return Err(invalid("samp_freq must be positive".to_string()));
    }

    if !params.time_bandwidth.is_finite() || params.time_bandwidth <= 0.0 {
        return Err(invalid(format!(
            "time_bandwidth must be positive, got {}",
            params.time_bandwidth
        )));
    }

    Ok(())
}

/// Validate segmentation parameters.
pub fn validate_segment_params(params: &SegmentParams) -> Result<()> {
    if !params.threshold.is_finite() {
        return Err(invalid(format!(
            "threshold must be finite, got {}",
            params.threshold
        )));
    }

    for (name, value) in [
        ("min_syl_dur", params.min_syl_dur),
        ("min_silent_dur", params.min_silent_dur),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!("{name} must be non-negative, got {value}")));
        }
    }

    Ok(())
}

/// Validate extraction parameters.
pub fn validate_extract_params(params: &ExtractParams) -> Result<()> {
    validate_syl_spect_width(params.syl_spect_width)
}

/// Validate a syllable spectrogram width: at least one column, and small
/// enough for signed window arithmetic.
pub fn validate_syl_spect_width(width: usize) -> Result<()> {
    if width == 0 {
        return Err(invalid("syl_spect_width must be at least 1".to_string()));
    }
    if i64::try_from(width).is_err() {
        return Err(invalid(format!(
            "syl_spect_width must be at most {}, got {width}",
            i64::MAX
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_zero_window_size() {
        let mut config = Config::default();
        config.spect.window_size = 0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_validate_step_larger_than_window() {
        let mut config = Config::default();
        config.spect.window_step = 1024;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_step_equal_to_window_is_allowed() {
        let mut config = Config::default();
        config.spect.window_step = config.spect.window_size;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_non_increasing_cutoffs() {
        let mut config = Config::default();
        config.spect.freq_cutoffs = [8000.0, 1000.0];
        assert!(validate_config(&config).is_err());

        config.spect.freq_cutoffs = [1000.0, 1000.0];
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_samp_freq() {
        let mut config = Config::default();
        config.spect.samp_freq = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_negative_durations() {
        let mut config = Config::default();
        config.segment.min_syl_dur = -0.01;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.segment.min_silent_dur = f64::NAN;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_width() {
        let mut config = Config::default();
        config.extract.syl_spect_width = 0;
        assert!(validate_config(&config).is_err());
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_validate_width_beyond_signed_range() {
        let mut config = Config::default();
        config.extract.syl_spect_width = usize::MAX;
        assert!(matches!(
            validate_config(&config),
            Err(Error::InvalidConfig { .. })
        ));
    }
}
