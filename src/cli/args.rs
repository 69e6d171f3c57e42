//! CLI argument definitions.

use crate::config::{Config, LabelFilter};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Segment bird song and extract per-syllable spectrograms.
#[derive(Debug, Parser)]
#[command(name = "songseg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// WAV recording to process.
    pub input: Option<PathBuf>,

    /// Options for processing a recording.
    #[command(flatten)]
    pub process: ProcessArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for processing a recording.
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Label file (CSV with label,onset_ms,offset_ms) for syllable extraction.
    #[arg(short, long, env = "SONGSEG_LABELS")]
    pub labels: Option<PathBuf>,

    /// Configuration file (default: platform config directory).
    #[arg(long, env = "SONGSEG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Expected sampling frequency in Hz.
    #[arg(long)]
    pub samp_freq: Option<u32>,

    /// Amplitude threshold for segmentation.
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Minimum syllable duration in seconds.
    #[arg(long, value_parser = parse_duration)]
    pub min_syl_dur: Option<f64>,

    /// Minimum silent gap between syllables in seconds.
    #[arg(long, value_parser = parse_duration)]
    pub min_silent_dur: Option<f64>,

    /// Labels to extract ("all" or a string of label characters).
    #[arg(long)]
    pub labels_to_use: Option<LabelFilter>,

    /// Syllable spectrogram width in time bins.
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub width: Option<u64>,

    /// Only print warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Override configuration values with those given on the command line.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(samp_freq) = self.samp_freq {
            config.spect.samp_freq = samp_freq;
        }
        if let Some(threshold) = self.threshold {
            config.segment.threshold = threshold;
        }
        if let Some(min_syl_dur) = self.min_syl_dur {
            config.segment.min_syl_dur = min_syl_dur;
        }
        if let Some(min_silent_dur) = self.min_silent_dur {
            config.segment.min_silent_dur = min_silent_dur;
        }
        if let Some(labels_to_use) = &self.labels_to_use {
            config.extract.labels_to_use = labels_to_use.clone();
        }
        if let Some(width) = self.width.and_then(|w| usize::try_from(w).ok()) {
            config.extract.syl_spect_width = width;
        }
    }
}

/// Parse and validate a duration in seconds.
fn parse_duration(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value < 0.0 {
        return Err(format!("duration must be non-negative, got {value}"));
    }

    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("0.02").ok(), Some(0.02));
        assert!(parse_duration("-0.1").is_err());
        assert!(parse_duration("abc").is_err());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::parse_from([
            "songseg",
            "song.wav",
            "--threshold",
            "1200",
            "--labels-to-use",
            "ab",
            "--width",
            "150",
            "--samp-freq",
            "44100",
        ]);
        let mut config = Config::default();
        cli.process.apply_to(&mut config);

        assert_eq!(config.segment.threshold, 1200.0);
        assert_eq!(config.spect.samp_freq, 44_100);
        assert_eq!(config.extract.syl_spect_width, 150);
        assert_eq!(
            config.extract.labels_to_use,
            LabelFilter::Only(['a', 'b'].into_iter().collect())
        );
        // Untouched values keep their defaults.
        assert_eq!(config.segment.min_syl_dur, 0.02);
    }

    #[test]
    fn test_width_must_be_positive() {
        let result = Cli::try_parse_from(["songseg", "song.wav", "--width", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::parse_from(["songseg", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Path
            })
        ));
    }
}
