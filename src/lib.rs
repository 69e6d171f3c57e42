//! Songseg - bird song segmentation and syllable spectrogram extraction.
//!
//! The core turns a waveform into a log-power spectrogram
//! ([`spect::compute_spectrogram`]), reduces it to an amplitude envelope
//! ([`segment::compute_amplitude`]), finds syllable onsets and offsets by
//! thresholding ([`segment::segment_song`]) and cuts fixed-width spectrogram
//! slices around labelled syllables ([`extract::extract_syllables`]).
//! Every core function is pure; configuration is passed in explicitly.

#![warn(missing_docs)]

pub mod audio;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod labels;
pub mod pipeline;
pub mod segment;
pub mod spect;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, ProcessArgs};
use config::{Config, config_file_path, load_config_file, load_default_config, save_default_config};
use std::path::Path;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for the songseg CLI.
#[allow(clippy::print_stdout)]
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.process.verbose, cli.process.quiet);

    if let Some(command) = cli.command {
        return handle_command(command);
    }

    let Some(input) = cli.input else {
        println!("No input recording given. Run `songseg --help` for usage.");
        return Ok(());
    };

    let report = process_file(&input, &cli.process)?;
    println!("{report}");
    Ok(())
}

/// Decode, process and report on a single recording.
fn process_file(input: &Path, args: &ProcessArgs) -> Result<String> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)?,
        None => load_default_config()?,
    };
    args.apply_to(&mut config);

    info!("Processing: {}", input.display());
    let waveform = audio::decode_wav(input)?;

    let labels = args
        .labels
        .as_deref()
        .map(labels::read_label_file)
        .transpose()?;

    let result = pipeline::process_recording(&waveform, labels.as_ref(), &config)?;
    result.report.to_json()
}

/// Initialize the tracing subscriber. Logs go to stderr so stdout stays
/// machine-readable.
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let saved_path = save_default_config(&Config::default())?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            let text = toml::to_string_pretty(&config)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            println!("{text}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
