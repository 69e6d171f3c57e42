//! Application-wide constants.
//!
//! All default parameters and fixed strings live here. Defaults follow the
//! analysis parameters of Koumura & Okanoya (2016).

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "songseg";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Spectrogram defaults.
pub mod spect {
    /// FFT window size in samples.
    pub const DEFAULT_WINDOW_SIZE: usize = 512;

    /// Samples between the starts of consecutive windows.
    pub const DEFAULT_WINDOW_STEP: usize = 32;

    /// Lower frequency cutoff in Hz (inclusive).
    pub const DEFAULT_FREQ_LOW: f64 = 1000.0;

    /// Upper frequency cutoff in Hz (exclusive).
    pub const DEFAULT_FREQ_HIGH: f64 = 8000.0;

    /// Expected sampling frequency of recordings in Hz.
    pub const DEFAULT_SAMP_FREQ: u32 = 32_000;

    /// Numerator of the DPSS width parameter (`time_bandwidth / window_size`).
    pub const DEFAULT_TIME_BANDWIDTH: f64 = 4.0;
}

/// Amplitude segmentation defaults.
pub mod segment {
    /// Amplitude above which a time bin is part of a segment.
    pub const DEFAULT_THRESHOLD: f64 = 5000.0;

    /// Minimum syllable duration in seconds.
    pub const DEFAULT_MIN_SYL_DUR: f64 = 0.02;

    /// Minimum silent gap between syllables in seconds.
    pub const DEFAULT_MIN_SILENT_DUR: f64 = 0.002;
}

/// Syllable extraction defaults.
pub mod extract {
    /// Width of each syllable spectrogram in time bins (about 1 ms each).
    pub const DEFAULT_SYL_SPECT_WIDTH: usize = 300;

    /// Label filter keyword selecting every segment.
    pub const ALL_LABELS: &str = "all";

    /// Label files store times in milliseconds.
    pub const MS_PER_SECOND: f64 = 1000.0;
}

/// Label file column headers.
pub mod labels {
    /// Label character column.
    pub const LABEL_COLUMN: &str = "label";
    /// Onset column, milliseconds.
    pub const ONSET_COLUMN: &str = "onset_ms";
    /// Offset column, milliseconds.
    pub const OFFSET_COLUMN: &str = "offset_ms";
}
