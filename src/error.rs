//! Error types for songseg.

/// Result type alias for songseg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for songseg.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Spectrogram, segmentation or extraction parameters are malformed.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the validation failure.
        message: String,
    },

    /// Recording sample rate differs from the one the parameters expect.
    #[error("sampling frequency {actual} Hz does not match expected sampling frequency of {expected} Hz")]
    SampleRateMismatch {
        /// Sample rate declared in the spectrogram parameters.
        expected: u32,
        /// Sample rate reported by the decoder.
        actual: u32,
    },

    /// A retained spectral power value cannot be log-compressed.
    #[error("non-positive power {value} at {freq_hz} Hz, {time_s} s")]
    NonPositivePower {
        /// Frequency of the offending bin in Hz.
        freq_hz: f64,
        /// Time of the offending bin in seconds.
        time_s: f64,
        /// The offending power value.
        value: f64,
    },

    /// Segment or label arrays are inconsistent.
    #[error("malformed segment: {message}")]
    MalformedSegment {
        /// Description of the problem.
        message: String,
    },

    /// Two parallel sequences have different lengths.
    #[error("{what}: expected length {expected}, got {actual}")]
    LengthMismatch {
        /// Which sequence was checked.
        what: &'static str,
        /// Required length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Waveform is shorter than a single analysis window.
    #[error("waveform has {samples} samples, fewer than window size {window_size}")]
    WaveformTooShort {
        /// Number of samples in the waveform.
        samples: usize,
        /// Analysis window size.
        window_size: usize,
    },

    /// FFT processing failed.
    #[error("spectral transform failed: {reason}")]
    Transform {
        /// Description of the failure.
        reason: String,
    },

    /// Failed to open audio file.
    #[error("failed to open audio file '{path}'")]
    AudioOpen {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Failed to decode audio.
    #[error("failed to decode audio from '{path}'")]
    AudioDecode {
        /// Path to the audio file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: hound::Error,
    },

    /// Unsupported audio sample format.
    #[error("unsupported audio format: {format}")]
    UnsupportedAudioFormat {
        /// The unsupported format.
        format: String,
    },

    /// Failed to open or read a label file.
    #[error("failed to parse label file '{path}'")]
    LabelParse {
        /// Path to the label file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: csv::Error,
    },

    /// Invalid label file contents.
    #[error("invalid label file format: {message}")]
    InvalidLabelFormat {
        /// Description of the format error.
        message: String,
    },

    /// Failed to serialize a recording report.
    #[error("failed to serialize report")]
    ReportSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}
