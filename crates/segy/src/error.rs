//! Result and Error types for seistools-segy

/// Type alias for `Result<T, segy::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `seistools-segy` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Trace data could not be arranged into an array
    #[error("failed to shape trace data")]
    ShapeError(#[from] ndarray::ShapeError),

    /// Progress bar could not be initialised
    #[error("failed to initialise progress bar: {0}")]
    ProgressBar(String),

    /// File is shorter than the mandatory headers
    #[error("file too short for the SEG-Y headers, expected {expected} bytes (found {found})")]
    TruncatedHeader { expected: usize, found: usize },

    /// Data sample format code is not one that can be decoded
    #[error("unsupported data sample format code {0}")]
    UnsupportedFormat(u16),

    /// Binary header declares no samples per trace
    #[error("binary header declares zero samples per trace")]
    NoSamples,

    /// Variable number of extended textual headers is not supported
    #[error("unsupported extended textual header count {0}")]
    UnsupportedExtendedHeaders(i16),

    /// Trace block length does not divide into whole traces
    #[error("trace block of {length} bytes is not a multiple of the trace size {trace_size}")]
    IncompleteTraces { length: usize, trace_size: usize },

    /// Inline/crossline positions do not form a full regular grid
    #[error("traces do not form a regular grid: {0}")]
    IrregularGeometry(String),
}
