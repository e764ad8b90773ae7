//! Result and Error types for seistools-npy

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, npy::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `seistools-npy` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Array data could not be given the declared shape
    #[error("failed to shape array data")]
    ShapeError(#[from] ndarray::ShapeError),

    /// File does not start with the `\x93NUMPY` magic string
    #[error("not a .npy file, magic string not found")]
    InvalidMagic,

    /// Format version is not 1.0, 2.0, or 3.0
    #[error("unsupported .npy format version {0}.{1}")]
    UnsupportedVersion(u8, u8),

    /// Header dictionary could not be interpreted
    #[error("invalid .npy header: {0}")]
    InvalidHeader(String),

    /// Data type descriptor that can not be decoded
    #[error("unsupported dtype \"{0}\"")]
    UnsupportedDtype(String),

    /// Fewer data bytes than the shape and dtype require
    #[error("array data truncated, expected {expected} bytes (found {found})")]
    TruncatedData { expected: usize, found: usize },

    /// Folder to scan does not exist
    #[error("folder \"{}\" does not exist", .0.display())]
    FolderNotFound(PathBuf),
}
