//! Result and Error types for seistools-viewer

/// Type alias for `Result<T, viewer::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `seistools-viewer` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Volume has nothing to show along one of its axes
    #[error("volume has an empty axis, shape {0:?}")]
    EmptyVolume(Vec<usize>),

    /// Paired volumes can not share a slider
    #[error("volumes have {attribute} and {seismic} slices, they must match")]
    SliceCountMismatch { attribute: usize, seismic: usize },

    /// Window could not be created or crashed
    #[error("viewer window failed: {0}")]
    WindowError(String),
}
