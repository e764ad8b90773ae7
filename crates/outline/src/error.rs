//! Result and Error types for seistools-outline

// standard library
use std::path::PathBuf;

/// Type alias for `Result<T, outline::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `seistools-outline` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Extent of a point set could not be found
    #[error("failed to find point extent")]
    ExtentError(#[from] seistools_utils::Error),

    /// Input file does not exist
    #[error("input file \"{}\" not found", .0.display())]
    InputNotFound(PathBuf),

    /// Not enough points for any polygon
    #[error("need at least {minimum} points to create a polygon (found {found})")]
    TooFewPoints { found: usize, minimum: usize },

    /// Not enough points left once duplicates are removed
    #[error("need at least {minimum} unique points to create a polygon (found {found})")]
    TooFewUniquePoints { found: usize, minimum: usize },

    /// A coordinate is `NaN` or infinite
    #[error("coordinate {index} is not a finite value")]
    NonFiniteCoordinate { index: usize },

    /// Rounding tolerance for duplicate removal must be a positive number
    #[error("duplicate tolerance must be positive and finite (found {0})")]
    InvalidTolerance(f64),

    /// Identifier is not of the form `EPSG:<code>`
    #[error("could not interpret \"{0}\" as a coordinate reference system")]
    InvalidCrs(String),

    /// Well formed identifier for a system that is not implemented
    #[error("coordinate reference system \"{0}\" is not supported")]
    UnsupportedCrs(String),

    /// UTM zones are numbered 1 to 60
    #[error("UTM zone {0} is outside 1-60")]
    InvalidUtmZone(u8),

    /// Hemisphere hint could not be understood
    #[error("failed to infer hemisphere from \"{0}\"")]
    InvalidHemisphere(String),

    /// A single point could not be transformed
    #[error("could not transform point ({x}, {y}): {reason}")]
    TransformFailed { x: f64, y: f64, reason: String },

    /// Every point failed to transform
    #[error("no points were successfully processed")]
    NoPointsTransformed,
}
