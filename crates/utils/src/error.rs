//! Result and Error types for the utils module

/// Type alias for `Result<T, utils::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// Reasons a float slice reduction has no answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Nothing to reduce, either no values or no finite ones
    EmptySlice,

    /// A `NaN` or infinite value where only finite values make sense
    NonFiniteValue { index: usize },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Error::EmptySlice => write!(f, "no finite values to reduce"),
            Error::NonFiniteValue { index } => {
                write!(f, "value at index {index} is NaN or infinite")
            }
        }
    }
}

impl std::error::Error for Error {}
