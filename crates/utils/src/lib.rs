//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, finding the extent of a float slice without tripping over
//! `NaN` is needed by both the outline fallback and the slice viewer.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod distinct_ext;
mod error;
mod slice_ext;

// Flatten
pub use distinct_ext::DistinctExt;
pub use error::{Error, Result};
pub use slice_ext::SliceExt;
