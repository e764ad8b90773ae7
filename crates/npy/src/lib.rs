//! NumPy `.npy` reader and folder scanner
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use seistools_npy::{read_npy, scan_folder};
//! // Load a single array, typed data are kept as stored
//! let array = read_npy("path/to/array.npy").unwrap();
//! println!("{} {:?}", array.dtype, array.shape);
//!
//! // Sort a whole folder into informative and constant arrays
//! let report = scan_folder("path/to/folder").unwrap();
//! println!("{} informative arrays", report.informative.len());
//! ```

// Split into subfiles for development, but anything important is re-exported
mod array;
mod dtype;
mod error;
mod header;
mod scan;

#[doc(inline)]
pub use array::{read_npy, NpyArray, NpyData};

#[doc(inline)]
pub use dtype::{ByteOrder, DType, Kind};

#[doc(inline)]
pub use header::Header;

#[doc(inline)]
pub use scan::{scan_folder, ArraySummary, ScanFailure, ScanReport};

#[doc(inline)]
pub use error::{Error, Result};
