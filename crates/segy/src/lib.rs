//! SEG-Y seismic cube reader
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use seistools_segy::{read_segy, Endian};
//! // Every trace in file order, with inline/crossline labels in lockstep
//! let segy = read_segy("path/to/cube.sgy", Endian::Big).unwrap();
//! println!("{}", segy.text_header);
//!
//! // Dense [sample, crossline, inline] cube for regular surveys
//! let volume = segy.to_volume().unwrap();
//! ```

// Split into subfiles for development, but anything important is re-exported
mod endian;
mod error;
mod samples;
mod segy;

pub mod header;
pub mod reader;

#[doc(inline)]
pub use reader::{read_segy, SegyReader};

#[doc(inline)]
pub use segy::Segy;

#[doc(inline)]
pub use header::{BinaryHeader, TraceHeader};

#[doc(inline)]
pub use samples::{ibm_to_f32, SampleFormat};

#[doc(inline)]
pub use endian::Endian;

#[doc(inline)]
pub use error::{Error, Result};
