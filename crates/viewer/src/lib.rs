//! Interactive slice viewer for 3D volumes
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use seistools_viewer::{show_volume, show_volume_pair};
//! # use ndarray::Array3;
//! let seismic = Array3::<f32>::zeros((200, 50, 80));
//! let attribute = Array3::<f32>::ones((200, 50, 80));
//!
//! // Seismic only
//! show_volume(seismic.clone()).unwrap();
//!
//! // Attribute and seismic side by side
//! show_volume_pair(attribute, seismic).unwrap();
//! ```

// Split into subfiles for development, but anything important is re-exported
mod app;
mod colormap;
mod error;

#[doc(inline)]
pub use app::{show_volume, show_volume_pair, SliceViewer};

#[doc(inline)]
pub use colormap::{slice_to_rgba, Colormap, DisplayRange};

#[doc(inline)]
pub use error::{Error, Result};
