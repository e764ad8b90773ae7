//! `seistools` is a small modular toolkit for seismic cubes, saved numeric
//! arrays, and survey outlines
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use seistools_utils as utils;

#[cfg(feature = "npy")]
#[cfg_attr(docsrs, doc(cfg(feature = "npy")))]
#[doc(inline)]
pub use seistools_npy as npy;

#[cfg(feature = "outline")]
#[cfg_attr(docsrs, doc(cfg(feature = "outline")))]
#[doc(inline)]
pub use seistools_outline as outline;

#[cfg(feature = "segy")]
#[cfg_attr(docsrs, doc(cfg(feature = "segy")))]
#[doc(inline)]
pub use seistools_segy as segy;

#[cfg(feature = "viewer")]
#[cfg_attr(docsrs, doc(cfg(feature = "viewer")))]
#[doc(inline)]
pub use seistools_viewer as viewer;
