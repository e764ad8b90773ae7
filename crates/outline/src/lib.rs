//! Survey point outlines and geographic export
#![doc = include_str!("../readme.md")]
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use seistools_outline::{build_outline, convert_coordinates, read_coordinates, write_kml, WGS84};
//! // Read the raw points, comments and broken lines are skipped
//! let points = read_coordinates("path/to/points.txt").unwrap();
//!
//! // Closed convex hull ring around the unique points
//! let outline = build_outline(&points).unwrap();
//!
//! // Gauss-Krueger zone 4 to WGS84 lon/lat
//! let lonlat = convert_coordinates(&outline.points, "EPSG:31468", WGS84).unwrap();
//!
//! // Styled polygon overlay
//! write_kml(&lonlat, "outline.kml", points.len(), true).unwrap();
//! ```

// Split into subfiles for development, but anything important is re-exported
mod dedup;
mod error;
mod hull;
mod pipeline;
mod transform;

pub mod crs;
pub mod kml;
pub mod reader;

// external re-export so callers do not need a direct geo dependency
#[doc(no_inline)]
pub use geo::Coord;

#[doc(inline)]
pub use reader::{parse_coordinates, read_coordinates};

#[doc(inline)]
pub use dedup::{remove_duplicate_points, DEFAULT_TOLERANCE};

#[doc(inline)]
pub use hull::{bounding_box, build_outline, HullMethod, Outline};

#[doc(inline)]
pub use crs::Crs;

#[doc(inline)]
pub use transform::{convert_coordinates, Transformer, WGS84};

#[doc(inline)]
pub use kml::{write_kml, KmlColor, PolygonOverlay, PolygonStyle};

#[doc(inline)]
pub use pipeline::{
    convert_to_kml, select_source_crs, ConvertOptions, Hemisphere, Summary, DEFAULT_SOURCE_CRS,
};

#[doc(inline)]
pub use error::{Error, Result};
