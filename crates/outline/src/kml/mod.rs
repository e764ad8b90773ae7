//! KML polygon overlays
//!
//! Writes a single styled polygon `Placemark` inside a KML `Document`, the
//! form that Google Earth and most GIS viewers open directly.
//!
//! ```rust, no_run
//! # use seistools_outline::kml::{write_overlay, KmlColor, PolygonOverlay, PolygonStyle};
//! let style = PolygonStyle::builder()
//!     .fill(KmlColor::GREEN.with_alpha(80))
//!     .line_width(2.0)
//!     .build();
//!
//! let overlay = PolygonOverlay {
//!     name: "Licence block".to_string(),
//!     description: "Hand drawn".to_string(),
//!     style,
//!     coordinates: vec![[10.0, 50.0, 0.0], [11.0, 50.0, 0.0], [11.0, 51.0, 0.0], [10.0, 50.0, 0.0]],
//! };
//!
//! write_overlay(&overlay, "block.kml").unwrap();
//! ```

mod style;
mod writer;

#[doc(inline)]
pub use style::{KmlColor, PolygonStyle, PolygonStyleBuilder};

#[doc(inline)]
pub use writer::{write_kml, write_overlay, PolygonOverlay};
