//! The full points-to-KML conversion
//!
//! ```text
//! read -> dedup -> outline -> reproject (optional) -> write KML
//! ```
//!
//! Each stage logs what it did at `info` level so that the command line tool
//! reads like a progress report.

// crate modules
use crate::dedup::{remove_duplicate_points, DEFAULT_TOLERANCE};
use crate::error::{Error, Result};
use crate::hull::{build_outline, HullMethod};
use crate::kml::{write_overlay, PolygonOverlay, PolygonStyle};
use crate::reader::read_coordinates;
use crate::transform::{convert_coordinates, WGS84};
use crate::Crs;

// seistools modules
use seistools_utils::f;

// standard library
use std::path::PathBuf;
use std::str::FromStr;

// external crates
use log::info;

/// Source system used when nothing else is requested, DHDN / GK zone 4
pub const DEFAULT_SOURCE_CRS: &str = "EPSG:31468";

/// Minimum number of points that can form a polygon
const MIN_POINTS: usize = 3;

/// UTM hemisphere
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

impl FromStr for Hemisphere {
    type Err = Error;

    /// Accepts `n`, `north`, `s`, `south` in any case
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Ok(Self::North),
            "s" | "south" => Ok(Self::South),
            _ => Err(Error::InvalidHemisphere(s.to_string())),
        }
    }
}

/// Decide on the source coordinate system from user options
///
/// In order of precedence:
/// - `no_conversion` keeps the original coordinates (`None`)
/// - an explicit identifier is used as given
/// - a UTM zone gives `EPSG:326xx` or `EPSG:327xx` by hemisphere
/// - otherwise [DEFAULT_SOURCE_CRS]
///
/// ```rust
/// # use seistools_outline::{select_source_crs, Hemisphere};
/// let crs = select_source_crs(false, None, Some(44), Hemisphere::South).unwrap();
/// assert_eq!(crs.as_deref(), Some("EPSG:32744"));
///
/// let crs = select_source_crs(false, None, None, Hemisphere::North).unwrap();
/// assert_eq!(crs.as_deref(), Some("EPSG:31468"));
///
/// assert_eq!(select_source_crs(true, None, Some(44), Hemisphere::North).unwrap(), None);
/// ```
pub fn select_source_crs(
    no_conversion: bool,
    explicit: Option<&str>,
    utm_zone: Option<u8>,
    hemisphere: Hemisphere,
) -> Result<Option<String>> {
    if no_conversion {
        return Ok(None);
    }

    if let Some(identifier) = explicit {
        return Ok(Some(identifier.to_string()));
    }

    if let Some(zone) = utm_zone {
        let crs = Crs::utm(zone, hemisphere == Hemisphere::North)?;
        return Ok(Some(crs.identifier()));
    }

    Ok(Some(DEFAULT_SOURCE_CRS.to_string()))
}

/// Everything needed for one conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Text file of `x y` coordinates
    pub input: PathBuf,
    /// Destination KML file
    pub output: PathBuf,
    /// Source system, `None` keeps the original coordinates
    pub source_crs: Option<String>,
    /// Rounding tolerance for duplicate removal
    pub tolerance: f64,
    /// Polygon style
    pub style: PolygonStyle,
}

impl ConvertOptions {
    /// Defaults for everything except the input file
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from("output_polygon.kml"),
            source_crs: Some(DEFAULT_SOURCE_CRS.to_string()),
            tolerance: DEFAULT_TOLERANCE,
            style: PolygonStyle::default(),
        }
    }
}

/// Counts collected along the way
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Points read from the input file
    pub original: usize,
    /// Points left after duplicate removal
    pub unique: usize,
    /// Points in the closed outline ring
    pub outline: usize,
    /// Points written to the KML file
    pub written: usize,
    /// How the outline was generated
    pub method: HullMethod,
    /// Source system, `None` if no conversion was done
    pub source_crs: Option<String>,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let crs = match &self.source_crs {
            Some(crs) => f!("{crs} -> WGS84"),
            None => "Original (no conversion)".to_string(),
        };

        writeln!(f, "Summary:")?;
        writeln!(f, "- Original points: {}", self.original)?;
        writeln!(f, "- Unique points: {}", self.unique)?;
        writeln!(f, "- Outline points: {} ({})", self.written, self.method)?;
        write!(f, "- Coordinate system: {crs}")
    }
}

/// Run the full conversion and write the KML file
///
/// Nothing is written if any stage fails.
pub fn convert_to_kml(options: &ConvertOptions) -> Result<Summary> {
    if !options.input.exists() {
        return Err(Error::InputNotFound(options.input.clone()));
    }

    info!("Reading coordinates...");
    let points = read_coordinates(&options.input)?;
    let original = points.len();
    info!("Read {original} points");

    if original < MIN_POINTS {
        return Err(Error::TooFewPoints {
            found: original,
            minimum: MIN_POINTS,
        });
    }

    let points = remove_duplicate_points(&points, options.tolerance)?;
    let unique = points.len();
    info!("After removing duplicates: {unique} unique points");

    if unique < MIN_POINTS {
        return Err(Error::TooFewUniquePoints {
            found: unique,
            minimum: MIN_POINTS,
        });
    }

    info!("Creating outline polygon...");
    let outline = build_outline(&points)?;
    info!("Outline polygon has {} points", outline.len());

    let (final_points, is_latlon) = match &options.source_crs {
        None => {
            info!("Using original coordinates without conversion");
            (outline.to_xyz(), false)
        }
        Some(source) => {
            info!("Converting from {source} to WGS84...");
            (convert_coordinates(&outline.points, source, WGS84)?, true)
        }
    };

    if final_points.is_empty() {
        return Err(Error::NoPointsTransformed);
    }

    info!("Creating KML file...");
    let overlay =
        PolygonOverlay::outline(final_points, original, is_latlon).with_style(options.style);
    write_overlay(&overlay, &options.output)?;

    Ok(Summary {
        original,
        unique,
        outline: outline.len(),
        written: overlay.coordinates.len(),
        method: outline.method,
        source_crs: options.source_crs.clone(),
    })
}
