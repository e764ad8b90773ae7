// crate modules
use crate::crs::Crs;
use crate::error::{Error, Result};

// seistools modules
use seistools_utils::f;

// external crates
use geo::Coord;
use log::{debug, warn};

/// Identifier for WGS 84 longitude/latitude, the default target
pub const WGS84: &str = "EPSG:4326";

/// Point transformer between two coordinate reference systems
///
/// Coordinates are always in `(x, y)` order, i.e. `(easting, northing)` for
/// projected systems and `(longitude, latitude)` for geographic ones.
///
/// ```rust
/// # use seistools_outline::Transformer;
/// let transformer = Transformer::from_crs("EPSG:32615", "EPSG:4326").unwrap();
///
/// // Central meridian of zone 15 on the equator
/// let (lon, lat) = transformer.transform(500_000.0, 0.0).unwrap();
/// assert!((lon + 93.0).abs() < 1e-9);
/// assert!(lat.abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Transformer {
    source: Crs,
    target: Crs,
}

impl Transformer {
    /// Build a transformer between two explicit systems
    pub fn new(source: Crs, target: Crs) -> Self {
        Self { source, target }
    }

    /// Build a transformer from identifiers such as `EPSG:31468`
    ///
    /// Fails if either identifier is not understood.
    pub fn from_crs(source: &str, target: &str) -> Result<Self> {
        Ok(Self::new(source.parse()?, target.parse()?))
    }

    /// Source system
    pub fn source(&self) -> &Crs {
        &self.source
    }

    /// Target system
    pub fn target(&self) -> &Crs {
        &self.target
    }

    /// Transform a single point
    pub fn transform(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        let fail = |reason: &str| Error::TransformFailed {
            x,
            y,
            reason: reason.to_string(),
        };

        if !(x.is_finite() && y.is_finite()) {
            return Err(fail("input is not finite"));
        }

        let (mut lon, mut lat) = self.source.unproject(x, y);
        check_geodetic(lon, lat).map_err(|r| fail(&r))?;

        if self.source.datum != self.target.datum {
            let xyz = self.source.datum.geodetic_to_wgs84(lon, lat);
            (lon, lat) = self
                .target
                .datum
                .wgs84_to_geodetic(&xyz)
                .ok_or_else(|| fail("singular datum shift"))?;
        }

        let (tx, ty) = self.target.project(lon, lat);
        if !(tx.is_finite() && ty.is_finite()) {
            return Err(fail("result is not finite"));
        }

        Ok((tx, ty))
    }
}

/// Latitude must be on the globe, longitude within half a turn of anything
fn check_geodetic(lon: f64, lat: f64) -> core::result::Result<(), String> {
    if !(lon.is_finite() && lat.is_finite()) {
        return Err("geodetic position is not finite".to_string());
    }
    if lat.abs() > std::f64::consts::FRAC_PI_2 {
        return Err(f!("latitude {:.3} is out of range", lat.to_degrees()));
    }
    if lon.abs() > 2.0 * std::f64::consts::PI {
        return Err(f!("longitude {:.3} is out of range", lon.to_degrees()));
    }
    Ok(())
}

/// Convert points between coordinate reference systems
///
/// Every point is transformed independently and given a zero altitude. A
/// point that fails is dropped with a warning, so the output may be shorter
/// than the input.
///
/// Failure to understand either identifier is an error for the whole call.
///
/// ```rust
/// # use seistools_outline::{convert_coordinates, Coord, WGS84};
/// let points = vec![Coord { x: 500_000.0, y: 0.0 }, Coord { x: f64::NAN, y: 0.0 }];
/// let converted = convert_coordinates(&points, "EPSG:32633", WGS84).unwrap();
///
/// // The NaN point is dropped
/// assert_eq!(converted.len(), 1);
/// assert!((converted[0][0] - 15.0).abs() < 1e-9);
/// assert_eq!(converted[0][2], 0.0);
/// ```
pub fn convert_coordinates(
    points: &[Coord<f64>],
    source: &str,
    target: &str,
) -> Result<Vec<[f64; 3]>> {
    let transformer = Transformer::from_crs(source, target)?;
    debug!(
        "Transforming {} points from {} to {}",
        points.len(),
        transformer.source(),
        transformer.target()
    );

    Ok(points
        .iter()
        .filter_map(|p| match transformer.transform(p.x, p.y) {
            Ok((x, y)) => Some([x, y, 0.0]),
            Err(e) => {
                warn!("{e}");
                None
            }
        })
        .collect())
}
