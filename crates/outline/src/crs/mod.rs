//! Coordinate reference systems
//!
//! A small registry of the systems that survey coordinates are
//! actually delivered in. Everything is pure Rust, there is no dependency on
//! libproj.
//!
//! | EPSG              | System                                   |
//! | ----------------- | ---------------------------------------- |
//! | 4326              | WGS 84 geographic                        |
//! | 4314              | DHDN geographic                          |
//! | 4284              | Pulkovo 1942 geographic                  |
//! | 32601 - 32660     | WGS 84 / UTM zone 1N - 60N               |
//! | 32701 - 32760     | WGS 84 / UTM zone 1S - 60S               |
//! | 31466 - 31469     | DHDN / 3-degree Gauss-Krueger zone 2 - 5 |
//! | 28404 - 28432     | Pulkovo 1942 / Gauss-Krueger zone 4 - 32 |
//!
//! Identifiers are parsed from strings such as `EPSG:31468`, `epsg:4326`, or
//! a bare `32644`.
//!
//! ```rust
//! # use seistools_outline::Crs;
//! let crs: Crs = "EPSG:31468".parse().unwrap();
//! assert_eq!(crs.name, "DHDN / 3-degree Gauss-Kruger zone 4");
//! assert!(!crs.is_geographic());
//!
//! // Well formed but unknown codes are an error
//! assert!("EPSG:3857".parse::<Crs>().is_err());
//! ```

mod datum;
mod projection;

#[doc(inline)]
pub use datum::{Datum, Ellipsoid, Helmert};

#[doc(inline)]
pub use projection::TransverseMercator;

// crate modules
use crate::error::{Error, Result};

// seistools modules
use seistools_utils::f;

// standard library
use std::str::FromStr;

/// How coordinates relate to the datum
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Longitude and latitude in degrees
    Geographic,
    /// Projected easting and northing in metres
    TransverseMercator(TransverseMercator),
}

/// A coordinate reference system identified by its EPSG code
#[derive(Debug, Clone, PartialEq)]
pub struct Crs {
    /// EPSG code
    pub epsg: u32,
    /// Human readable name
    pub name: String,
    /// Geodetic datum
    pub datum: Datum,
    /// Projection applied on top of the datum
    pub projection: Projection,
}

impl Crs {
    /// Look up a supported system by EPSG code
    pub fn from_epsg(code: u32) -> Result<Self> {
        let crs = match code {
            4326 => Self::geographic(code, "WGS 84", Datum::WGS84),
            4314 => Self::geographic(code, "DHDN", Datum::DHDN),
            4284 => Self::geographic(code, "Pulkovo 1942", Datum::PULKOVO_1942),
            32601..=32660 => Self::utm((code - 32600) as u8, true)?,
            32701..=32760 => Self::utm((code - 32700) as u8, false)?,
            31466..=31469 => {
                let zone = code - 31464;
                Self {
                    epsg: code,
                    name: f!("DHDN / 3-degree Gauss-Kruger zone {zone}"),
                    datum: Datum::DHDN,
                    projection: Projection::TransverseMercator(TransverseMercator::gauss_krueger(
                        zone,
                        f64::from(zone) * 3.0,
                    )),
                }
            }
            28404..=28432 => {
                let zone = code - 28400;
                Self {
                    epsg: code,
                    name: f!("Pulkovo 1942 / Gauss-Kruger zone {zone}"),
                    datum: Datum::PULKOVO_1942,
                    projection: Projection::TransverseMercator(TransverseMercator::gauss_krueger(
                        zone,
                        f64::from(zone) * 6.0 - 3.0,
                    )),
                }
            }
            _ => return Err(Error::UnsupportedCrs(f!("EPSG:{code}"))),
        };
        Ok(crs)
    }

    /// WGS 84 / UTM for a zone number and hemisphere
    ///
    /// ```rust
    /// # use seistools_outline::Crs;
    /// assert_eq!(Crs::utm(44, true).unwrap().epsg, 32644);
    /// assert_eq!(Crs::utm(7, false).unwrap().epsg, 32707);
    /// assert!(Crs::utm(61, true).is_err());
    /// ```
    pub fn utm(zone: u8, north: bool) -> Result<Self> {
        if !(1..=60).contains(&zone) {
            return Err(Error::InvalidUtmZone(zone));
        }

        let (base, hemisphere) = if north { (32600, 'N') } else { (32700, 'S') };
        Ok(Self {
            epsg: base + u32::from(zone),
            name: f!("WGS 84 / UTM zone {zone}{hemisphere}"),
            datum: Datum::WGS84,
            projection: Projection::TransverseMercator(TransverseMercator::utm(zone, north)),
        })
    }

    /// WGS 84 longitude/latitude
    pub fn wgs84() -> Self {
        Self::geographic(4326, "WGS 84", Datum::WGS84)
    }

    fn geographic(epsg: u32, name: &str, datum: Datum) -> Self {
        Self {
            epsg,
            name: name.to_string(),
            datum,
            projection: Projection::Geographic,
        }
    }

    /// True for longitude/latitude systems
    pub fn is_geographic(&self) -> bool {
        self.projection == Projection::Geographic
    }

    /// Identifier in `EPSG:<code>` form
    pub fn identifier(&self) -> String {
        f!("EPSG:{}", self.epsg)
    }

    /// Native coordinates to geodetic `(lon, lat)` in radians on this datum
    pub(crate) fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        match &self.projection {
            Projection::Geographic => (x.to_radians(), y.to_radians()),
            Projection::TransverseMercator(tm) => tm.inverse(&self.datum.ellipsoid, x, y),
        }
    }

    /// Geodetic `(lon, lat)` in radians on this datum to native coordinates
    pub(crate) fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        match &self.projection {
            Projection::Geographic => (lon.to_degrees(), lat.to_degrees()),
            Projection::TransverseMercator(tm) => tm.forward(&self.datum.ellipsoid, lon, lat),
        }
    }
}

impl FromStr for Crs {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let code = match trimmed.split_once(':') {
            Some((authority, code)) if authority.eq_ignore_ascii_case("epsg") => code,
            Some(_) => return Err(Error::InvalidCrs(s.to_string())),
            None => trimmed,
        };

        let code = code
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidCrs(s.to_string()))?;

        Self::from_epsg(code)
    }
}

impl std::fmt::Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.identifier(), self.name)
    }
}
