//! Ellipsoids, datums, and geocentric datum shifts

// external crates
use nalgebra::{Matrix3, Vector3};

/// Arc-seconds to radians
const ARCSEC: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Reference ellipsoid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (m)
    pub a: f64,
    /// Inverse flattening
    pub inv_f: f64,
}

impl Ellipsoid {
    /// World Geodetic System 1984
    pub const WGS84: Self = Self {
        a: 6_378_137.0,
        inv_f: 298.257_223_563,
    };

    /// Bessel 1841, used by DHDN
    pub const BESSEL_1841: Self = Self {
        a: 6_377_397.155,
        inv_f: 299.152_812_8,
    };

    /// Krassowsky 1940, used by Pulkovo 1942
    pub const KRASSOWSKY_1940: Self = Self {
        a: 6_378_245.0,
        inv_f: 298.3,
    };

    /// Eccentricity squared
    pub fn e2(&self) -> f64 {
        let f = 1.0 / self.inv_f;
        2.0 * f - f * f
    }

    /// Second eccentricity squared
    pub fn ep2(&self) -> f64 {
        let e2 = self.e2();
        e2 / (1.0 - e2)
    }

    /// Radius of curvature in the prime vertical at latitude `lat` (radians)
    pub fn prime_vertical_radius(&self, lat: f64) -> f64 {
        self.a / (1.0 - self.e2() * lat.sin().powi(2)).sqrt()
    }

    /// Geodetic (radians, zero height) to geocentric cartesian (m)
    pub fn to_geocentric(&self, lon: f64, lat: f64) -> Vector3<f64> {
        let n = self.prime_vertical_radius(lat);
        Vector3::new(
            n * lat.cos() * lon.cos(),
            n * lat.cos() * lon.sin(),
            n * (1.0 - self.e2()) * lat.sin(),
        )
    }

    /// Geocentric cartesian (m) to geodetic `(lon, lat)` in radians
    ///
    /// Fixed-point iteration on latitude, which converges to well below a
    /// millimetre in a handful of steps for points near the surface.
    pub fn to_geodetic(&self, xyz: &Vector3<f64>) -> (f64, f64) {
        let e2 = self.e2();
        let p = xyz.x.hypot(xyz.y);
        let lon = xyz.y.atan2(xyz.x);

        let mut lat = xyz.z.atan2(p * (1.0 - e2));
        for _ in 0..10 {
            let n = self.prime_vertical_radius(lat);
            let h = p / lat.cos() - n;
            lat = xyz.z.atan2(p * (1.0 - e2 * n / (n + h)));
        }

        (lon, lat)
    }
}

/// Seven parameter Helmert transform to WGS84 (position vector convention)
///
/// Translations in metres, rotations in arc-seconds, scale in ppm. This is
/// the same convention as the PROJ `+towgs84` parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Helmert {
    pub tx: f64,
    pub ty: f64,
    pub tz: f64,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    pub ds: f64,
}

impl Helmert {
    fn translation(&self) -> Vector3<f64> {
        Vector3::new(self.tx, self.ty, self.tz)
    }

    /// Scaled rotation matrix `(1 + ds) * R`
    fn matrix(&self) -> Matrix3<f64> {
        let (rx, ry, rz) = (self.rx * ARCSEC, self.ry * ARCSEC, self.rz * ARCSEC);
        let rotation = Matrix3::new(
            1.0, -rz, ry, //
            rz, 1.0, -rx, //
            -ry, rx, 1.0,
        );
        rotation * (1.0 + self.ds * 1e-6)
    }

    /// Geocentric coordinates on the local datum to WGS84
    pub fn to_wgs84(&self, xyz: &Vector3<f64>) -> Vector3<f64> {
        self.translation() + self.matrix() * xyz
    }

    /// Geocentric WGS84 coordinates back to the local datum
    ///
    /// Exact inverse of [Helmert::to_wgs84()], not the usual sign flip
    /// approximation.
    pub fn from_wgs84(&self, xyz: &Vector3<f64>) -> Option<Vector3<f64>> {
        let inverse = self.matrix().try_inverse()?;
        Some(inverse * (xyz - self.translation()))
    }
}

/// Geodetic datum, an ellipsoid with its link to WGS84
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    /// Common name of the datum
    pub name: &'static str,
    /// Reference ellipsoid
    pub ellipsoid: Ellipsoid,
    /// Shift to WGS84, `None` for WGS84 itself
    pub to_wgs84: Option<Helmert>,
}

impl Datum {
    /// World Geodetic System 1984
    pub const WGS84: Self = Self {
        name: "WGS 84",
        ellipsoid: Ellipsoid::WGS84,
        to_wgs84: None,
    };

    /// Deutsches Hauptdreiecksnetz
    pub const DHDN: Self = Self {
        name: "DHDN",
        ellipsoid: Ellipsoid::BESSEL_1841,
        to_wgs84: Some(Helmert {
            tx: 598.1,
            ty: 73.7,
            tz: 418.2,
            rx: 0.202,
            ry: 0.045,
            rz: -2.455,
            ds: 6.7,
        }),
    };

    /// Pulkovo 1942
    pub const PULKOVO_1942: Self = Self {
        name: "Pulkovo 1942",
        ellipsoid: Ellipsoid::KRASSOWSKY_1940,
        to_wgs84: Some(Helmert {
            tx: 23.92,
            ty: -141.27,
            tz: -80.9,
            rx: 0.0,
            ry: 0.35,
            rz: 0.82,
            ds: -0.12,
        }),
    };

    /// Geodetic position on this datum to geocentric WGS84
    pub fn geodetic_to_wgs84(&self, lon: f64, lat: f64) -> Vector3<f64> {
        let xyz = self.ellipsoid.to_geocentric(lon, lat);
        match &self.to_wgs84 {
            Some(helmert) => helmert.to_wgs84(&xyz),
            None => xyz,
        }
    }

    /// Geocentric WGS84 to a geodetic position on this datum
    pub fn wgs84_to_geodetic(&self, xyz: &Vector3<f64>) -> Option<(f64, f64)> {
        let local = match &self.to_wgs84 {
            Some(helmert) => helmert.from_wgs84(xyz)?,
            None => *xyz,
        };
        Some(self.ellipsoid.to_geodetic(&local))
    }
}
