//! Transverse Mercator projection (Snyder 1987, USGS Prof. Paper 1395)
//!
//! Series expansions are accurate to well under a metre within the width of
//! a UTM or Gauss-Krueger zone, which is all they are used for here.

// crate modules
use crate::crs::datum::Ellipsoid;

/// Parameters of one transverse Mercator zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransverseMercator {
    /// Central meridian (degrees)
    pub lon0: f64,
    /// Scale factor on the central meridian
    pub k0: f64,
    /// False easting (m)
    pub false_easting: f64,
    /// False northing (m)
    pub false_northing: f64,
}

impl TransverseMercator {
    /// UTM zone on WGS84, zone numbers `1..=60`
    pub fn utm(zone: u8, north: bool) -> Self {
        Self {
            lon0: f64::from(zone) * 6.0 - 183.0,
            k0: 0.9996,
            false_easting: 500_000.0,
            false_northing: if north { 0.0 } else { 10_000_000.0 },
        }
    }

    /// Gauss-Krueger zone with a zone prefix on the false easting
    ///
    /// - `zone` - zone number, prefixed to the easting as millions of metres
    /// - `lon0` - central meridian of the zone (degrees)
    pub fn gauss_krueger(zone: u32, lon0: f64) -> Self {
        Self {
            lon0,
            k0: 1.0,
            false_easting: f64::from(zone) * 1_000_000.0 + 500_000.0,
            false_northing: 0.0,
        }
    }

    /// Project geodetic `(lon, lat)` in radians to `(easting, northing)`
    pub fn forward(&self, ellipsoid: &Ellipsoid, lon: f64, lat: f64) -> (f64, f64) {
        let e2 = ellipsoid.e2();
        let ep2 = ellipsoid.ep2();

        let (sin_lat, cos_lat, tan_lat) = (lat.sin(), lat.cos(), lat.tan());
        let n = ellipsoid.a / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let t = tan_lat * tan_lat;
        let c = ep2 * cos_lat * cos_lat;
        let a = cos_lat * (lon - self.lon0.to_radians());
        let m = meridional_arc(ellipsoid, lat);

        let a2 = a * a;
        let a4 = a2 * a2;

        // Snyder eq. 8-9
        let easting = self.k0
            * n
            * (a + (1.0 - t + c) * a2 * a / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a4 * a / 120.0)
            + self.false_easting;

        // Snyder eq. 8-10
        let northing = self.k0
            * (m + n
                * tan_lat
                * (a2 / 2.0
                    + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                    + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a4 * a2 / 720.0))
            + self.false_northing;

        (easting, northing)
    }

    /// Unproject `(easting, northing)` to geodetic `(lon, lat)` in radians
    pub fn inverse(&self, ellipsoid: &Ellipsoid, easting: f64, northing: f64) -> (f64, f64) {
        let e2 = ellipsoid.e2();
        let ep2 = ellipsoid.ep2();
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        let x = easting - self.false_easting;
        let y = northing - self.false_northing;

        // footpoint latitude, Snyder eq. 3-24 to 3-26
        let m = y / self.k0;
        let mu = m / (ellipsoid.a * (1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0));
        let r = (1.0 - e2).sqrt();
        let e1 = (1.0 - r) / (1.0 + r);
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let (sin1, cos1, tan1) = (phi1.sin(), phi1.cos(), phi1.tan());
        let c1 = ep2 * cos1 * cos1;
        let t1 = tan1 * tan1;
        let n1 = ellipsoid.a / (1.0 - e2 * sin1 * sin1).sqrt();
        let r1 = ellipsoid.a * (1.0 - e2) / (1.0 - e2 * sin1 * sin1).powf(1.5);
        let d = x / (n1 * self.k0);

        let d2 = d * d;
        let d4 = d2 * d2;

        // Snyder eq. 8-17
        let lat = phi1
            - (n1 * tan1 / r1)
                * (d2 / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d4 / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                        - 252.0 * ep2
                        - 3.0 * c1 * c1)
                        * d4
                        * d2
                        / 720.0);

        // Snyder eq. 8-18
        let lon = self.lon0.to_radians()
            + (d - (1.0 + 2.0 * t1 + c1) * d2 * d / 6.0
                + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1)
                    * d4
                    * d
                    / 120.0)
                / cos1;

        (lon, lat)
    }
}

/// Meridional arc from the equator to latitude `lat` (radians), Snyder eq. 3-21
fn meridional_arc(ellipsoid: &Ellipsoid, lat: f64) -> f64 {
    let e2 = ellipsoid.e2();
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    ellipsoid.a
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * lat
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * lat).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * lat).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * lat).sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
        let diff = (a - b).abs();
        assert!(diff < tol, "{msg}: expected {b}, got {a}, diff {diff}");
    }

    // Madrid, reference values from PROJ:
    //   (-3.7037, 40.4168) <-> EPSG:32630 (440298.94, 4474257.31)
    #[test]
    fn madrid_utm30n_forward() {
        let utm = TransverseMercator::utm(30, true);
        let (e, n) = utm.forward(
            &Ellipsoid::WGS84,
            (-3.7037_f64).to_radians(),
            40.4168_f64.to_radians(),
        );
        assert_close(e, 440_298.94, 0.05, "easting");
        assert_close(n, 4_474_257.31, 0.05, "northing");
    }

    #[test]
    fn madrid_utm30n_inverse() {
        let utm = TransverseMercator::utm(30, true);
        let (lon, lat) = utm.inverse(&Ellipsoid::WGS84, 440_298.94, 4_474_257.31);
        assert_close(lon.to_degrees(), -3.7037, 1e-6, "longitude");
        assert_close(lat.to_degrees(), 40.4168, 1e-6, "latitude");
    }

    #[test]
    fn utm_central_meridians() {
        assert_eq!(TransverseMercator::utm(1, true).lon0, -177.0);
        assert_eq!(TransverseMercator::utm(30, true).lon0, -3.0);
        assert_eq!(TransverseMercator::utm(60, false).lon0, 177.0);
        assert_eq!(TransverseMercator::utm(60, false).false_northing, 10_000_000.0);
    }

    #[test]
    fn krassowsky_round_trip_far_north() {
        let gk = TransverseMercator::gauss_krueger(15, 87.0);
        let (lon, lat) = (83.5_f64.to_radians(), 67.8_f64.to_radians());
        let (e, n) = gk.forward(&Ellipsoid::KRASSOWSKY_1940, lon, lat);
        let (lon2, lat2) = gk.inverse(&Ellipsoid::KRASSOWSKY_1940, e, n);
        assert_close(lon2.to_degrees(), 83.5, 1e-6, "longitude");
        assert_close(lat2.to_degrees(), 67.8, 1e-6, "latitude");
    }
}
