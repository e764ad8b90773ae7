// crate modules
use crate::error::{Error, Result};

// external crates
use geo::Coord;
use itertools::Itertools;

/// Default rounding tolerance for duplicate removal, in coordinate units
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Remove duplicate or very close points
///
/// Every coordinate is rounded to the nearest multiple of `tolerance`, and
/// only the first point seen for each rounded position is kept. The order of
/// the surviving points follows the input.
///
/// An empty input is returned as-is. The tolerance must be a positive finite
/// number.
///
/// ```rust
/// # use seistools_outline::{remove_duplicate_points, Coord, DEFAULT_TOLERANCE};
/// let points = vec![
///     Coord { x: 0.0, y: 0.0 },
///     Coord { x: 0.004, y: -0.001 },  // rounds onto (0.0, 0.0)
///     Coord { x: 5.0, y: 5.0 },
/// ];
/// let unique = remove_duplicate_points(&points, DEFAULT_TOLERANCE).unwrap();
/// assert_eq!(unique.len(), 2);
/// ```
pub fn remove_duplicate_points(points: &[Coord<f64>], tolerance: f64) -> Result<Vec<Coord<f64>>> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(Error::InvalidTolerance(tolerance));
    }

    Ok(points
        .iter()
        .copied()
        .unique_by(|p| rounded_key(p, tolerance))
        .collect())
}

/// Grid cell index of a point at the given tolerance
fn rounded_key(point: &Coord<f64>, tolerance: f64) -> (i64, i64) {
    // float to int casts saturate
    (
        (point.x / tolerance).round() as i64,
        (point.y / tolerance).round() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(values: &[(f64, f64)]) -> Vec<Coord<f64>> {
        values.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    #[test]
    fn keeps_first_seen_order() {
        let points = coords(&[(3.0, 3.0), (1.0, 1.0), (3.001, 2.999), (2.0, 2.0)]);
        let unique = remove_duplicate_points(&points, 0.01).unwrap();
        assert_eq!(unique, coords(&[(3.0, 3.0), (1.0, 1.0), (2.0, 2.0)]));
    }

    #[test]
    fn empty_input_unchanged() {
        let unique = remove_duplicate_points(&[], DEFAULT_TOLERANCE).unwrap();
        assert!(unique.is_empty());
    }

    #[test]
    fn coarse_tolerance_merges_more() {
        let points = coords(&[(0.0, 0.0), (0.4, 0.0), (0.6, 0.0)]);
        assert_eq!(remove_duplicate_points(&points, 0.01).unwrap().len(), 3);
        assert_eq!(remove_duplicate_points(&points, 1.0).unwrap().len(), 2);
    }

    #[test]
    fn bad_tolerance_rejected() {
        let points = coords(&[(0.0, 0.0)]);
        assert!(remove_duplicate_points(&points, 0.0).is_err());
        assert!(remove_duplicate_points(&points, -1.0).is_err());
        assert!(remove_duplicate_points(&points, f64::NAN).is_err());
    }
}
