//! Outline polygons from point sets
//!
//! The outline is a convex hull wherever possible. Real survey files are not
//! always kind though, and a set of points along a single line has no area to
//! wrap. The builder degrades through a fixed chain:
//!
//! 1. Quickhull on the raw points
//! 2. Graham scan on normalised and joggled points, mapped back to the input
//! 3. Axis-aligned bounding box of the points
//!
//! The step that produced the result is kept as the [HullMethod] so that a
//! bounding box is never mistaken for a real hull.

// crate modules
use crate::dedup::{remove_duplicate_points, DEFAULT_TOLERANCE};
use crate::error::{Error, Result};

// seistools modules
use seistools_utils::SliceExt;

// standard library
use std::collections::HashMap;

// external crates
use geo::algorithm::convex_hull::graham_hull;
use geo::{Area, ConvexHull, Coord, LineString, MultiPoint, Point, Polygon};
use log::{debug, warn};

/// Minimum number of points that can form a polygon
const MIN_POINTS: usize = 3;

/// Joggle amplitude in the normalised unit box
const JOGGLE: f64 = 1e-7;

/// Strategy that produced an [Outline]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HullMethod {
    /// Standard convex hull
    ConvexHull,
    /// Convex hull of normalised and joggled points
    RelaxedHull,
    /// Axis-aligned bounding box, hull information is lost
    BoundingBox,
}

impl std::fmt::Display for HullMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            HullMethod::ConvexHull => "convex hull",
            HullMethod::RelaxedHull => "relaxed convex hull",
            HullMethod::BoundingBox => "bounding box",
        };
        write!(f, "{s}")
    }
}

/// Closed outline ring around a point set
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Ring vertices, the last point always repeats the first
    pub points: Vec<Coord<f64>>,
    /// How the outline was generated
    pub method: HullMethod,
}

impl Outline {
    /// Close an open ring of vertices
    fn close(mut vertices: Vec<Coord<f64>>, method: HullMethod) -> Self {
        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }
        Self {
            points: vertices,
            method,
        }
    }

    /// Number of ring points, including the closing point
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True for an empty ring
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ring vertices without the closing point
    pub fn vertices(&self) -> &[Coord<f64>] {
        match self.points.split_last() {
            Some((_, open)) => open,
            None => &[],
        }
    }

    /// Check that the first and last points are identical
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Ring points with a zero altitude, ready for export
    pub fn to_xyz(&self) -> Vec<[f64; 3]> {
        self.points.iter().map(|p| [p.x, p.y, 0.0]).collect()
    }
}

/// Create a closed outline polygon from a point set
///
/// Duplicates are removed with the [DEFAULT_TOLERANCE] before the hull is
/// computed, and at least 3 unique points are required.
///
/// ```rust
/// # use seistools_outline::{build_outline, Coord, HullMethod};
/// let points: Vec<Coord<f64>> = [(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (1.0, 1.0)]
///     .iter()
///     .map(|&(x, y)| Coord { x, y })
///     .collect();
///
/// let outline = build_outline(&points).unwrap();
/// assert_eq!(outline.method, HullMethod::ConvexHull);
/// assert_eq!(outline.len(), 4); // triangle + closing point
/// assert!(outline.is_closed());
/// ```
pub fn build_outline(points: &[Coord<f64>]) -> Result<Outline> {
    if points.len() < MIN_POINTS {
        return Err(Error::TooFewPoints {
            found: points.len(),
            minimum: MIN_POINTS,
        });
    }

    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(Error::NonFiniteCoordinate { index });
    }

    let points = remove_duplicate_points(points, DEFAULT_TOLERANCE)?;
    if points.len() < MIN_POINTS {
        return Err(Error::TooFewUniquePoints {
            found: points.len(),
            minimum: MIN_POINTS,
        });
    }

    match standard_hull(&points) {
        Ok(vertices) => return Ok(Outline::close(vertices, HullMethod::ConvexHull)),
        Err(reason) => warn!("Convex hull failed: {reason}. Trying relaxed hull..."),
    }

    match relaxed_hull(&points) {
        Ok(vertices) => return Ok(Outline::close(vertices, HullMethod::RelaxedHull)),
        Err(reason) => warn!("Relaxed hull failed: {reason}. Using bounding box..."),
    }

    Ok(Outline::close(bounding_box(&points)?, HullMethod::BoundingBox))
}

/// Four corners of the axis-aligned bounding box
///
/// Corners are ordered `(min_x, min_y)`, `(max_x, min_y)`, `(max_x, max_y)`,
/// `(min_x, max_y)`, and the ring is left open.
pub fn bounding_box(points: &[Coord<f64>]) -> Result<Vec<Coord<f64>>> {
    let xs = points.iter().map(|p| p.x).collect::<Vec<f64>>();
    let ys = points.iter().map(|p| p.y).collect::<Vec<f64>>();

    let (min_x, max_x) = xs.try_extent()?;
    let (min_y, max_y) = ys.try_extent()?;

    Ok(vec![
        Coord { x: min_x, y: min_y },
        Coord { x: max_x, y: min_y },
        Coord { x: max_x, y: max_y },
        Coord { x: min_x, y: max_y },
    ])
}

/// Quickhull, rejecting anything without area
fn standard_hull(points: &[Coord<f64>]) -> core::result::Result<Vec<Coord<f64>>, String> {
    let multi_point: MultiPoint<f64> = points.iter().map(|&c| Point::from(c)).collect();
    let hull: Polygon<f64> = multi_point.convex_hull();

    if hull.unsigned_area() <= 0.0 {
        return Err("initial simplex is flat".to_string());
    }

    let vertices = open_ring(hull.exterior());
    check_distinct(&vertices)?;
    Ok(vertices)
}

/// Graham scan on normalised, joggled copies of the points
///
/// The hull is found in a unit box where every point has been nudged by a
/// tiny deterministic offset, so exactly collinear input still has a hull.
/// The hull vertices are then looked up again in the original points.
fn relaxed_hull(points: &[Coord<f64>]) -> core::result::Result<Vec<Coord<f64>>, String> {
    let [min_x, min_y, span_x, span_y] = normalisation(points)?;

    let joggled = points
        .iter()
        .enumerate()
        .map(|(i, p)| Coord {
            x: (p.x - min_x) / span_x + JOGGLE * jitter(2 * i as u64),
            y: (p.y - min_y) / span_y + JOGGLE * jitter(2 * i as u64 + 1),
        })
        .collect::<Vec<Coord<f64>>>();

    // graham_hull reorders its input, so remember where each point came from
    let lookup = joggled
        .iter()
        .enumerate()
        .map(|(i, c)| ((c.x.to_bits(), c.y.to_bits()), i))
        .collect::<HashMap<(u64, u64), usize>>();

    let mut joggled = joggled;
    let hull = graham_hull(&mut joggled, false);

    let vertices = open_ring(&hull)
        .iter()
        .map(|c| {
            lookup
                .get(&(c.x.to_bits(), c.y.to_bits()))
                .map(|&i| points[i])
                .ok_or_else(|| "hull vertex not found in input".to_string())
        })
        .collect::<core::result::Result<Vec<Coord<f64>>, String>>()?;

    debug!("Relaxed hull kept {} of {} points", vertices.len(), points.len());
    check_distinct(&vertices)?;
    Ok(vertices)
}

/// Offsets and spans that map the points into the unit box
fn normalisation(points: &[Coord<f64>]) -> core::result::Result<[f64; 4], String> {
    let xs = points.iter().map(|p| p.x).collect::<Vec<f64>>();
    let ys = points.iter().map(|p| p.y).collect::<Vec<f64>>();

    let (min_x, max_x) = xs.try_extent().map_err(|e| e.to_string())?;
    let (min_y, max_y) = ys.try_extent().map_err(|e| e.to_string())?;

    // a zero span means all points share that ordinate, leave it unscaled
    let span = |lo: f64, hi: f64| if hi > lo { hi - lo } else { 1.0 };
    Ok([min_x, min_y, span(min_x, max_x), span(min_y, max_y)])
}

/// Deterministic pseudo-random value in [-1, 1] (splitmix64)
fn jitter(seed: u64) -> f64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64 * 2.0 - 1.0
}

/// Ring coordinates without the repeated closing point
fn open_ring(ring: &LineString<f64>) -> Vec<Coord<f64>> {
    let mut coords = ring.0.clone();
    if coords.len() > 1 && coords.first() == coords.last() {
        coords.pop();
    }
    coords
}

/// At least three distinct vertices are needed for a ring
fn check_distinct(vertices: &[Coord<f64>]) -> core::result::Result<(), String> {
    let mut distinct: Vec<Coord<f64>> = Vec::with_capacity(vertices.len());
    for v in vertices {
        if !distinct.contains(v) {
            distinct.push(*v);
        }
    }

    if distinct.len() < MIN_POINTS {
        return Err(format!("only {} distinct hull vertices", distinct.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(values: &[(f64, f64)]) -> Vec<Coord<f64>> {
        values.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    #[test]
    fn jitter_is_bounded_and_repeatable() {
        for seed in 0..1000 {
            let j = jitter(seed);
            assert!((-1.0..=1.0).contains(&j));
            assert_eq!(j, jitter(seed));
        }
        assert_ne!(jitter(0), jitter(1));
    }

    #[test]
    fn flat_points_fail_standard_hull() {
        let line = coords(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        assert!(standard_hull(&line).is_err());
    }

    #[test]
    fn relaxed_hull_wraps_collinear_points() {
        let line = coords(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0), (3.0, 5.0)]);
        let vertices = relaxed_hull(&line).unwrap();
        assert!(vertices.len() >= 3);
        assert!(vertices.iter().all(|v| line.contains(v)));
    }

    #[test]
    fn collinear_input_falls_back_to_relaxed() {
        let line = coords(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]);
        let outline = build_outline(&line).unwrap();
        assert_eq!(outline.method, HullMethod::RelaxedHull);
        assert!(outline.is_closed());
    }

    #[test]
    fn bounding_box_corner_order() {
        let points = coords(&[(2.0, -1.0), (-3.0, 4.0), (0.0, 0.0)]);
        assert_eq!(
            bounding_box(&points).unwrap(),
            coords(&[(-3.0, -1.0), (2.0, -1.0), (2.0, 4.0), (-3.0, 4.0)])
        );
    }

    #[test]
    fn non_finite_rejected() {
        let points = coords(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 1.0)]);
        assert!(matches!(
            build_outline(&points),
            Err(Error::NonFiniteCoordinate { index: 1 })
        ));
    }
}
