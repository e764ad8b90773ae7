//! Reading survey coordinates from plain text
//!
//! The expected format is one `x y` pair per line, separated by any amount of
//! whitespace. Anything after the first two values is ignored, so files with
//! an elevation or label column can be used directly.
//!
//! ```text
//! # comment lines are skipped
//! 4468503.12 5333780.55
//! 4468611.00 5333702.10  12.5  extra columns ignored
//!
//! not a coordinate, also skipped
//! ```
//!
//! Lines that do not start with two finite numbers are skipped without error.
//! An empty result is not an error either, the caller decides how many points
//! are enough.

mod parsers;

// re-exports for clean API + documentation
#[doc(inline)]
pub use parsers::{is_comment, parse_coordinate_line};

// crate modules
use crate::error::Result;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// external crates
use geo::Coord;
use log::trace;

/// Read every well formed coordinate pair in a text file
///
/// Returns the points in file order.
///
/// - `path` - Path to the text file, can be [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use seistools_outline::read_coordinates;
/// let points = read_coordinates("path/to/points.txt").unwrap();
/// println!("Read {} points", points.len());
/// ```
pub fn read_coordinates<P: AsRef<Path>>(path: P) -> Result<Vec<Coord<f64>>> {
    let reader = BufReader::new(File::open(path)?);
    parse_coordinates(reader)
}

/// Parse coordinate pairs from any buffered reader
///
/// Same rules as [read_coordinates()], useful for in-memory data.
///
/// ```rust
/// # use seistools_outline::parse_coordinates;
/// let text = "# header\n1.0 2.0\nbroken\n3.0\t4.0 99\n";
/// let points = parse_coordinates(text.as_bytes()).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!((points[1].x, points[1].y), (3.0, 4.0));
/// ```
pub fn parse_coordinates<R: BufRead>(reader: R) -> Result<Vec<Coord<f64>>> {
    let mut points = Vec::new();

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || is_comment(line) {
            continue;
        }

        match parse_coordinate_line(line) {
            Some((x, y)) => points.push(Coord { x, y }),
            None => trace!("Skipping malformed line {}: \"{line}\"", n + 1),
        }
    }

    Ok(points)
}
