//! Write operations for KML overlays

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::kml::PolygonStyle;

// seistools modules
use seistools_utils::f;

// external crates
use log::info;

/// A single polygon placemark
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonOverlay {
    /// Placemark name shown in the viewer
    pub name: String,
    /// Free text description, may contain newlines
    pub description: String,
    /// Fill and outline style
    pub style: PolygonStyle,
    /// Outer boundary as `[x, y, altitude]`
    pub coordinates: Vec<[f64; 3]>,
}

impl PolygonOverlay {
    /// Outline overlay with the standard name and description
    ///
    /// - `points` - final boundary points
    /// - `original_count` - number of points in the input file
    /// - `is_latlon` - true if `points` are WGS84 longitude/latitude
    ///
    /// ```rust
    /// # use seistools_outline::PolygonOverlay;
    /// let points = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
    /// let overlay = PolygonOverlay::outline(points, 120, true);
    ///
    /// assert_eq!(overlay.name, "Points Outline (120 points)");
    /// assert_eq!(
    ///     overlay.description,
    ///     "Outline polygon created from 120 input points\nCRS: WGS84 (lat/lon)\nTotal outline points: 4"
    /// );
    /// ```
    pub fn outline(points: Vec<[f64; 3]>, original_count: usize, is_latlon: bool) -> Self {
        let crs_info = if is_latlon {
            "WGS84 (lat/lon)"
        } else {
            "Original Projected CRS"
        };

        Self {
            name: f!("Points Outline ({original_count} points)"),
            description: f!(
                "Outline polygon created from {original_count} input points\nCRS: {crs_info}\nTotal outline points: {}",
                points.len()
            ),
            style: PolygonStyle::default(),
            coordinates: points,
        }
    }

    /// Replace the default style
    pub fn with_style(mut self, style: PolygonStyle) -> Self {
        self.style = style;
        self
    }
}

/// Create a KML file with the outline polygon
///
/// Convenience for [PolygonOverlay::outline()] followed by [write_overlay()].
///
/// ```rust, no_run
/// # use seistools_outline::write_kml;
/// let points = vec![[10.0, 50.0, 0.0], [11.0, 50.0, 0.0], [11.0, 51.0, 0.0], [10.0, 50.0, 0.0]];
/// write_kml(&points, "outline.kml", 57, true).unwrap();
/// ```
pub fn write_kml<P: AsRef<Path>>(
    points: &[[f64; 3]],
    path: P,
    original_count: usize,
    is_latlon: bool,
) -> Result<()> {
    let overlay = PolygonOverlay::outline(points.to_vec(), original_count, is_latlon);
    write_overlay(&overlay, path)
}

/// Write a [PolygonOverlay] to a KML file
pub fn write_overlay<P: AsRef<Path>>(overlay: &PolygonOverlay, path: P) -> Result<()> {
    let mut writer = init_writer(&path)?;
    write_document(overlay, &mut writer)?;
    writer.flush()?;
    info!("KML file saved as: {}", path.as_ref().display());
    Ok(())
}

/// Serialise the full KML document
fn write_document<W: Write>(overlay: &PolygonOverlay, writer: &mut W) -> Result<()> {
    let style = &overlay.style;

    writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(writer, r#"<kml xmlns="http://www.opengis.net/kml/2.2">"#)?;
    writeln!(writer, "  <Document>")?;
    writeln!(writer, "    <Placemark>")?;
    writeln!(writer, "      <name>{}</name>", escape(&overlay.name))?;
    writeln!(
        writer,
        "      <description>{}</description>",
        escape(&overlay.description)
    )?;

    // style inlined with the placemark
    writeln!(writer, "      <Style>")?;
    writeln!(writer, "        <LineStyle>")?;
    writeln!(writer, "          <color>{}</color>", style.line.to_kml())?;
    writeln!(writer, "          <width>{}</width>", style.line_width)?;
    writeln!(writer, "        </LineStyle>")?;
    writeln!(writer, "        <PolyStyle>")?;
    writeln!(writer, "          <color>{}</color>", style.fill.to_kml())?;
    writeln!(writer, "        </PolyStyle>")?;
    writeln!(writer, "      </Style>")?;

    // boundary, KML wants lon,lat,alt tuples separated by whitespace
    let coordinates = overlay
        .coordinates
        .iter()
        .map(|[x, y, z]| f!("{x},{y},{z}"))
        .collect::<Vec<String>>()
        .join(" ");

    writeln!(writer, "      <Polygon>")?;
    writeln!(writer, "        <outerBoundaryIs>")?;
    writeln!(writer, "          <LinearRing>")?;
    writeln!(writer, "            <coordinates>{coordinates}</coordinates>")?;
    writeln!(writer, "          </LinearRing>")?;
    writeln!(writer, "        </outerBoundaryIs>")?;
    writeln!(writer, "      </Polygon>")?;
    writeln!(writer, "    </Placemark>")?;
    writeln!(writer, "  </Document>")?;
    writeln!(writer, "</kml>")?;

    Ok(())
}

/// Escape the XML special characters in text content
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_markup() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("plain\ntext"), "plain\ntext");
    }

    #[test]
    fn document_structure() {
        let overlay = PolygonOverlay::outline(
            vec![[1.5, 2.5, 0.0], [3.0, 2.5, 0.0], [3.0, 4.0, 0.0], [1.5, 2.5, 0.0]],
            10,
            false,
        );

        let mut buffer = Vec::new();
        write_document(&overlay, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("<?xml"));
        assert!(text.contains("<name>Points Outline (10 points)</name>"));
        assert!(text.contains("CRS: Original Projected CRS"));
        assert!(text.contains("<color>ff0000ff</color>"));
        assert!(text.contains("<color>64ff0000</color>"));
        assert!(text.contains("<width>3</width>"));
        assert!(text.contains("<coordinates>1.5,2.5,0 3,2.5,0 3,4,0 1.5,2.5,0</coordinates>"));
        assert!(text.trim_end().ends_with("</kml>"));
    }
}
