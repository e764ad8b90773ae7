// seistools modules
use seistools_utils::f;

/// RGBA colour written in the KML `aabbggrr` hex order
///
/// ```rust
/// # use seistools_outline::KmlColor;
/// assert_eq!(KmlColor::RED.to_kml(), "ff0000ff");
/// assert_eq!(KmlColor::BLUE.with_alpha(100).to_kml(), "64ff0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmlColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl KmlColor {
    pub const RED: Self = Self::opaque(255, 0, 0);
    pub const GREEN: Self = Self::opaque(0, 255, 0);
    pub const BLUE: Self = Self::opaque(0, 0, 255);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    /// Fully opaque colour
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same colour with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Hex string in `aabbggrr` order
    pub fn to_kml(&self) -> String {
        f!("{:02x}{:02x}{:02x}{:02x}", self.a, self.b, self.g, self.r)
    }
}

/// Visual style of an outline polygon
///
/// The default is a translucent blue fill with a 3px red outline.
///
/// The fields are left public for direct use but the module also implements
/// a builder, see [PolygonStyle::builder()].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonStyle {
    /// Polygon fill colour
    pub fill: KmlColor,
    /// Outline colour
    pub line: KmlColor,
    /// Outline width in pixels
    pub line_width: f64,
}

impl PolygonStyle {
    /// Start a [PolygonStyleBuilder] from the default style
    pub fn builder() -> PolygonStyleBuilder {
        PolygonStyleBuilder::default()
    }
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            fill: KmlColor::BLUE.with_alpha(100),
            line: KmlColor::RED,
            line_width: 3.0,
        }
    }
}

/// Builder implementation for [PolygonStyle]
///
/// Any number of parameters can be set through chained calls, anything not
/// set keeps the default.
///
/// ```rust
/// # use seistools_outline::{KmlColor, PolygonStyle};
/// let style = PolygonStyle::builder()
///     .line(KmlColor::WHITE)
///     .line_width(1.5)
///     .build();
///
/// assert_eq!(style.fill, PolygonStyle::default().fill);
/// assert_eq!(style.line_width, 1.5);
/// ```
#[derive(Debug, Default)]
pub struct PolygonStyleBuilder {
    style: PolygonStyle,
}

impl PolygonStyleBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [PolygonStyle]
    pub fn build(self) -> PolygonStyle {
        self.style
    }

    /// Polygon fill colour
    pub fn fill(mut self, color: KmlColor) -> Self {
        self.style.fill = color;
        self
    }

    /// Outline colour
    pub fn line(mut self, color: KmlColor) -> Self {
        self.style.line = color;
        self
    }

    /// Outline width in pixels, negative values are clamped to zero
    pub fn line_width(mut self, width: f64) -> Self {
        self.style.line_width = width.max(0.0);
        self
    }
}
