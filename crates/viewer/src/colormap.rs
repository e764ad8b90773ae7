//! Colormaps and slice rendering
//!
//! Everything here is independent of the window so it can be tested without
//! a display.

// seistools modules
use seistools_utils::SliceExt;

// external crates
use ndarray::{ArrayBase, ArrayView2, Data, Dimension};

/// Transparent pixel used for `NaN` and infinite samples
const NO_DATA: [u8; 4] = [0, 0, 0, 0];

/// Position in `[0, 1]` mapped to an RGB colour
#[derive(Debug, Clone, Copy)]
struct ColorStop {
    t: f64,
    rgb: [u8; 3],
}

const fn stop(t: f64, r: u8, g: u8, b: u8) -> ColorStop {
    ColorStop { t, rgb: [r, g, b] }
}

// dark blue -> blue -> white -> red -> dark red
const SEISMIC_STOPS: &[ColorStop] = &[
    stop(0.00, 0, 0, 77),
    stop(0.25, 0, 0, 255),
    stop(0.50, 255, 255, 255),
    stop(0.75, 255, 0, 0),
    stop(1.00, 128, 0, 0),
];

// purple -> blue -> teal -> green -> yellow
const VIRIDIS_STOPS: &[ColorStop] = &[
    stop(0.00, 68, 1, 84),
    stop(0.25, 59, 82, 139),
    stop(0.50, 33, 145, 140),
    stop(0.75, 94, 201, 98),
    stop(1.00, 253, 231, 37),
];

/// Available colormaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Blue-white-red, for amplitudes centred on zero
    Seismic,
    /// Perceptually uniform purple to yellow, for attributes
    Viridis,
}

impl Colormap {
    /// Colour at normalised position `t`, clamped to `[0, 1]`
    ///
    /// ```rust
    /// # use seistools_viewer::Colormap;
    /// assert_eq!(Colormap::Seismic.evaluate(0.5), [255, 255, 255]);
    /// assert_eq!(Colormap::Viridis.evaluate(2.0), [253, 231, 37]);
    /// ```
    pub fn evaluate(&self, t: f64) -> [u8; 3] {
        let stops = match self {
            Colormap::Seismic => SEISMIC_STOPS,
            Colormap::Viridis => VIRIDIS_STOPS,
        };

        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        for pair in stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.t {
                let s = (t - lo.t) / (hi.t - lo.t);
                let mut rgb = [0u8; 3];
                for (c, value) in rgb.iter_mut().enumerate() {
                    let a = f64::from(lo.rgb[c]);
                    let b = f64::from(hi.rgb[c]);
                    *value = (a + s * (b - a)).round() as u8;
                }
                return rgb;
            }
        }

        stops[stops.len() - 1].rgb
    }

    /// Display range suited to this colormap
    ///
    /// Seismic amplitudes get a range symmetric about zero so that zero is
    /// always white. Attributes use the finite data extent.
    pub fn auto_range<S, D>(&self, values: &ArrayBase<S, D>) -> DisplayRange
    where
        S: Data<Elem = f32>,
        D: Dimension,
    {
        match self {
            Colormap::Seismic => DisplayRange::symmetric(values),
            Colormap::Viridis => DisplayRange::extent(values),
        }
    }
}

/// Values mapped to the two ends of a colormap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRange {
    pub min: f32,
    pub max: f32,
}

impl Default for DisplayRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl DisplayRange {
    /// `[-m, m]` where `m` is the largest finite absolute value
    pub fn symmetric<S, D>(values: &ArrayBase<S, D>) -> Self
    where
        S: Data<Elem = f32>,
        D: Dimension,
    {
        match finite_values(values).finite_abs_max() {
            Ok(m) if m > 0.0 => Self { min: -m, max: m },
            _ => Self { min: -1.0, max: 1.0 },
        }
    }

    /// Finite minimum and maximum, widened if the data are constant
    pub fn extent<S, D>(values: &ArrayBase<S, D>) -> Self
    where
        S: Data<Elem = f32>,
        D: Dimension,
    {
        match finite_values(values).try_extent() {
            Ok((min, max)) if max > min => Self { min, max },
            Ok((min, _)) => Self {
                min,
                max: min + 1.0,
            },
            Err(_) => Self::default(),
        }
    }

    /// Position of `value` within the range, not clamped
    pub fn normalise(&self, value: f32) -> f64 {
        let span = f64::from(self.max) - f64::from(self.min);
        if span.abs() > f64::EPSILON {
            (f64::from(value) - f64::from(self.min)) / span
        } else {
            0.5
        }
    }
}

/// Copy of the finite values, in logical order
fn finite_values<S, D>(values: &ArrayBase<S, D>) -> Vec<f32>
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Render a 2D slice to an RGBA buffer
///
/// The buffer is `rows * cols * 4` bytes in row-major order, ready for
/// `egui::ColorImage::from_rgba_unmultiplied([cols, rows], ..)`. Non-finite
/// samples are transparent.
///
/// ```rust
/// # use seistools_viewer::{slice_to_rgba, Colormap, DisplayRange};
/// let slice = ndarray::array![[-1.0_f32, 0.0], [1.0, f32::NAN]];
/// let range = DisplayRange { min: -1.0, max: 1.0 };
/// let rgba = slice_to_rgba(slice.view(), Colormap::Seismic, range);
///
/// assert_eq!(rgba.len(), 16);
/// assert_eq!(&rgba[4..8], &[255, 255, 255, 255]); // zero is white
/// assert_eq!(&rgba[12..16], &[0, 0, 0, 0]);       // NaN is transparent
/// ```
pub fn slice_to_rgba(slice: ArrayView2<f32>, colormap: Colormap, range: DisplayRange) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(slice.len() * 4);
    for value in slice.iter() {
        if value.is_finite() {
            let [r, g, b] = colormap.evaluate(range.normalise(*value));
            rgba.extend([r, g, b, 255]);
        } else {
            rgba.extend(NO_DATA);
        }
    }
    rgba
}
