// crate modules
use crate::colormap::{slice_to_rgba, Colormap, DisplayRange};
use crate::error::{Error, Result};

// seistools modules
use seistools_utils::f;

// external crates
use eframe::egui;
use log::debug;
use ndarray::{Array3, ArrayView2, Axis};

/// Axis that the slider moves along, crossline for `[sample, crossline, inline]`
const SLICE_AXIS: Axis = Axis(1);

/// One volume and its cached texture
struct Panel {
    title: String,
    volume: Array3<f32>,
    colormap: Colormap,
    range: DisplayRange,
    texture: Option<egui::TextureHandle>,
}

impl Panel {
    fn new(title: &str, volume: Array3<f32>, colormap: Colormap) -> Result<Self> {
        if volume.is_empty() {
            return Err(Error::EmptyVolume(volume.shape().to_vec()));
        }

        // one range for the whole volume so colours are comparable between slices
        let range = colormap.auto_range(&volume);
        debug!("{title}: shape {:?}, display range {range:?}", volume.shape());

        Ok(Self {
            title: title.to_string(),
            volume,
            colormap,
            range,
            texture: None,
        })
    }

    fn slice(&self, index: usize) -> ArrayView2<f32> {
        self.volume.index_axis(SLICE_AXIS, index)
    }

    /// Texture for the current slice, regenerated after the slider moves
    fn texture(&mut self, ctx: &egui::Context, index: usize) -> egui::TextureHandle {
        if let Some(texture) = &self.texture {
            return texture.clone();
        }

        let slice = self.slice(index);
        let (rows, cols) = slice.dim();
        let rgba = slice_to_rgba(slice, self.colormap, self.range);
        let image = egui::ColorImage::from_rgba_unmultiplied([cols, rows], &rgba);
        let texture = ctx.load_texture(&self.title, image, egui::TextureOptions::NEAREST);

        self.texture = Some(texture.clone());
        texture
    }
}

/// Window showing one or more volumes side by side with a shared slider
///
/// ```rust, no_run
/// # use seistools_viewer::SliceViewer;
/// let volume = ndarray::Array3::<f32>::zeros((100, 20, 30));
/// let viewer = SliceViewer::new(volume).unwrap();
/// viewer.run().unwrap();
/// ```
pub struct SliceViewer {
    panels: Vec<Panel>,
    index: usize,
    n_slices: usize,
}

impl SliceViewer {
    /// Seismic volume on its own
    pub fn new(seismic: Array3<f32>) -> Result<Self> {
        let n_slices = seismic.len_of(SLICE_AXIS);
        Ok(Self {
            panels: vec![Panel::new("Seismic", seismic, Colormap::Seismic)?],
            index: 0,
            n_slices,
        })
    }

    /// Attribute volume to the left of the seismic
    ///
    /// Both volumes must have the same number of slices.
    pub fn pair(attribute: Array3<f32>, seismic: Array3<f32>) -> Result<Self> {
        let n_attribute = attribute.len_of(SLICE_AXIS);
        let n_seismic = seismic.len_of(SLICE_AXIS);
        if n_attribute != n_seismic {
            return Err(Error::SliceCountMismatch {
                attribute: n_attribute,
                seismic: n_seismic,
            });
        }

        Ok(Self {
            panels: vec![
                Panel::new("Attribute", attribute, Colormap::Viridis)?,
                Panel::new("Seismic", seismic, Colormap::Seismic)?,
            ],
            index: 0,
            n_slices: n_seismic,
        })
    }

    /// Currently selected slice
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slices the slider covers
    pub fn slice_count(&self) -> usize {
        self.n_slices
    }

    /// Move to a slice, clamped to the valid range
    pub fn set_index(&mut self, index: usize) {
        let index = index.min(self.n_slices.saturating_sub(1));
        if index != self.index {
            self.index = index;
            self.invalidate();
        }
    }

    /// RGBA buffers of every panel at the current slice
    pub fn render_current(&self) -> Vec<Vec<u8>> {
        self.panels
            .iter()
            .map(|p| slice_to_rgba(p.slice(self.index), p.colormap, p.range))
            .collect()
    }

    fn invalidate(&mut self) {
        for panel in &mut self.panels {
            panel.texture = None;
        }
    }

    /// Open the window and block until it is closed
    pub fn run(self) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("seistools slice viewer")
                .with_inner_size([400.0 * self.panels.len() as f32 + 200.0, 700.0]),
            ..Default::default()
        };

        eframe::run_native(
            "seistools slice viewer",
            options,
            Box::new(|_cc| Ok(Box::new(self))),
        )
        .map_err(|e| Error::WindowError(e.to_string()))
    }
}

impl eframe::App for SliceViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("slice_slider").show(ctx, |ui| {
            let mut index = self.index;
            let max = self.n_slices.saturating_sub(1);
            let response = ui.add(egui::Slider::new(&mut index, 0..=max).text("Slice"));
            if response.changed() {
                self.set_index(index);
            }
        });

        let index = self.index;
        let panels = &mut self.panels;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(panels.len(), |columns| {
                for (ui, panel) in columns.iter_mut().zip(panels.iter_mut()) {
                    ui.heading(f!("{} - Slice {index}", panel.title));
                    let texture = panel.texture(ctx, index);
                    let size = ui.available_size();
                    ui.add(egui::Image::new(&texture).fit_to_exact_size(size));
                }
            });
        });
    }
}

/// Show a seismic volume slice by slice
///
/// Blocks until the window is closed.
pub fn show_volume(seismic: Array3<f32>) -> Result<()> {
    SliceViewer::new(seismic)?.run()
}

/// Show an attribute volume next to the seismic with a shared slider
///
/// Blocks until the window is closed.
pub fn show_volume_pair(attribute: Array3<f32>, seismic: Array3<f32>) -> Result<()> {
    SliceViewer::pair(attribute, seismic)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(shape: (usize, usize, usize)) -> Array3<f32> {
        Array3::from_shape_fn(shape, |(s, x, i)| (s + 10 * x + 100 * i) as f32)
    }

    #[test]
    fn slider_is_clamped() {
        let mut viewer = SliceViewer::new(ramp((4, 3, 2))).unwrap();
        assert_eq!(viewer.slice_count(), 3);

        viewer.set_index(10);
        assert_eq!(viewer.index(), 2);
    }

    #[test]
    fn pair_needs_matching_slices() {
        let result = SliceViewer::pair(ramp((4, 5, 2)), ramp((4, 3, 2)));
        assert!(matches!(
            result,
            Err(Error::SliceCountMismatch {
                attribute: 5,
                seismic: 3
            })
        ));

        let viewer = SliceViewer::pair(ramp((8, 3, 2)), ramp((4, 3, 6))).unwrap();
        let buffers = viewer.render_current();
        assert_eq!(buffers.len(), 2);
        assert_eq!(buffers[0].len(), 8 * 2 * 4);
        assert_eq!(buffers[1].len(), 4 * 6 * 4);
    }

    #[test]
    fn empty_volume_rejected() {
        let result = SliceViewer::new(Array3::zeros((0, 3, 3)));
        assert!(matches!(result, Err(Error::EmptyVolume(_))));
    }
}
