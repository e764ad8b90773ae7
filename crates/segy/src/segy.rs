// crate modules
use crate::error::{Error, Result};
use crate::header::BinaryHeader;

// seistools modules
use seistools_utils::f;

// standard library
use std::collections::BTreeSet;

// external crates
use ndarray::{s, Array1, Array2, Array3};

/// Everything read from a SEG-Y file
///
/// Traces are kept in file order. The inline and crossline numbers are in
/// lockstep with the rows of `traces`, so `inlines[i]` and `crosslines[i]`
/// label `traces.row(i)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Segy {
    /// Decoded textual header, one line per card image
    pub text_header: String,
    /// Binary file header
    pub binary_header: BinaryHeader,
    /// Trace samples, shape `(traces, samples)`
    pub traces: Array2<f32>,
    /// Inline number of each trace
    pub inlines: Array1<i32>,
    /// Crossline number of each trace
    pub crosslines: Array1<i32>,
}

impl Segy {
    /// Number of traces
    pub fn trace_count(&self) -> usize {
        self.traces.nrows()
    }

    /// Number of samples in every trace
    pub fn samples_per_trace(&self) -> usize {
        self.traces.ncols()
    }

    /// Sorted unique inline numbers
    pub fn unique_inlines(&self) -> Vec<i32> {
        unique_sorted(&self.inlines)
    }

    /// Sorted unique crossline numbers
    pub fn unique_crosslines(&self) -> Vec<i32> {
        unique_sorted(&self.crosslines)
    }

    /// Arrange the traces into a dense cube
    ///
    /// The volume is indexed `[sample, crossline, inline]`, with inline and
    /// crossline axes in ascending label order. Every inline/crossline pair
    /// must appear exactly once.
    ///
    /// ```rust, no_run
    /// # use seistools_segy::read_segy;
    /// let segy = read_segy("path/to/cube.sgy", Default::default()).unwrap();
    /// let volume = segy.to_volume().unwrap();
    ///
    /// // Section along the first crossline
    /// let section = volume.slice(ndarray::s![.., 0, ..]);
    /// ```
    pub fn to_volume(&self) -> Result<Array3<f32>> {
        let inlines = self.unique_inlines();
        let crosslines = self.unique_crosslines();

        let expected = inlines.len() * crosslines.len();
        if expected != self.trace_count() {
            return Err(Error::IrregularGeometry(f!(
                "{} inlines x {} crosslines does not match {} traces",
                inlines.len(),
                crosslines.len(),
                self.trace_count()
            )));
        }

        let mut volume = Array3::<f32>::zeros((
            self.samples_per_trace(),
            crosslines.len(),
            inlines.len(),
        ));
        let mut filled = Array2::<bool>::from_elem((crosslines.len(), inlines.len()), false);

        for (i, trace) in self.traces.outer_iter().enumerate() {
            let (il, xl) = (self.inlines[i], self.crosslines[i]);

            // labels come from the same arrays, so lookups always succeed
            let il_idx = inlines.binary_search(&il).unwrap_or_default();
            let xl_idx = crosslines.binary_search(&xl).unwrap_or_default();

            if filled[[xl_idx, il_idx]] {
                return Err(Error::IrregularGeometry(f!(
                    "duplicate trace at inline {il}, crossline {xl}"
                )));
            }
            filled[[xl_idx, il_idx]] = true;

            volume.slice_mut(s![.., xl_idx, il_idx]).assign(&trace);
        }

        Ok(volume)
    }
}

fn unique_sorted(labels: &Array1<i32>) -> Vec<i32> {
    labels
        .iter()
        .copied()
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::SampleFormat;
    use ndarray::array;

    fn segy(traces: Array2<f32>, inlines: Array1<i32>, crosslines: Array1<i32>) -> Segy {
        Segy {
            text_header: String::new(),
            binary_header: BinaryHeader {
                sample_interval: 4000,
                samples_per_trace: traces.ncols() as u16,
                format: SampleFormat::IeeeFloat32,
                revision: 0,
                fixed_length: true,
                extended_headers: 0,
            },
            traces,
            inlines,
            crosslines,
        }
    }

    #[test]
    fn volume_layout() {
        // 2 inlines x 2 crosslines, traces deliberately out of order
        let cube = segy(
            array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]],
            array![11, 10, 11, 10],
            array![20, 20, 21, 21],
        );

        let volume = cube.to_volume().unwrap();
        assert_eq!(volume.shape(), &[2, 2, 2]);

        // inline 10 crossline 20 is the second trace
        assert_eq!(volume.slice(s![.., 0, 0]).to_vec(), vec![3.0, 4.0]);
        // inline 11 crossline 21 is the third trace
        assert_eq!(volume.slice(s![.., 1, 1]).to_vec(), vec![5.0, 6.0]);
    }

    #[test]
    fn irregular_geometry() {
        let missing = segy(
            array![[1.0], [2.0], [3.0]],
            array![1, 1, 2],
            array![1, 2, 1],
        );
        assert!(matches!(missing.to_volume(), Err(Error::IrregularGeometry(_))));

        let duplicate = segy(
            array![[1.0], [2.0], [3.0], [4.0]],
            array![1, 1, 2, 2],
            array![1, 1, 2, 2],
        );
        assert!(matches!(duplicate.to_volume(), Err(Error::IrregularGeometry(_))));
    }
}
