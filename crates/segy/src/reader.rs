//! Reading SEG-Y files into memory
//!
//! The simplest way in is [read_segy()], which reads a whole file without a
//! progress bar.
//!
//! ```rust, no_run
//! # use seistools_segy::{read_segy, Endian};
//! let segy = read_segy("path/to/cube.sgy", Endian::Big).unwrap();
//! println!("{} traces of {} samples", segy.trace_count(), segy.samples_per_trace());
//! ```
//!
//! The [SegyReader] gives a little more control.
//!
//! ```rust, no_run
//! # use seistools_segy::{SegyReader, Endian};
//! let mut reader = SegyReader::new();
//! reader.set_endian(Endian::Little);
//! reader.disable_progress(); // disable the progress bar
//!
//! let segy = reader.parse("path/to/cube.sgy").unwrap();
//! ```

// crate modules
use crate::endian::Endian;
use crate::error::{Error, Result};
use crate::header::{
    decode_text_header, BinaryHeader, TraceHeader, BINARY_HEADER_SIZE, TEXT_HEADER_SIZE,
    TRACE_HEADER_SIZE,
};
use crate::segy::Segy;

// standard library
use std::path::Path;

// external crates
use kdam::{Bar, BarBuilder, BarExt};
use log::{debug, warn};
use ndarray::{Array1, Array2};

/// Read every trace of a SEG-Y file
///
/// - `path` - Path to the SEG-Y file, can be [&str], [String], [Path], etc...
/// - `endian` - Byte order of the binary parts of the file
pub fn read_segy<P: AsRef<Path>>(path: P, endian: Endian) -> Result<Segy> {
    let mut reader = SegyReader::new();
    reader.set_endian(endian);
    reader.disable_progress();
    reader.parse(path)
}

/// Geometry-agnostic SEG-Y reader
///
/// The whole file is read into memory and every trace is loaded in file
/// order, regardless of whether the inline/crossline numbers form a regular
/// grid.
#[derive(Debug, Default)]
pub struct SegyReader {
    /// Byte order of headers and samples
    endian: Endian,
    /// Disable progress bar?
    disable_progress: bool,
}

impl SegyReader {
    /// Big endian with a progress bar
    pub fn new() -> Self {
        Default::default()
    }

    /// Setter for the byte order
    pub fn set_endian(&mut self, endian: Endian) {
        self.endian = endian;
    }

    /// Do not print the progress bar
    pub fn disable_progress(&mut self) {
        self.disable_progress = true;
    }

    /// Read the file at `path`
    pub fn parse<P: AsRef<Path>>(&self, path: P) -> Result<Segy> {
        let bytes = std::fs::read(path.as_ref())?;
        debug!("Read {} bytes from {}", bytes.len(), path.as_ref().display());
        self.parse_bytes(&bytes)
    }

    /// Read a SEG-Y file that is already in memory
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Segy> {
        let file_header_size = TEXT_HEADER_SIZE + BINARY_HEADER_SIZE;
        if bytes.len() < file_header_size {
            return Err(Error::TruncatedHeader {
                expected: file_header_size,
                found: bytes.len(),
            });
        }

        let text_header = decode_text_header(&bytes[..TEXT_HEADER_SIZE]);
        let binary_header = BinaryHeader::parse(
            &bytes[TEXT_HEADER_SIZE..file_header_size],
            self.endian,
        )?;
        debug!("{binary_header:?}");

        if binary_header.samples_per_trace == 0 {
            return Err(Error::NoSamples);
        }

        // extended textual headers carry nothing that is needed
        let trace_start = match usize::try_from(binary_header.extended_headers) {
            Ok(n) => file_header_size + n * TEXT_HEADER_SIZE,
            Err(_) => {
                return Err(Error::UnsupportedExtendedHeaders(
                    binary_header.extended_headers,
                ))
            }
        };

        if bytes.len() < trace_start {
            return Err(Error::TruncatedHeader {
                expected: trace_start,
                found: bytes.len(),
            });
        }

        let (traces, inlines, crosslines) = self.read_traces(&bytes[trace_start..], &binary_header)?;

        Ok(Segy {
            text_header,
            binary_header,
            traces,
            inlines,
            crosslines,
        })
    }

    /// Decode every trace in the trace block
    fn read_traces(
        &self,
        block: &[u8],
        binary_header: &BinaryHeader,
    ) -> Result<(Array2<f32>, Array1<i32>, Array1<i32>)> {
        let trace_size = binary_header.trace_size();
        if block.len() % trace_size != 0 {
            return Err(Error::IncompleteTraces {
                length: block.len(),
                trace_size,
            });
        }

        let n_traces = block.len() / trace_size;
        let n_samples = usize::from(binary_header.samples_per_trace);
        let format = binary_header.format;
        debug!("{n_traces} traces of {n_samples} samples, {format}");

        let mut samples = Vec::with_capacity(n_traces * n_samples);
        let mut inlines = Vec::with_capacity(n_traces);
        let mut crosslines = Vec::with_capacity(n_traces);
        let mut mismatched = 0;

        let mut progress_bar = self.init_progress_bar(n_traces)?;
        for trace in block.chunks_exact(trace_size) {
            let header = TraceHeader::parse(&trace[..TRACE_HEADER_SIZE], self.endian);
            if header.samples != 0 && header.samples != binary_header.samples_per_trace {
                mismatched += 1;
            }

            inlines.push(header.inline);
            crosslines.push(header.crossline);
            format.decode_into(&trace[TRACE_HEADER_SIZE..], self.endian, &mut samples);
            progress_bar.update(1)?;
        }

        // need an extra line for clean spacing if the progress bar is printed
        if !self.disable_progress {
            eprintln!();
        }

        if mismatched > 0 {
            warn!(
                "{mismatched} trace headers disagree with the binary header sample count, using {n_samples}"
            );
        }

        Ok((
            Array2::from_shape_vec((n_traces, n_samples), samples)?,
            Array1::from_vec(inlines),
            Array1::from_vec(crosslines),
        ))
    }

    /// Initialise the progress bar, if wanted
    fn init_progress_bar(&self, total: usize) -> Result<Bar> {
        BarBuilder::default()
            .total(total)
            .unit(" traces")
            .unit_scale(true)
            .disable(self.disable_progress)
            .build()
            .map_err(|e| Error::ProgressBar(e.to_string()))
    }
}
