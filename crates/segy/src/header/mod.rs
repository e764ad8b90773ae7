//! File and trace headers
//!
//! Byte offsets below are zero-based within each header, so the standard's
//! 1-based `INLINE_3D` at byte 189 of the trace header is offset 188 here.

mod ebcdic;

// crate modules
use crate::endian::Endian;
use crate::error::Result;
use crate::samples::SampleFormat;

/// Length of the textual file header
pub const TEXT_HEADER_SIZE: usize = 3200;

/// Length of the binary file header
pub const BINARY_HEADER_SIZE: usize = 400;

/// Length of every trace header
pub const TRACE_HEADER_SIZE: usize = 240;

/// Card images in the textual header
const CARD_WIDTH: usize = 80;

/// Decode the 3200-byte textual header into lines of text
///
/// EBCDIC is converted to ASCII when detected. The header is split into its
/// 80 column card images, each with trailing whitespace removed.
pub fn decode_text_header(bytes: &[u8]) -> String {
    let text: String = if ebcdic::is_ebcdic(bytes) {
        bytes.iter().map(|b| ebcdic::to_ascii(*b)).collect()
    } else {
        bytes
            .iter()
            .map(|b| match b {
                0x20..=0x7e => char::from(*b),
                _ => ' ',
            })
            .collect()
    };

    // only ASCII remains, so byte chunks are character chunks
    text.as_bytes()
        .chunks(CARD_WIDTH)
        .map(|card| String::from_utf8_lossy(card).trim_end().to_string())
        .collect::<Vec<String>>()
        .join("\n")
}

/// The fields of the binary file header needed to read traces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryHeader {
    /// Sample interval in microseconds
    pub sample_interval: u16,
    /// Samples per data trace
    pub samples_per_trace: u16,
    /// Data sample format
    pub format: SampleFormat,
    /// Format revision number, e.g. `0x0100` for rev 1.0
    pub revision: u16,
    /// Fixed length trace flag
    pub fixed_length: bool,
    /// Number of 3200-byte extended textual headers that follow
    pub extended_headers: i16,
}

impl BinaryHeader {
    /// Parse from the 400 bytes following the textual header
    pub fn parse(bytes: &[u8], endian: Endian) -> Result<Self> {
        Ok(Self {
            sample_interval: endian.read_u16(&bytes[16..18]),
            samples_per_trace: endian.read_u16(&bytes[20..22]),
            format: SampleFormat::from_code(endian.read_u16(&bytes[24..26]))?,
            revision: endian.read_u16(&bytes[300..302]),
            fixed_length: endian.read_u16(&bytes[302..304]) == 1,
            extended_headers: endian.read_i16(&bytes[304..306]),
        })
    }

    /// Bytes in one trace including its header
    pub fn trace_size(&self) -> usize {
        TRACE_HEADER_SIZE + usize::from(self.samples_per_trace) * self.format.bytes_per_sample()
    }
}

/// The subset of a trace header that is kept
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraceHeader {
    /// Trace sequence number within the line
    pub sequence: i32,
    /// Number of samples in this trace
    pub samples: u16,
    /// Inline number, `INLINE_3D`
    pub inline: i32,
    /// Crossline number, `CROSSLINE_3D`
    pub crossline: i32,
}

impl TraceHeader {
    /// Parse from the 240 bytes at the start of a trace
    pub fn parse(bytes: &[u8], endian: Endian) -> Self {
        Self {
            sequence: endian.read_i32(&bytes[0..4]),
            samples: endian.read_u16(&bytes[114..116]),
            inline: endian.read_i32(&bytes[188..192]),
            crossline: endian.read_i32(&bytes[192..196]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_cards() {
        let mut bytes = vec![b' '; TEXT_HEADER_SIZE];
        bytes[..9].copy_from_slice(b"C 1 HELLO");
        bytes[80..84].copy_from_slice(b"C 2\0");

        let text = decode_text_header(&bytes);
        let lines = text.split('\n').collect::<Vec<&str>>();

        assert_eq!(lines.len(), 40);
        assert_eq!(lines[0], "C 1 HELLO");
        assert_eq!(lines[1], "C 2");
        assert_eq!(lines[2], "");
    }

    #[test]
    fn ebcdic_cards() {
        let mut bytes = vec![0x40; TEXT_HEADER_SIZE];
        bytes[..3].copy_from_slice(&[0xc3, 0x40, 0xf1]);

        let text = decode_text_header(&bytes);
        assert!(text.starts_with("C 1\n"));
    }

    #[test]
    fn binary_header_fields() {
        let mut bytes = vec![0u8; BINARY_HEADER_SIZE];
        bytes[16..18].copy_from_slice(&4000u16.to_be_bytes());
        bytes[20..22].copy_from_slice(&50u16.to_be_bytes());
        bytes[24..26].copy_from_slice(&3u16.to_be_bytes());
        bytes[300..302].copy_from_slice(&0x0100u16.to_be_bytes());

        let header = BinaryHeader::parse(&bytes, Endian::Big).unwrap();
        assert_eq!(header.sample_interval, 4000);
        assert_eq!(header.samples_per_trace, 50);
        assert_eq!(header.format, SampleFormat::Int16);
        assert_eq!(header.revision, 0x0100);
        assert_eq!(header.extended_headers, 0);
        assert_eq!(header.trace_size(), 340);
    }

    #[test]
    fn trace_header_little_endian() {
        let mut bytes = vec![0u8; TRACE_HEADER_SIZE];
        bytes[188..192].copy_from_slice(&1201i32.to_le_bytes());
        bytes[192..196].copy_from_slice(&(-7i32).to_le_bytes());

        let header = TraceHeader::parse(&bytes, Endian::Little);
        assert_eq!(header.inline, 1201);
        assert_eq!(header.crossline, -7);
    }
}
