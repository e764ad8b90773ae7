// crate modules
use crate::endian::Endian;
use crate::error::{Error, Result};

/// Data sample format code from the binary header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// 4-byte IBM floating point
    IbmFloat32,
    /// 4-byte two's complement integer
    Int32,
    /// 2-byte two's complement integer
    Int16,
    /// 4-byte IEEE floating point
    IeeeFloat32,
    /// 1-byte two's complement integer
    Int8,
}

impl SampleFormat {
    /// Interpret a format code, failing for anything that is not decoded
    pub fn from_code(code: u16) -> Result<Self> {
        match code {
            1 => Ok(Self::IbmFloat32),
            2 => Ok(Self::Int32),
            3 => Ok(Self::Int16),
            5 => Ok(Self::IeeeFloat32),
            8 => Ok(Self::Int8),
            _ => Err(Error::UnsupportedFormat(code)),
        }
    }

    /// Format code as written in the binary header
    pub fn code(&self) -> u16 {
        match self {
            Self::IbmFloat32 => 1,
            Self::Int32 => 2,
            Self::Int16 => 3,
            Self::IeeeFloat32 => 5,
            Self::Int8 => 8,
        }
    }

    /// Size of a single sample in bytes
    pub fn bytes_per_sample(&self) -> usize {
        match self {
            Self::IbmFloat32 | Self::Int32 | Self::IeeeFloat32 => 4,
            Self::Int16 => 2,
            Self::Int8 => 1,
        }
    }

    /// Decode raw trace samples and append them to `samples`
    ///
    /// `raw` must be a whole number of samples long.
    pub(crate) fn decode_into(&self, raw: &[u8], endian: Endian, samples: &mut Vec<f32>) {
        let chunks = raw.chunks_exact(self.bytes_per_sample());
        match self {
            Self::IbmFloat32 => samples.extend(chunks.map(|b| ibm_to_f32(endian.read_u32(b)))),
            Self::Int32 => samples.extend(chunks.map(|b| endian.read_i32(b) as f32)),
            Self::Int16 => samples.extend(chunks.map(|b| f32::from(endian.read_i16(b)))),
            Self::IeeeFloat32 => samples.extend(chunks.map(|b| endian.read_f32(b))),
            Self::Int8 => samples.extend(chunks.map(|b| f32::from(b[0] as i8))),
        }
    }
}

impl std::fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Self::IbmFloat32 => "4-byte IBM float",
            Self::Int32 => "4-byte integer",
            Self::Int16 => "2-byte integer",
            Self::IeeeFloat32 => "4-byte IEEE float",
            Self::Int8 => "1-byte integer",
        };
        write!(f, "{name} (format {})", self.code())
    }
}

/// Convert an IBM System/360 single precision float to IEEE
///
/// IBM floats are sign, 7-bit base-16 exponent biased by 64, and a 24-bit
/// fraction, i.e. `(-1)^s * 0.f * 16^(e - 64)`.
///
/// ```rust
/// # use seistools_segy::ibm_to_f32;
/// assert_eq!(ibm_to_f32(0x4110_0000), 1.0);
/// assert_eq!(ibm_to_f32(0xC276_A000), -118.625);
/// ```
pub fn ibm_to_f32(bits: u32) -> f32 {
    let fraction = bits & 0x00ff_ffff;
    if fraction == 0 {
        return 0.0;
    }

    let sign = if bits & 0x8000_0000 == 0 { 1.0 } else { -1.0 };
    let exponent = ((bits >> 24) & 0x7f) as i32 - 64;
    let mantissa = f64::from(fraction) / f64::from(1u32 << 24);

    (sign * mantissa * 16f64.powi(exponent)) as f32
}
