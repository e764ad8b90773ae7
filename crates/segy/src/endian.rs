// external crates
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Byte order of the binary headers and trace data
///
/// The SEG-Y standard is big endian, but little endian files are common
/// enough from some processing packages.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    #[default]
    Big,
    Little,
}

impl Endian {
    pub(crate) fn read_u16(&self, buf: &[u8]) -> u16 {
        match self {
            Endian::Big => BigEndian::read_u16(buf),
            Endian::Little => LittleEndian::read_u16(buf),
        }
    }

    pub(crate) fn read_i16(&self, buf: &[u8]) -> i16 {
        match self {
            Endian::Big => BigEndian::read_i16(buf),
            Endian::Little => LittleEndian::read_i16(buf),
        }
    }

    pub(crate) fn read_u32(&self, buf: &[u8]) -> u32 {
        match self {
            Endian::Big => BigEndian::read_u32(buf),
            Endian::Little => LittleEndian::read_u32(buf),
        }
    }

    pub(crate) fn read_i32(&self, buf: &[u8]) -> i32 {
        match self {
            Endian::Big => BigEndian::read_i32(buf),
            Endian::Little => LittleEndian::read_i32(buf),
        }
    }

    pub(crate) fn read_f32(&self, buf: &[u8]) -> f32 {
        match self {
            Endian::Big => BigEndian::read_f32(buf),
            Endian::Little => LittleEndian::read_f32(buf),
        }
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Endian::Big => write!(f, "big endian"),
            Endian::Little => write!(f, "little endian"),
        }
    }
}
