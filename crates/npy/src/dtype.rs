// crate modules
use crate::error::{Error, Result};

// standard library
use std::str::FromStr;

// nom parser combinators
use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::tuple;
use nom::IResult;

/// Byte order of multi-byte elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
    /// Single byte types, `|` in the descriptor
    NotApplicable,
}

/// Element kinds that can be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Bool,
    Int,
    UInt,
    Float,
}

/// A simple numeric dtype such as `<f8` or `|u1`
///
/// ```rust
/// # use seistools_npy::{ByteOrder, DType, Kind};
/// let dtype: DType = "<i4".parse().unwrap();
/// assert_eq!(dtype.kind, Kind::Int);
/// assert_eq!(dtype.size, 4);
/// assert_eq!(dtype.order, ByteOrder::Little);
///
/// // Structured and string types are not supported
/// assert!("<U10".parse::<DType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DType {
    /// Byte order of each element
    pub order: ByteOrder,
    /// Element kind
    pub kind: Kind,
    /// Bytes per element
    pub size: usize,
}

impl FromStr for DType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let unsupported = || Error::UnsupportedDtype(s.to_string());
        let (_, (order, kind, size)) = descriptor(s).map_err(|_| unsupported())?;

        let order = match order {
            '<' => ByteOrder::Little,
            '>' => ByteOrder::Big,
            '|' => ByteOrder::NotApplicable,
            // native order, every platform this runs on is little endian
            _ => ByteOrder::Little,
        };

        let kind = match kind {
            'b' => Kind::Bool,
            'i' => Kind::Int,
            'u' => Kind::UInt,
            _ => Kind::Float,
        };

        let valid = match kind {
            Kind::Bool => size == 1,
            Kind::Int | Kind::UInt => matches!(size, 1 | 2 | 4 | 8),
            Kind::Float => matches!(size, 4 | 8),
        };

        if !valid || (size > 1 && order == ByteOrder::NotApplicable) {
            return Err(unsupported());
        }

        Ok(Self { order, kind, size })
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let order = match self.order {
            ByteOrder::Little => '<',
            ByteOrder::Big => '>',
            ByteOrder::NotApplicable => '|',
        };
        let kind = match self.kind {
            Kind::Bool => 'b',
            Kind::Int => 'i',
            Kind::UInt => 'u',
            Kind::Float => 'f',
        };
        write!(f, "{order}{kind}{}", self.size)
    }
}

/// Byte order character, kind character, and size
fn descriptor(i: &str) -> IResult<&str, (char, char, usize)> {
    all_consuming(tuple((
        one_of("<>|="),
        one_of("biuf"),
        map_res(digit1, str::parse::<usize>),
    )))(i)
}
