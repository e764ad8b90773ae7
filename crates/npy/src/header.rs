//! File preamble and header dictionary
//!
//! ```text
//! \x93NUMPY | major | minor | header length | {'descr': '<f8', 'fortran_order': False, 'shape': (3, 4), }
//! ```
//!
//! The header length is a little endian `u16` for version 1.0, and a `u32`
//! for versions 2.0 and 3.0.

// crate modules
use crate::dtype::DType;
use crate::error::{Error, Result};

// seistools modules
use seistools_utils::f;

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_while};
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{map, map_res, opt, value};
use nom::multi::separated_list0;
use nom::number::complete::{le_u16, le_u32, le_u8};
use nom::sequence::{delimited, pair, separated_pair, terminated, tuple};
use nom::IResult;

/// Magic string at the start of every `.npy` file
const MAGIC: &[u8] = b"\x93NUMPY";

/// Everything in the header needed to decode the data
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Format version `(major, minor)`
    pub version: (u8, u8),
    /// Element type
    pub dtype: DType,
    /// True if the data are in column-major order
    pub fortran_order: bool,
    /// Array shape, empty for a scalar
    pub shape: Vec<usize>,
}

impl Header {
    /// Parse the header, returning it with the remaining data bytes
    pub fn parse(bytes: &[u8]) -> Result<(Self, &[u8])> {
        let (rest, _) = tag::<_, _, nom::error::Error<&[u8]>>(MAGIC)(bytes)
            .map_err(|_| Error::InvalidMagic)?;

        let (rest, (major, minor)) = version(rest)
            .map_err(|_| Error::InvalidHeader("missing format version".to_string()))?;

        let (rest, text) = match major {
            1 => length_prefixed(rest, false),
            2 | 3 => length_prefixed(rest, true),
            _ => return Err(Error::UnsupportedVersion(major, minor)),
        }
        .map_err(|_| Error::InvalidHeader("header shorter than its declared length".to_string()))?;

        let text = std::str::from_utf8(text)
            .map_err(|_| Error::InvalidHeader("header is not valid text".to_string()))?;

        let (descr, fortran_order, shape) = parse_dictionary(text)?;

        Ok((
            Self {
                version: (major, minor),
                dtype: descr.parse()?,
                fortran_order,
                shape,
            },
            rest,
        ))
    }

    /// Number of elements, 1 for a scalar
    ///
    /// A shape whose product does not fit in `usize` is a corrupt header.
    pub fn element_count(&self) -> Result<usize> {
        self.shape
            .iter()
            .try_fold(1usize, |count, &dim| count.checked_mul(dim))
            .ok_or_else(|| Error::InvalidHeader(f!("shape {:?} is too large", self.shape)))
    }

    /// Number of data bytes the shape and dtype require
    pub fn data_size(&self) -> Result<usize> {
        self.element_count()?
            .checked_mul(self.dtype.size)
            .ok_or_else(|| Error::InvalidHeader(f!("shape {:?} is too large", self.shape)))
    }
}

/// Pull the required keys out of the header dictionary
fn parse_dictionary(text: &str) -> Result<(String, bool, Vec<usize>)> {
    let (_, entries) =
        dictionary(text.trim_end()).map_err(|_| Error::InvalidHeader(text.trim().to_string()))?;

    let mut descr = None;
    let mut fortran_order = None;
    let mut shape = None;

    for item in entries {
        match item {
            ("descr", Value::Str(s)) => descr = Some(s.to_string()),
            ("fortran_order", Value::Bool(b)) => fortran_order = Some(b),
            ("shape", Value::Tuple(t)) => shape = Some(t),
            (key, _) => return Err(Error::InvalidHeader(f!("unexpected entry \"{key}\""))),
        }
    }

    let missing = |key: &str| Error::InvalidHeader(f!("missing \"{key}\""));
    Ok((
        descr.ok_or_else(|| missing("descr"))?,
        fortran_order.ok_or_else(|| missing("fortran_order"))?,
        shape.ok_or_else(|| missing("shape"))?,
    ))
}

// ! ------------------------------------------------------------------------
// !                                 Parsers
// ! ------------------------------------------------------------------------

/// Values that appear in a header dictionary
#[derive(Debug, Clone, PartialEq)]
enum Value<'a> {
    Str(&'a str),
    Bool(bool),
    Tuple(Vec<usize>),
}

/// Major and minor version bytes
fn version(i: &[u8]) -> IResult<&[u8], (u8, u8)> {
    pair(le_u8, le_u8)(i)
}

/// Header text preceded by its length
fn length_prefixed(i: &[u8], wide: bool) -> IResult<&[u8], &[u8]> {
    let (i, length) = if wide {
        le_u32(i)?
    } else {
        map(le_u16, u32::from)(i)?
    };
    take(length)(i)
}

/// Full dictionary, e.g. `{'descr': '<f8', 'shape': (3,), }`
fn dictionary(i: &str) -> IResult<&str, Vec<(&str, Value)>> {
    delimited(
        pair(char('{'), multispace0),
        separated_list0(comma, entry),
        tuple((opt(comma), multispace0, char('}'))),
    )(i)
}

/// Single `'key': value` pair
fn entry(i: &str) -> IResult<&str, (&str, Value)> {
    separated_pair(
        quoted,
        delimited(multispace0, char(':'), multispace0),
        alt((
            map(quoted, Value::Str),
            value(Value::Bool(true), tag("True")),
            value(Value::Bool(false), tag("False")),
            map(shape_tuple, Value::Tuple),
        )),
    )(i)
}

/// Single or double quoted string
fn quoted(i: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('\''), take_while(|c| c != '\''), char('\'')),
        delimited(char('"'), take_while(|c| c != '"'), char('"')),
    ))(i)
}

/// Tuple of dimensions, e.g. `()`, `(5,)`, or `(3, 4)`
fn shape_tuple(i: &str) -> IResult<&str, Vec<usize>> {
    delimited(
        pair(char('('), multispace0),
        separated_list0(comma, map_res(digit1, str::parse::<usize>)),
        pair(opt(comma), terminated(multispace0, char(')'))),
    )(i)
}

/// Comma with any surrounding whitespace
fn comma(i: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0)(i)
}
