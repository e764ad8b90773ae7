// crate modules
use crate::dtype::{ByteOrder, DType, Kind};
use crate::error::{Error, Result};
use crate::header::Header;

// seistools modules
use seistools_utils::DistinctExt;

// standard library
use std::path::Path;

// external crates
use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use log::debug;
use ndarray::{ArrayD, IxDyn, ShapeBuilder};

/// Typed element storage, in file order
#[derive(Debug, Clone, PartialEq)]
pub enum NpyData {
    Bool(Vec<bool>),
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    I64(Vec<i64>),
    U64(Vec<u64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

/// Apply the same expression to whichever vector is stored
macro_rules! for_each_variant {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            NpyData::Bool($v) => $body,
            NpyData::I8($v) => $body,
            NpyData::U8($v) => $body,
            NpyData::I16($v) => $body,
            NpyData::U16($v) => $body,
            NpyData::I32($v) => $body,
            NpyData::U32($v) => $body,
            NpyData::I64($v) => $body,
            NpyData::U64($v) => $body,
            NpyData::F32($v) => $body,
            NpyData::F64($v) => $body,
        }
    };
}

impl NpyData {
    /// Number of elements
    pub fn len(&self) -> usize {
        for_each_variant!(self, v => v.len())
    }

    /// True if there are no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct values
    pub fn count_distinct(&self) -> usize {
        for_each_variant!(self, v => v.count_distinct())
    }

    /// True when more than one distinct value exists
    pub fn has_variation(&self) -> bool {
        for_each_variant!(self, v => v.has_variation())
    }

    /// Element `i` formatted for display
    pub fn display_at(&self, i: usize) -> Option<String> {
        for_each_variant!(self, v => v.get(i).map(|x| x.to_string()))
    }

    /// Every element widened to `f64`, booleans as `0.0` or `1.0`
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            NpyData::Bool(v) => v.iter().map(|b| f64::from(u8::from(*b))).collect(),
            NpyData::I8(v) => v.iter().map(|x| f64::from(*x)).collect(),
            NpyData::U8(v) => v.iter().map(|x| f64::from(*x)).collect(),
            NpyData::I16(v) => v.iter().map(|x| f64::from(*x)).collect(),
            NpyData::U16(v) => v.iter().map(|x| f64::from(*x)).collect(),
            NpyData::I32(v) => v.iter().map(|x| f64::from(*x)).collect(),
            NpyData::U32(v) => v.iter().map(|x| f64::from(*x)).collect(),
            NpyData::I64(v) => v.iter().map(|x| *x as f64).collect(),
            NpyData::U64(v) => v.iter().map(|x| *x as f64).collect(),
            NpyData::F32(v) => v.iter().map(|x| f64::from(*x)).collect(),
            NpyData::F64(v) => v.clone(),
        }
    }

    /// Decode `n` elements of `dtype` from raw bytes
    fn decode(bytes: &[u8], dtype: &DType, n: usize) -> Self {
        let bytes = &bytes[..n * dtype.size];
        let big = dtype.order == ByteOrder::Big;

        match (dtype.kind, dtype.size) {
            (Kind::Bool, _) => NpyData::Bool(bytes.iter().map(|b| *b != 0).collect()),
            (Kind::Int, 1) => NpyData::I8(bytes.iter().map(|b| *b as i8).collect()),
            (Kind::UInt, 1) => NpyData::U8(bytes.to_vec()),
            (Kind::Int, 2) => NpyData::I16(read_into(
                bytes,
                n,
                big,
                BigEndian::read_i16_into,
                LittleEndian::read_i16_into,
            )),
            (Kind::UInt, 2) => NpyData::U16(read_into(
                bytes,
                n,
                big,
                BigEndian::read_u16_into,
                LittleEndian::read_u16_into,
            )),
            (Kind::Int, 4) => NpyData::I32(read_into(
                bytes,
                n,
                big,
                BigEndian::read_i32_into,
                LittleEndian::read_i32_into,
            )),
            (Kind::UInt, 4) => NpyData::U32(read_into(
                bytes,
                n,
                big,
                BigEndian::read_u32_into,
                LittleEndian::read_u32_into,
            )),
            (Kind::Int, _) => NpyData::I64(read_into(
                bytes,
                n,
                big,
                BigEndian::read_i64_into,
                LittleEndian::read_i64_into,
            )),
            (Kind::UInt, _) => NpyData::U64(read_into(
                bytes,
                n,
                big,
                BigEndian::read_u64_into,
                LittleEndian::read_u64_into,
            )),
            (Kind::Float, 4) => NpyData::F32(read_into(
                bytes,
                n,
                big,
                BigEndian::read_f32_into,
                LittleEndian::read_f32_into,
            )),
            (Kind::Float, _) => NpyData::F64(read_into(
                bytes,
                n,
                big,
                BigEndian::read_f64_into,
                LittleEndian::read_f64_into,
            )),
        }
    }
}

/// Fill a vector of `n` elements with the reader for the right byte order
fn read_into<T: Default + Clone>(
    bytes: &[u8],
    n: usize,
    big: bool,
    read_big: fn(&[u8], &mut [T]),
    read_little: fn(&[u8], &mut [T]),
) -> Vec<T> {
    let mut values = vec![T::default(); n];
    if big {
        read_big(bytes, &mut values);
    } else {
        read_little(bytes, &mut values);
    }
    values
}

/// A single array loaded from a `.npy` file
#[derive(Debug, Clone, PartialEq)]
pub struct NpyArray {
    /// Element type as stored on disk
    pub dtype: DType,
    /// Array shape, empty for a scalar
    pub shape: Vec<usize>,
    /// True if `data` is in column-major order
    pub fortran_order: bool,
    /// Elements in file order
    pub data: NpyData,
}

impl NpyArray {
    /// Parse a complete `.npy` file held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (header, data) = Header::parse(bytes)?;
        debug!("{header:?}");

        let n = header.element_count()?;
        let expected = header.data_size()?;
        if data.len() < expected {
            return Err(Error::TruncatedData {
                expected,
                found: data.len(),
            });
        }

        Ok(Self {
            data: NpyData::decode(data, &header.dtype, n),
            dtype: header.dtype,
            shape: header.shape,
            fortran_order: header.fortran_order,
        })
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if there are no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of distinct values, see [DistinctExt] for float rules
    pub fn count_distinct(&self) -> usize {
        self.data.count_distinct()
    }

    /// Dynamic dimensional `f64` array with the memory order respected
    ///
    /// ```rust, no_run
    /// # use seistools_npy::read_npy;
    /// let array = read_npy("attribute.npy").unwrap().to_ndarray().unwrap();
    /// let volume = array.into_dimensionality::<ndarray::Ix3>().unwrap();
    /// ```
    pub fn to_ndarray(&self) -> Result<ArrayD<f64>> {
        let shape = IxDyn(&self.shape);
        let values = self.data.to_f64_vec();
        let array = if self.fortran_order {
            ArrayD::from_shape_vec(shape.f(), values)?
        } else {
            ArrayD::from_shape_vec(shape, values)?
        };
        Ok(array)
    }
}

/// Load a single `.npy` file
///
/// - `path` - Path to the file, can be [&str], [String], [Path], etc...
///
/// ```rust, no_run
/// # use seistools_npy::read_npy;
/// let array = read_npy("path/to/array.npy").unwrap();
/// println!("{} {:?}, {} distinct values", array.dtype, array.shape, array.count_distinct());
/// ```
pub fn read_npy<P: AsRef<Path>>(path: P) -> Result<NpyArray> {
    let bytes = std::fs::read(path.as_ref())?;
    NpyArray::from_bytes(&bytes)
}
