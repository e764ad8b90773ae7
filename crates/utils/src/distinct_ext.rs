// standard library
use std::collections::HashSet;

/// Count distinct values in a slice
///
/// Integers compare as usual. Floats follow the convention of most array
/// tooling rather than IEEE equality:
///
/// - `-0.0` and `0.0` are the same value
/// - every `NaN` is the same value, regardless of payload
///
/// ```rust
/// # use seistools_utils::DistinctExt;
/// assert_eq!([1_i32, 1, 2, 3, 3].count_distinct(), 3);
/// assert_eq!([0.0_f64, -0.0, f64::NAN, f64::NAN].count_distinct(), 2);
/// assert_eq!(Vec::<u8>::new().count_distinct(), 0);
/// ```
pub trait DistinctExt {
    /// Number of distinct values
    fn count_distinct(&self) -> usize;

    /// True when there is more than one distinct value
    ///
    /// Stops at the second distinct value so large constant arrays are cheap
    /// to reject.
    fn has_variation(&self) -> bool;
}

macro_rules! impl_distinct_int {
    ($($t:ty),*) => {$(
        impl DistinctExt for [$t] {
            fn count_distinct(&self) -> usize {
                self.iter().collect::<HashSet<_>>().len()
            }

            fn has_variation(&self) -> bool {
                match self.split_first() {
                    Some((first, rest)) => rest.iter().any(|v| v != first),
                    None => false,
                }
            }
        }
    )*};
}

macro_rules! impl_distinct_float {
    ($($t:ty),*) => {$(
        impl DistinctExt for [$t] {
            fn count_distinct(&self) -> usize {
                self.iter()
                    .map(|v| canonical_bits(*v as f64))
                    .collect::<HashSet<_>>()
                    .len()
            }

            fn has_variation(&self) -> bool {
                match self.split_first() {
                    Some((first, rest)) => {
                        let first = canonical_bits(*first as f64);
                        rest.iter().any(|v| canonical_bits(*v as f64) != first)
                    }
                    None => false,
                }
            }
        }
    )*};
}

impl_distinct_int!(bool, i8, u8, i16, u16, i32, u32, i64, u64);
impl_distinct_float!(f32, f64);

/// Bit pattern with signed zeros and NaN payloads collapsed
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}
