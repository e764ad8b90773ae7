use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use seistools_utils::SliceExt;
    /// # use seistools_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    /// assert_eq!([1.1, f32::MIN, 2.2].try_min(), Ok(f32::MIN));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f32::NAN, 2.2].try_min(), Err(Error::NonFiniteValue { index: 1 }));
    /// assert_eq!(Vec::<f32>::new().try_min(), Err(Error::EmptySlice));
    /// ```
    ///
    /// The float primitives (`f32`/`f64`) do not implement `Ord` due to `NaN`
    /// being incomparable, so this uses `total_cmp` once the values are known
    /// to be finite.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// Only provides the maximum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use seistools_utils::SliceExt;
    /// # use seistools_utils::Error;
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    /// assert_eq!([1.1, f64::INFINITY].try_max(), Err(Error::NonFiniteValue { index: 1 }));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Find the `(min, max)` extent in a single pass
    ///
    /// ```rust
    /// # use seistools_utils::SliceExt;
    /// assert_eq!([3.0, -1.0, 2.0].try_extent(), Ok((-1.0, 3.0)));
    /// ```
    fn try_extent(&self) -> Result<(T, T)>;

    /// Largest absolute value, ignoring non-finite entries
    ///
    /// Seismic amplitudes are displayed symmetric about zero, and real files
    /// carry the odd dead trace full of `NaN`. Those are skipped rather than
    /// rejected. Only a slice with no finite values at all is an error.
    ///
    /// ```rust
    /// # use seistools_utils::SliceExt;
    /// # use seistools_utils::Error;
    /// assert_eq!([0.5, -4.0, f32::NAN, 2.0].finite_abs_max(), Ok(4.0));
    /// assert_eq!([f32::NAN].finite_abs_max(), Err(Error::EmptySlice));
    /// ```
    fn finite_abs_max(&self) -> Result<T>;
}

macro_rules! impl_slice_ext {
    ($t:ty) => {
        impl SliceExt<$t> for [$t] {
            fn try_min(&self) -> Result<$t> {
                self.try_extent().map(|(min, _)| min)
            }

            fn try_max(&self) -> Result<$t> {
                self.try_extent().map(|(_, max)| max)
            }

            fn try_extent(&self) -> Result<($t, $t)> {
                if let Some(index) = self.iter().position(|v| !v.is_finite()) {
                    return Err(Error::NonFiniteValue { index });
                }

                let min = self.iter().min_by(|a, b| a.total_cmp(b)).copied();
                let max = self.iter().max_by(|a, b| a.total_cmp(b)).copied();

                match (min, max) {
                    (Some(min), Some(max)) => Ok((min, max)),
                    _ => Err(Error::EmptySlice),
                }
            }

            fn finite_abs_max(&self) -> Result<$t> {
                self.iter()
                    .filter(|v| v.is_finite())
                    .map(|v| v.abs())
                    .max_by(|a, b| a.total_cmp(b))
                    .ok_or(Error::EmptySlice)
            }
        }
    };
}

impl_slice_ext!(f32);
impl_slice_ext!(f64);
