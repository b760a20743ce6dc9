use num_traits::Float;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Floating-point sample type accepted by the binning machinery.
///
/// Implemented for `f32` and `f64`. Besides the [`Float`] arithmetic it
/// carries the few lossless-enough conversions the accumulator needs, so the
/// generic code never has to go through a fallible `NumCast`.
pub trait Scalar:
    Float + Debug + Display + Default + Serialize + Send + Sync + 'static
{
    /// Weight of each block when two adjacent blocks are merged.
    const HALF: Self;

    /// Converts a block or sample count.
    fn from_count(n: usize) -> Self;

    /// Converts a configuration value (tolerances and the like).
    fn from_real(v: f64) -> Self;
}

impl Scalar for f32 {
    const HALF: f32 = 0.5;

    #[inline]
    fn from_count(n: usize) -> Self {
        n as f32
    }

    #[inline]
    fn from_real(v: f64) -> Self {
        v as f32
    }
}

impl Scalar for f64 {
    const HALF: f64 = 0.5;

    #[inline]
    fn from_count(n: usize) -> Self {
        n as f64
    }

    #[inline]
    fn from_real(v: f64) -> Self {
        v
    }
}
