use serde::Serialize;

use crate::core::{BinningError, Scalar};

/// Mean and standard error of one block level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelStats<T> {
    pub mean: T,
    pub stderr: T,
}

/// Statistics of a sequence of block averages treated as independent.
///
/// `stderr = sqrt(<x^2> - <x>^2) / sqrt(n)`, with the variance clamped at zero
/// so cancellation never produces a negative value. A single value yields a
/// zero error.
pub fn single_level_stats<T: Scalar>(values: &[T]) -> Result<LevelStats<T>, BinningError> {
    if values.is_empty() {
        return Err(BinningError::InsufficientData(
            "block statistics need at least one block",
        ));
    }

    let n = T::from_count(values.len());
    let (sum, sum_sq) = values
        .iter()
        .fold((T::zero(), T::zero()), |(s, s2), &x| (s + x, s2 + x * x));

    let mean = sum / n;
    let variance = (sum_sq / n - mean * mean).max(T::zero());

    Ok(LevelStats {
        mean,
        stderr: variance.sqrt() / n.sqrt(),
    })
}
