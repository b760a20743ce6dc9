use crate::core::Scalar;
use crate::evaluation::estimators::Estimator;

/// Streaming mean estimator: `mean = sum / len`.
///
/// Keeps no blocks and no error bar; it is the exact running average of every
/// sample seen, useful as a reference for binned estimates.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator<T: Scalar = f64> {
    len: usize,
    sum: T,
}

impl<T: Scalar> BasicEstimator<T> {
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Scalar> Estimator<T> for BasicEstimator<T> {
    #[inline]
    fn add(&mut self, v: T) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.sum = self.sum + v;
    }

    #[inline]
    fn estimation(&self) -> T {
        if self.len > 0 {
            self.sum / T::from_count(self.len)
        } else {
            T::nan()
        }
    }
}
