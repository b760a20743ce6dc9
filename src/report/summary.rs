use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

use crate::core::{BinningError, Scalar};
use crate::observables::Accumulator;

/// Point-in-time view of an accumulator's estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary<T> {
    pub mean: T,
    pub error: T,
    pub converged: bool,
    pub represented_samples: usize,
    pub block_size: usize,
    pub num_blocks: usize,
}

impl<T: Scalar> Summary<T> {
    pub fn from_accumulator(acc: &Accumulator<T>) -> std::result::Result<Self, BinningError> {
        let est = acc.estimate()?;
        Ok(Self {
            mean: est.mean,
            error: est.error,
            converged: est.converged,
            represented_samples: acc.represented_samples(),
            block_size: acc.block_size(),
            num_blocks: acc.num_blocks(),
        })
    }
}

impl<T: Scalar> Display for Summary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "value: {} +/- {}  converged: {}  (Z = {}, {} blocks of {})",
            self.mean,
            self.error,
            self.converged,
            self.represented_samples,
            self.num_blocks,
            self.block_size
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reflects_accumulator() {
        let mut acc = Accumulator::new();
        for x in [1.0, 2.0, 3.0] {
            acc.ingest(x).unwrap();
        }
        let summary = Summary::from_accumulator(&acc).unwrap();
        assert_eq!(summary.mean, 2.0);
        assert_eq!(summary.represented_samples, 3);
        assert_eq!(summary.block_size, 1);
        assert_eq!(summary.num_blocks, 3);
        assert!(!summary.converged);
    }

    #[test]
    fn display_format() {
        let summary = Summary {
            mean: 1.5f64,
            error: 0.25,
            converged: false,
            represented_samples: 40,
            block_size: 4,
            num_blocks: 10,
        };
        assert_eq!(
            summary.to_string(),
            "value: 1.5 +/- 0.25  converged: false  (Z = 40, 10 blocks of 4)"
        );
    }

    #[test]
    fn empty_accumulator_has_no_summary() {
        let acc = Accumulator::<f64>::new();
        assert!(Summary::from_accumulator(&acc).is_err());
    }
}
