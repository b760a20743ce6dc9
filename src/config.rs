use serde::{Deserialize, Serialize};

use crate::binning::{ConvergencePolicy, MIN_LEVEL_BLOCKS};
use crate::core::BinningError;

pub const DEFAULT_MAX_BLOCKS: usize = 1000;

/// Largest power of two a `usize` can hold.
pub const DEFAULT_MAX_BLOCK_SIZE: usize = 1 << (usize::BITS - 1);

/// Construction parameters of an [`Accumulator`](crate::observables::Accumulator).
///
/// Missing fields take their defaults, so `{}` and `{"max_blocks": 512}` are
/// both valid JSON configurations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccumulatorConfig {
    /// Closed blocks kept before adjacent pairs are merged.
    pub max_blocks: usize,
    /// Upper bound for the number of samples per block.
    pub max_block_size: usize,
    pub convergence: ConvergencePolicy,
}

impl Default for AccumulatorConfig {
    fn default() -> Self {
        Self {
            max_blocks: DEFAULT_MAX_BLOCKS,
            max_block_size: DEFAULT_MAX_BLOCK_SIZE,
            convergence: ConvergencePolicy::default(),
        }
    }
}

impl AccumulatorConfig {
    pub fn with_max_blocks(max_blocks: usize) -> Self {
        Self {
            max_blocks,
            ..Self::default()
        }
    }

    pub fn with_convergence(mut self, convergence: ConvergencePolicy) -> Self {
        self.convergence = convergence;
        self
    }

    pub fn validate(&self) -> Result<(), BinningError> {
        if self.max_blocks <= MIN_LEVEL_BLOCKS {
            return Err(BinningError::InvalidConfiguration(format!(
                "max_blocks must be > {MIN_LEVEL_BLOCKS}, got {}",
                self.max_blocks
            )));
        }
        if self.max_block_size == 0 {
            return Err(BinningError::InvalidConfiguration(
                "max_block_size must be > 0".into(),
            ));
        }
        if let ConvergencePolicy::Plateau { rel_tolerance } = self.convergence {
            if !rel_tolerance.is_finite() || rel_tolerance < 0.0 {
                return Err(BinningError::InvalidConfiguration(format!(
                    "plateau rel_tolerance must be finite and >= 0, got {rel_tolerance}"
                )));
            }
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(s: &str) -> Result<Self, BinningError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
