use crate::binning::{
    Estimate, Ladder, LevelStats, build_ladder, collate_in_place, final_estimate,
    single_level_stats,
};
use crate::config::AccumulatorConfig;
use crate::core::{BinningError, Scalar};
use crate::evaluation::Estimator;

/// Streaming mean and error bar for an autocorrelated scalar series.
///
/// Samples are summed into an open block of `block_size` samples. A full
/// block is closed and its average appended to `blocks`. When `blocks`
/// reaches `max_blocks` entries, adjacent pairs are merged and `block_size`
/// doubles, so memory stays at `max_blocks` values however long the stream.
///
/// Estimates are recomputed from the closed blocks on every query; samples
/// still in the open block do not contribute until it closes.
///
/// `Clone` is a deep copy: clones evolve independently.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator<T: Scalar> {
    blocks: Vec<T>,
    open_sum: T,
    open_count: usize,
    block_size: usize,
    config: AccumulatorConfig,
}

impl<T: Scalar> Default for Accumulator<T> {
    fn default() -> Self {
        Self::with_valid_config(AccumulatorConfig::default())
    }
}

impl<T: Scalar> Accumulator<T> {
    /// Empty accumulator with the default bound of 1000 blocks.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_blocks(max_blocks: usize) -> Result<Self, BinningError> {
        Self::from_config(AccumulatorConfig::with_max_blocks(max_blocks))
    }

    pub fn from_config(config: AccumulatorConfig) -> Result<Self, BinningError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: AccumulatorConfig) -> Self {
        Self {
            blocks: Vec::with_capacity(config.max_blocks),
            open_sum: T::zero(),
            open_count: 0,
            block_size: 1,
            config,
        }
    }

    /// Adds one sample.
    ///
    /// Fails with [`BinningError::Overflow`] only if this sample would trigger
    /// a collation whose doubled block size exceeds `max_block_size`; the
    /// accumulator is left untouched in that case.
    pub fn ingest(&mut self, x: T) -> Result<(), BinningError> {
        let closes_block = self.open_count + 1 == self.block_size;
        if closes_block && self.blocks.len() + 1 >= self.config.max_blocks {
            self.doubled_block_size()?;
        }

        self.open_sum = self.open_sum + x;
        self.open_count += 1;

        if self.open_count == self.block_size {
            self.blocks.push(self.open_sum / T::from_count(self.block_size));
            self.open_sum = T::zero();
            self.open_count = 0;

            if self.blocks.len() >= self.config.max_blocks {
                self.block_size = self.doubled_block_size()?;
                collate_in_place(&mut self.blocks);
                tracing::debug!(
                    block_size = self.block_size,
                    num_blocks = self.blocks.len(),
                    "collated closed blocks"
                );
            }
        }
        Ok(())
    }

    fn doubled_block_size(&self) -> Result<usize, BinningError> {
        let limit = self.config.max_block_size;
        self.block_size
            .checked_mul(2)
            .filter(|&z| z <= limit)
            .ok_or(BinningError::Overflow {
                block_size: self.block_size,
                limit,
            })
    }

    /// Binned estimate of the mean.
    pub fn mean(&self) -> Result<T, BinningError> {
        Ok(self.estimate()?.mean)
    }

    /// Error bar on [`mean`](Self::mean), corrected for autocorrelation.
    pub fn errorbar(&self) -> Result<T, BinningError> {
        Ok(self.estimate()?.error)
    }

    /// Whether the error estimate has plateaued, per the configured policy.
    pub fn converged(&self) -> Result<bool, BinningError> {
        Ok(self.estimate()?.converged)
    }

    /// Mean, error bar and convergence flag from a single ladder build.
    pub fn estimate(&self) -> Result<Estimate<T>, BinningError> {
        final_estimate(&self.ladder()?, self.config.convergence)
    }

    /// Per-level statistics over the closed blocks.
    pub fn ladder(&self) -> Result<Ladder<T>, BinningError> {
        build_ladder(&self.blocks)
    }

    /// Statistics of the closed blocks taken as independent, without merging.
    pub fn block_stats(&self) -> Result<LevelStats<T>, BinningError> {
        single_level_stats(&self.blocks)
    }

    pub fn block_mean(&self) -> Result<T, BinningError> {
        Ok(self.block_stats()?.mean)
    }

    pub fn block_errorbar(&self) -> Result<T, BinningError> {
        Ok(self.block_stats()?.stderr)
    }

    /// Replaces the closed blocks and the block size, discarding the open block.
    ///
    /// Intended for injecting externally merged block averages. Nothing is
    /// validated: `block_size` should be non-zero and `blocks` shorter than
    /// `max_blocks`. An oversized load is halved on each subsequent block
    /// close until it fits.
    pub fn load_blocks<I>(&mut self, blocks: I, block_size: usize)
    where
        I: IntoIterator<Item = T>,
    {
        self.blocks.clear();
        self.blocks.extend(blocks);
        self.block_size = block_size;
        self.open_sum = T::zero();
        self.open_count = 0;
    }

    pub fn blocks(&self) -> &[T] {
        &self.blocks
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    pub fn max_blocks(&self) -> usize {
        self.config.max_blocks
    }

    /// Running sum of the open block.
    pub fn open_sum(&self) -> T {
        self.open_sum
    }

    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Samples represented by the closed blocks plus the open block.
    ///
    /// Lower than the number of ingested samples when a collation dropped an
    /// unpaired block.
    pub fn represented_samples(&self) -> usize {
        self.block_size
            .saturating_mul(self.blocks.len())
            .saturating_add(self.open_count)
    }

    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }
}

impl<T: Scalar> Estimator<T> for Accumulator<T> {
    fn add(&mut self, v: T) {
        if let Err(err) = self.ingest(v) {
            tracing::warn!(%err, "sample rejected by accumulator");
        }
    }

    fn estimation(&self) -> T {
        self.mean().unwrap_or_else(|_| T::nan())
    }
}
