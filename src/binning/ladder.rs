use serde::Serialize;

use crate::binning::collate::collate_in_place;
use crate::binning::level_stats::single_level_stats;
use crate::core::{BinningError, Scalar};

/// Merging stops once a collation leaves this many blocks or fewer.
pub const MIN_LEVEL_BLOCKS: usize = 4;

/// One rung of the binning ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Level<T> {
    pub mean: T,
    pub stderr: T,
    /// Number of blocks the statistics were computed over.
    pub block_count: usize,
}

/// Error estimates at successively doubled block sizes.
///
/// Level 0 is computed on the blocks as given; each following level on the
/// pairwise-merged blocks of the previous one. Once blocks outgrow the
/// autocorrelation time the `stderr` column levels off.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ladder<T> {
    levels: Vec<Level<T>>,
}

impl<T: Scalar> Ladder<T> {
    /// Wraps levels computed elsewhere (e.g. merged from several walkers).
    pub fn from_levels(levels: Vec<Level<T>>) -> Self {
        Self { levels }
    }

    pub fn levels(&self) -> &[Level<T>] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level<T>> {
        self.levels.iter()
    }
}

/// Builds the ladder for a sequence of block averages.
///
/// The loop always records the current level before collating, and repeats
/// while the collated sequence is longer than [`MIN_LEVEL_BLOCKS`]. Inputs of
/// one to four blocks therefore produce a single level.
pub fn build_ladder<T: Scalar>(blocks: &[T]) -> Result<Ladder<T>, BinningError> {
    if blocks.is_empty() {
        return Err(BinningError::InsufficientData(
            "cannot build a binning ladder without closed blocks",
        ));
    }

    let mut working = blocks.to_vec();
    let mut levels = Vec::new();
    loop {
        let stats = single_level_stats(&working)?;
        levels.push(Level {
            mean: stats.mean,
            stderr: stats.stderr,
            block_count: working.len(),
        });

        collate_in_place(&mut working);
        if working.len() <= MIN_LEVEL_BLOCKS {
            break;
        }
    }

    Ok(Ladder { levels })
}
