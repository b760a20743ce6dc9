mod collate;
mod estimate;
mod ladder;
mod level_stats;

pub use collate::{collate, collate_in_place};
pub use estimate::{ConvergencePolicy, Estimate, final_estimate};
pub use ladder::{Ladder, Level, MIN_LEVEL_BLOCKS, build_ladder};
pub use level_stats::{LevelStats, single_level_stats};
