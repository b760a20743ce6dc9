pub mod binning;
pub mod config;
pub mod core;
pub mod evaluation;
pub mod observables;
pub mod report;
pub mod streams;
pub mod tasks;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::binning::{ConvergencePolicy, Estimate, Ladder, Level};
pub use crate::config::AccumulatorConfig;
pub use crate::core::{BinningError, Scalar};
pub use crate::observables::Accumulator;
