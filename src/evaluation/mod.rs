mod estimators;

pub use estimators::{BasicEstimator, Estimator};
