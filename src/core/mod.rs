pub mod error;
pub mod scalar;

pub use error::BinningError;
pub use scalar::Scalar;
