pub mod generators;
pub mod stream;

pub use stream::SampleStream;
