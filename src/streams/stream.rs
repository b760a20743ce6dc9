use crate::core::BinningError;

/// Pull-based source of scalar samples, e.g. one observable of a Markov chain.
///
/// Implementations may be finite (recorded series) or unbounded generators.
pub trait SampleStream<T = f64> {
    /// Indicates whether the stream *may* produce more samples.
    ///
    /// Must be cheap and side effect free. If it returns `false`, a subsequent
    /// call to [`next_sample`](SampleStream::next_sample) must return `None`.
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` once the stream is exhausted.
    fn next_sample(&mut self) -> Option<T>;

    /// Resets the stream to its initial state.
    ///
    /// Generators re-seed their RNG so the same sequence is produced again.
    fn restart(&mut self) -> Result<(), BinningError>;
}
