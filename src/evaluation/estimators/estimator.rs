/// Online scalar estimator (e.g., streaming mean).
///
/// Implementations accept values incrementally via [`add`](Estimator::add)
/// and expose the current estimate via [`estimation`](Estimator::estimation).
pub trait Estimator<T = f64> {
    /// Incorporates a new observation.
    fn add(&mut self, v: T);

    /// Returns the current estimate, NaN when there is none yet.
    fn estimation(&self) -> T;
}
