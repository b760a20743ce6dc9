use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::BinningError;
use crate::streams::stream::SampleStream;

/// Half-width of a uniform distribution with unit variance.
const UNIT_UNIFORM_HALF_WIDTH: f64 = 1.732_050_807_568_877_2;

/// First-order autoregressive series `x' = mu + rho (x - mu) + sigma * eta`.
///
/// `eta` is uniform noise with zero mean and unit variance. The stationary
/// variance is `sigma^2 / (1 - rho^2)` and the integrated autocorrelation time
/// `(1 + rho) / (2 (1 - rho))`, which makes it a convenient stand-in for a
/// Markov chain observable with known statistics. The chain starts at `mu`.
#[derive(Debug)]
pub struct Ar1Generator {
    seed: u64,
    rng: StdRng,
    mu: f64,
    rho: f64,
    sigma: f64,
    current: f64,
    max_samples: Option<usize>,
    produced: usize,
}

impl Ar1Generator {
    pub fn new(
        mu: f64,
        rho: f64,
        sigma: f64,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self, BinningError> {
        if !mu.is_finite() {
            return Err(BinningError::InvalidConfiguration(
                "AR(1) mean must be finite".into(),
            ));
        }
        if rho.is_nan() || rho.abs() >= 1.0 {
            return Err(BinningError::InvalidConfiguration(format!(
                "AR(1) coefficient must be in (-1, 1), got {rho}"
            )));
        }
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(BinningError::InvalidConfiguration(format!(
                "AR(1) noise scale must be finite and >= 0, got {sigma}"
            )));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            mu,
            rho,
            sigma,
            current: mu,
            max_samples,
            produced: 0,
        })
    }

    /// Integrated autocorrelation time of the series.
    pub fn tau_int(&self) -> f64 {
        0.5 * (1.0 + self.rho) / (1.0 - self.rho)
    }

    /// Standard deviation of the stationary distribution.
    pub fn stationary_std(&self) -> f64 {
        self.sigma / (1.0 - self.rho * self.rho).sqrt()
    }

    #[inline]
    fn noise(&mut self) -> f64 {
        self.rng
            .random_range(-UNIT_UNIFORM_HALF_WIDTH..UNIT_UNIFORM_HALF_WIDTH)
    }
}

impl SampleStream<f64> for Ar1Generator {
    fn has_more_samples(&self) -> bool {
        self.max_samples.map_or(true, |max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<f64> {
        if !self.has_more_samples() {
            return None;
        }
        let eta = self.noise();
        self.current = self.mu + self.rho * (self.current - self.mu) + self.sigma * eta;
        self.produced += 1;
        Some(self.current)
    }

    fn restart(&mut self) -> Result<(), BinningError> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.current = self.mu;
        self.produced = 0;
        Ok(())
    }
}
