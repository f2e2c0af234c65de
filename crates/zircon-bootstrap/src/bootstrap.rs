//! Bootstrap resampling engine
//!
//! Draws samples-with-replacement from an observed sample, recomputes a
//! statistic on each draw, and hands the resulting distribution to a
//! [`BootstrapMethod`] for interval construction.

use crate::method::BootstrapMethod;
use crate::statistic::Statistic;
use crate::types::{ConfidenceInterval, ConfidenceLevel};
use rand::prelude::*;
use tracing::{debug, instrument};
use zircon_core::{Error, Result};

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 500;

/// Bootstrap engine for a single sample
///
/// Resamples are the same size as the input sample, drawn with replacement.
/// With a seed the engine is fully deterministic: resample `i` uses an RNG
/// seeded from `seed.wrapping_add(i)`, so reruns are bit-identical.
/// Without a seed, each call draws a fresh base seed from `thread_rng`.
#[derive(Debug, Clone)]
pub struct Bootstrap<S, M> {
    statistic: S,
    method: M,
    n_resamples: usize,
    level: ConfidenceLevel,
    seed: Option<u64>,
}

impl<S, M> Bootstrap<S, M>
where
    S: Statistic,
    M: BootstrapMethod,
{
    /// Create a new bootstrap engine
    pub fn new(statistic: S, method: M) -> Self {
        Self {
            statistic,
            method,
            n_resamples: DEFAULT_RESAMPLES,
            level: ConfidenceLevel::NINETY_FIVE,
            seed: None,
        }
    }

    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        assert!(n_resamples > 0, "Number of resamples must be positive");
        self.n_resamples = n_resamples;
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, level: ConfidenceLevel) -> Self {
        self.level = level;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The resampled statistic distribution
    ///
    /// Draws `n_resamples` independent resamples of `sample.len()` values
    /// each and returns the statistic of every resample, in draw order
    /// (unsorted).
    #[instrument(skip(self, sample), fields(n = sample.len(), n_resamples = self.n_resamples))]
    pub fn distribution(&self, sample: &[f64]) -> Result<Vec<f64>> {
        if sample.is_empty() {
            return Err(Error::empty_input("bootstrap"));
        }

        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        let n = sample.len();

        debug!(
            "Generating {} bootstrap resamples of size {}",
            self.n_resamples, n
        );

        let estimates = (0..self.n_resamples)
            .map(|i| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
                let resampled: Vec<f64> = (0..n).map(|_| sample[rng.gen_range(0..n)]).collect();
                self.statistic.compute(&resampled)
            })
            .collect();

        Ok(estimates)
    }

    /// Compute a confidence interval for the statistic
    ///
    /// The point estimate is the statistic of `sample` itself; the bounds
    /// come from the resample distribution via the configured method.
    pub fn confidence_interval(&self, sample: &[f64]) -> Result<ConfidenceInterval> {
        let bootstrap_estimates = self.distribution(sample)?;
        let original_estimate = self.statistic.compute(sample);

        debug!("Bootstrap completed, calculating confidence interval");

        self.method
            .calculate_interval(&bootstrap_estimates, original_estimate, self.level)
    }
}
