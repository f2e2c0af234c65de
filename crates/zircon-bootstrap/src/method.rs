//! Bootstrap method implementations
//!
//! A bootstrap method turns a distribution of resampled statistics into a
//! confidence interval.

use crate::types::{ConfidenceInterval, ConfidenceLevel};
use zircon_core::{Error, Result};

/// Method for calculating confidence intervals from bootstrap estimates
///
/// This trait defines how to construct a confidence interval from
/// bootstrap estimates. Different methods (percentile, basic, etc.)
/// implement this trait.
pub trait BootstrapMethod: Clone + Send + Sync {
    /// Calculate confidence interval from bootstrap distribution
    ///
    /// `original_estimate` is the statistic of the original sample, not of
    /// the resample distribution; it is carried into the interval unchanged.
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval>;

    /// Method name for documentation
    fn name(&self) -> &'static str;
}

/// Percentile bootstrap method
///
/// The simplest bootstrap method. Uses the empirical percentiles of the
/// bootstrap distribution to construct the confidence interval: the bounds
/// sit at the `alpha/2` and `1 - alpha/2` quantiles of the sorted
/// resampled statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl BootstrapMethod for PercentileBootstrap {
    fn calculate_interval(
        &self,
        bootstrap_estimates: &[f64],
        original_estimate: f64,
        level: ConfidenceLevel,
    ) -> Result<ConfidenceInterval> {
        if bootstrap_estimates.is_empty() {
            return Err(Error::InvalidInput("No bootstrap estimates".to_string()));
        }

        let sorted = zircon_core::stats::sorted(bootstrap_estimates);

        let alpha = level.alpha();
        let lower_idx = ((alpha / 2.0) * sorted.len() as f64) as usize;
        let upper_idx = ((1.0 - alpha / 2.0) * sorted.len() as f64) as usize;

        let lower_idx = lower_idx.min(sorted.len() - 1);
        let upper_idx = upper_idx.min(sorted.len() - 1);

        Ok(ConfidenceInterval::new(
            sorted[lower_idx],
            sorted[upper_idx],
            original_estimate,
            level.value(),
        ))
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_bootstrap() {
        let bootstrap_estimates = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let original_estimate = 5.5;

        let method = PercentileBootstrap;
        let ci = method
            .calculate_interval(&bootstrap_estimates, original_estimate, 0.90.into())
            .unwrap();

        // For 90% CI with 10 samples, should use indices 0 and 9
        assert_eq!(ci.lower, 1.0);
        assert_eq!(ci.upper, 10.0);
        assert_eq!(ci.estimate, 5.5);
    }

    #[test]
    fn test_percentile_bootstrap_narrow_level() {
        let bootstrap_estimates: Vec<f64> = (1..=100).map(|i| i as f64).collect();

        let method = PercentileBootstrap;
        let level = ConfidenceLevel::from_tail_mass(0.15865).unwrap();
        let ci = method
            .calculate_interval(&bootstrap_estimates, 50.5, level)
            .unwrap();

        // Tail mass 0.15865 over 100 sorted estimates: indices 15 and 84
        assert_eq!(ci.lower, 16.0);
        assert_eq!(ci.upper, 85.0);
    }

    #[test]
    fn test_percentile_bootstrap_empty_estimates() {
        let method = PercentileBootstrap;
        let result = method.calculate_interval(&[], 0.0, ConfidenceLevel::NINETY_FIVE);
        assert!(result.is_err());
    }

    #[test]
    fn test_percentile_bootstrap_single_estimate() {
        let method = PercentileBootstrap;
        let ci = method
            .calculate_interval(&[3.0], 3.0, ConfidenceLevel::NINETY_FIVE)
            .unwrap();
        assert_eq!(ci.lower, 3.0);
        assert_eq!(ci.upper, 3.0);
    }
}
