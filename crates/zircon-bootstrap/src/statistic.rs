//! Sample statistics that can be bootstrapped

use zircon_core::stats;

/// A statistic computed from a sample
///
/// The bootstrap engine recomputes the statistic on each resample, so
/// implementations must be cheap and must not assume sorted input.
pub trait Statistic: Clone + Send + Sync {
    /// Compute the statistic for a sample
    ///
    /// Called with non-empty samples only; the engine rejects empty input
    /// before resampling.
    fn compute(&self, sample: &[f64]) -> f64;

    /// Statistic name for documentation
    fn name(&self) -> &'static str;
}

/// The sample median
///
/// The statistic bootstrapped throughout this workspace: robust to the
/// skewed, outlier-prone distributions of trace-element ratios.
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl Statistic for Median {
    fn compute(&self, sample: &[f64]) -> f64 {
        stats::median(sample)
    }

    fn name(&self) -> &'static str {
        "Median"
    }
}
