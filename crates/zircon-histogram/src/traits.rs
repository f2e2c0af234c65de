//! Traits for histogram construction

use crate::types::Histogram;
use zircon_core::Result;

/// A strategy for building a histogram from a sample
pub trait HistogramBuilder {
    /// Build a histogram from an unsorted sample
    fn build(&self, sample: &[f64]) -> Result<Histogram>;

    /// Build a histogram from an already-sorted sample
    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram>;

    /// The number of bins this builder aims for, if fixed
    fn target_bins(&self) -> Option<usize> {
        None
    }
}
