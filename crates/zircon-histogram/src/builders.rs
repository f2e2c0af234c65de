//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use zircon_core::{stats, Result};

/// Fixed-width histogram builder
///
/// Creates a histogram with a specified number of equal-width bins over
/// the sample range. The published age histograms use 160 bins over the
/// age axis.
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    /// Create a new fixed-width histogram builder
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        self.build_sorted(&stats::sorted(sample))
    }

    fn build_sorted(&self, sorted_sample: &[f64]) -> Result<Histogram> {
        if sorted_sample.is_empty() {
            return Ok(Histogram::new(vec![], 0, 0.0, 0.0));
        }

        // O(1) min/max from sorted data
        let min = sorted_sample[0];
        let max = sorted_sample[sorted_sample.len() - 1];

        if (max - min).abs() < 1e-10 {
            // All values are the same
            let bin = HistogramBin::new(min, max, sorted_sample.len());
            return Ok(Histogram::new(vec![bin], sorted_sample.len(), min, max));
        }

        let width = (max - min) / self.num_bins as f64;
        let mut bins = Vec::with_capacity(self.num_bins);

        // Create bins
        for i in 0..self.num_bins {
            let left = min + i as f64 * width;
            let right = if i == self.num_bins - 1 {
                max // Ensure last bin includes max
            } else {
                min + (i + 1) as f64 * width
            };
            bins.push(HistogramBin::new(left, right, 0));
        }

        // Count values in each bin - single pass through sorted data
        let mut current_bin = 0;

        for &value in sorted_sample {
            // Move to the correct bin
            while current_bin < self.num_bins - 1 && value >= bins[current_bin].right {
                current_bin += 1;
            }

            if current_bin < self.num_bins {
                bins[current_bin].count += 1;
            }
        }

        Ok(Histogram::new(
            bins,
            sorted_sample.len(),
            min,
            max,
        ))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.num_bins)
    }
}
