//! Result types for rolling bootstrap estimation

use std::fmt;
use zircon_bootstrap::ConfidenceInterval;
use zircon_core::stats;

/// Bootstrap result for one window position
///
/// Immutable after creation: the window center, the count of non-missing
/// observations, the median point estimate, and the two confidence bands.
/// A window with no usable data yields the all-NaN sentinel row from
/// [`WindowEstimate::undefined`], never an error and never a skipped row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowEstimate {
    /// Window center, in Ma
    pub center: f64,
    /// Number of non-missing observations in the window
    pub n_obs: usize,
    /// Median of the window sample
    pub median: f64,
    /// Lower bound of the narrow (1-sigma) band
    pub narrow_low: f64,
    /// Upper bound of the narrow (1-sigma) band
    pub narrow_high: f64,
    /// Lower bound of the wide band
    pub wide_low: f64,
    /// Upper bound of the wide band
    pub wide_high: f64,
}

impl WindowEstimate {
    /// Build an estimate from the two bootstrap intervals
    ///
    /// Both intervals carry the same point estimate (the median of the
    /// window sample); the narrow one is taken as authoritative.
    pub fn from_intervals(
        center: f64,
        n_obs: usize,
        narrow: ConfidenceInterval,
        wide: ConfidenceInterval,
    ) -> Self {
        Self {
            center,
            n_obs,
            median: narrow.estimate,
            narrow_low: narrow.lower,
            narrow_high: narrow.upper,
            wide_low: wide.lower,
            wide_high: wide.upper,
        }
    }

    /// The sentinel row for a window with no usable observations
    pub fn undefined(center: f64) -> Self {
        Self {
            center,
            n_obs: 0,
            median: f64::NAN,
            narrow_low: f64::NAN,
            narrow_high: f64::NAN,
            wide_low: f64::NAN,
            wide_high: f64::NAN,
        }
    }

    /// Whether this row is the all-NaN sentinel
    pub fn is_undefined(&self) -> bool {
        self.median.is_nan()
            && self.narrow_low.is_nan()
            && self.narrow_high.is_nan()
            && self.wide_low.is_nan()
            && self.wide_high.is_nan()
    }
}

impl fmt::Display for WindowEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_undefined() {
            write!(f, "{:.1} Ma: no data", self.center)
        } else {
            write!(
                f,
                "{:.1} Ma: median {:.4} [{:.4}, {:.4}] ([{:.4}, {:.4}]), n={}",
                self.center,
                self.median,
                self.narrow_low,
                self.narrow_high,
                self.wide_low,
                self.wide_high,
                self.n_obs
            )
        }
    }
}

/// Summary of the median track of a series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    /// Mean of the defined window medians
    pub mean: f64,
    /// Sample standard deviation of the defined window medians
    pub std_dev: f64,
    /// Relative standard deviation, in percent
    pub relative_std_pct: f64,
    /// Number of windows with a defined median
    pub defined_windows: usize,
}

/// The ordered output of a rolling bootstrap run
///
/// One [`WindowEstimate`] per window start, in generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingSeries {
    estimates: Vec<WindowEstimate>,
}

impl RollingSeries {
    /// Wrap an ordered sequence of window estimates
    pub fn new(estimates: Vec<WindowEstimate>) -> Self {
        Self { estimates }
    }

    /// The estimates, in window order
    pub fn estimates(&self) -> &[WindowEstimate] {
        &self.estimates
    }

    /// Number of windows
    pub fn len(&self) -> usize {
        self.estimates.len()
    }

    /// Whether the series has no windows
    pub fn is_empty(&self) -> bool {
        self.estimates.is_empty()
    }

    /// Iterate over the estimates in window order
    pub fn iter(&self) -> std::slice::Iter<'_, WindowEstimate> {
        self.estimates.iter()
    }

    /// Window centers, in order
    pub fn centers(&self) -> Vec<f64> {
        self.estimates.iter().map(|e| e.center).collect()
    }

    /// Window medians, in order (NaN for sentinel rows)
    pub fn medians(&self) -> Vec<f64> {
        self.estimates.iter().map(|e| e.median).collect()
    }

    /// Mean, standard deviation and relative standard deviation of the
    /// defined window medians
    ///
    /// Sentinel rows are excluded. With no defined windows all three
    /// figures are NaN.
    pub fn summary(&self) -> SeriesSummary {
        let defined: Vec<f64> = self
            .estimates
            .iter()
            .map(|e| e.median)
            .filter(|m| !m.is_nan())
            .collect();

        if defined.is_empty() {
            return SeriesSummary {
                mean: f64::NAN,
                std_dev: f64::NAN,
                relative_std_pct: f64::NAN,
                defined_windows: 0,
            };
        }

        let mean = stats::mean(&defined);
        let std_dev = stats::std_dev(&defined);
        SeriesSummary {
            mean,
            std_dev,
            relative_std_pct: 100.0 * std_dev / mean,
            defined_windows: defined.len(),
        }
    }
}

impl<'a> IntoIterator for &'a RollingSeries {
    type Item = &'a WindowEstimate;
    type IntoIter = std::slice::Iter<'a, WindowEstimate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
