//! Polars integration for zircon trace-element bootstrap analysis
//!
//! This crate provides a simple interface for running the rolling bootstrap
//! estimator and age histograms directly on Polars DataFrames through a
//! single extension trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use zircon_polars::ZirconStatsExt;
//! use zircon_rolling::RollingConfig;
//!
//! let df = df!["Age" => ages, "Eu/Eu*" => ratios]?;
//!
//! let config = RollingConfig::default().with_seed(42);
//! let series = df.rolling_bootstrap("Age", "Eu/Eu*", &config)?;
//! let spectrum = df.age_histogram("Age", Some("Eu/Eu*"), 160)?;
//! ```

mod error;
mod methods;
mod traits;

pub use error::{Error, Result};
pub use traits::ZirconStatsExt;

// Re-export the configuration callers need at this boundary
pub use zircon_rolling::RollingConfig;

use polars::prelude::*;

impl ZirconStatsExt for DataFrame {
    fn rolling_bootstrap(
        &self,
        age_col: &str,
        value_col: &str,
        config: &RollingConfig,
    ) -> Result<DataFrame> {
        methods::rolling::rolling_bootstrap_impl(self, age_col, value_col, config)
    }

    fn age_histogram(
        &self,
        age_col: &str,
        require_col: Option<&str>,
        num_bins: usize,
    ) -> Result<DataFrame> {
        methods::histogram::age_histogram_impl(self, age_col, require_col, num_bins)
    }
}
