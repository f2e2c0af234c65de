//! Bootstrap confidence intervals for zircon trace-element statistics
//!
//! This crate implements single-sample bootstrap resampling: draw
//! samples-with-replacement from the observed values, recompute a statistic
//! on each draw, and read confidence bounds off the empirical distribution
//! of resampled statistics.
//!
//! The point estimate reported with each interval is always the statistic
//! of the *original* sample, never of the resample distribution.
//!
//! # Example
//!
//! ```rust
//! use zircon_bootstrap::{Bootstrap, ConfidenceLevel, Median, PercentileBootstrap};
//!
//! let ratios = vec![0.21, 0.35, 0.28, 0.44, 0.31, 0.25, 0.39];
//!
//! let ci = Bootstrap::new(Median, PercentileBootstrap)
//!     .with_resamples(1000)
//!     .with_confidence_level(ConfidenceLevel::from_tail_mass(0.15865).unwrap())
//!     .with_seed(42)
//!     .confidence_interval(&ratios)
//!     .unwrap();
//!
//! assert!(ci.contains(ci.estimate));
//! ```

mod bootstrap;
mod method;
mod statistic;
mod types;

pub use bootstrap::{Bootstrap, DEFAULT_RESAMPLES};
pub use method::{BootstrapMethod, PercentileBootstrap};
pub use statistic::{Median, Statistic};
pub use types::{ConfidenceInterval, ConfidenceLevel};
