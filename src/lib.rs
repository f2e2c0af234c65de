//! Bootstrap analysis toolkit for detrital zircon U-Pb + trace-element
//! compilations.
//!
//! This crate re-exports the workspace members:
//!
//! - [`zircon_core`]: shared error type, the [`zircon_core::Observation`]
//!   record, slice statistics helpers
//! - [`zircon_bootstrap`]: bootstrap resampling of a statistic with
//!   percentile confidence intervals
//! - [`zircon_rolling`]: rolling-window bootstrap over the age axis
//! - [`zircon_histogram`]: fixed-width histograms of zircon ages
//! - [`zircon_polars`]: polars `DataFrame` extension trait tying it together
//!
//! # Example
//!
//! ```rust,ignore
//! use polars::prelude::*;
//! use zircon_trace::zircon_polars::ZirconStatsExt;
//! use zircon_trace::zircon_rolling::RollingConfig;
//!
//! let df = df!["Age" => ages, "Eu/Eu*" => ratios]?;
//! let series = df.rolling_bootstrap("Age", "Eu/Eu*", &RollingConfig::default())?;
//! ```

pub use zircon_bootstrap;
pub use zircon_core;
pub use zircon_histogram;
pub use zircon_polars;
pub use zircon_rolling;
