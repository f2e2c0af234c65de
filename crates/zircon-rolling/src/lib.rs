//! Rolling-window bootstrap estimation over zircon age series
//!
//! This crate slides a fixed-width window across a compilation of zircon
//! observations ordered on the age axis and, for each window position,
//! bootstraps the median of a trace-element value with two confidence
//! bands: a narrow 1-sigma band and a wide near-total band. The output is
//! one [`WindowEstimate`] per window position, collected in scan order in
//! a [`RollingSeries`].
//!
//! Windows with no usable observations degrade to all-NaN sentinel rows;
//! the scan itself never fails.
//!
//! # Example
//!
//! ```rust
//! use zircon_core::Observation;
//! use zircon_rolling::{RollingBootstrap, RollingConfig};
//!
//! let observations: Vec<Observation> = (0..200)
//!     .map(|i| Observation::new(i as f64 * 20.0, 0.3 + (i % 7) as f64 * 0.01))
//!     .collect();
//!
//! let config = RollingConfig::default()
//!     .with_scan_range(0.0, 4000.0)
//!     .with_resamples(200)
//!     .with_seed(42);
//! let series = RollingBootstrap::new(config)?.estimate(&observations)?;
//!
//! assert_eq!(series.len(), 200);
//! # Ok::<(), zircon_core::Error>(())
//! ```
//!
//! With the `parallel` feature, windows are processed on the rayon thread
//! pool; the series order is unchanged.

mod config;
mod estimator;
mod types;

pub use config::{
    RollingConfig, DEFAULT_NARROW_TAIL_MASS, DEFAULT_SCAN_END, DEFAULT_SCAN_START, DEFAULT_STEP,
    DEFAULT_WIDE_TAIL_MASS, DEFAULT_WINDOW_WIDTH,
};
pub use estimator::RollingBootstrap;
pub use types::{RollingSeries, SeriesSummary, WindowEstimate};
