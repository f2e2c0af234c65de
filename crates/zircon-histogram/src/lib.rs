//! Fixed-width histograms of zircon age distributions
//!
//! Bins a compilation's U-Pb ages into equal-width bins and reports counts
//! and relative frequencies per bin: the numbers behind an age-spectrum
//! plot.
//!
//! # Example
//!
//! ```rust
//! use zircon_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let ages = vec![120.0, 1850.0, 1900.0, 2700.0, 2710.0, 2750.0];
//! let hist = FixedWidthBuilder::new(4).build(&ages).unwrap();
//!
//! assert_eq!(hist.counts().iter().sum::<usize>(), ages.len());
//! ```

mod builders;
mod traits;
mod types;

pub use builders::FixedWidthBuilder;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};
