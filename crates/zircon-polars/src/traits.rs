//! Core traits for zircon analysis on Polars DataFrames

use crate::Result;
use polars::prelude::*;
use zircon_rolling::RollingConfig;

/// Extension trait for zircon bootstrap analysis on Polars DataFrames
pub trait ZirconStatsExt {
    /// Rolling bootstrap of a trace-element column over the age axis
    ///
    /// # Arguments
    /// * `age_col` - Column holding zircon U-Pb ages, in Ma
    /// * `value_col` - Column holding the trace-element value to bootstrap
    /// * `config` - Window geometry, resample count, tail masses, seed
    ///
    /// Both columns accept any numeric dtype; integers are cast to f64.
    /// Null and NaN entries of `value_col` count as missing and are dropped
    /// per window; rows with a null/NaN age are excluded up front (they
    /// cannot be positioned in any window). A missing column is an
    /// `InvalidColumn` error naming it.
    ///
    /// # Returns
    /// DataFrame with one row per window position, in scan order, with
    /// columns `{age, median, ic1_low, ic1_high, ic2_low, ic2_high, n_obs}`.
    /// `ic1` is the narrow band, `ic2` the wide one; windows without data
    /// carry NaN in all five statistics columns.
    fn rolling_bootstrap(
        &self,
        age_col: &str,
        value_col: &str,
        config: &RollingConfig,
    ) -> Result<DataFrame>;

    /// Histogram of the age column
    ///
    /// # Arguments
    /// * `age_col` - Column holding zircon U-Pb ages, in Ma
    /// * `require_col` - Optional column whose value must be present for a
    ///   row to be counted (the published age spectra only bin grains that
    ///   also carry the trace-element measurement)
    /// * `num_bins` - Number of equal-width bins over the age range
    ///
    /// # Returns
    /// DataFrame with columns
    /// `{bin_left, bin_right, bin_center, count, frequency}`.
    fn age_histogram(
        &self,
        age_col: &str,
        require_col: Option<&str>,
        num_bins: usize,
    ) -> Result<DataFrame>;
}
