//! Rolling bootstrap over DataFrame columns

use super::column_as_options;
use crate::Result;
use polars::prelude::*;
use zircon_core::Observation;
use zircon_rolling::{RollingBootstrap, RollingConfig, RollingSeries};

pub(crate) fn rolling_bootstrap_impl(
    df: &DataFrame,
    age_col: &str,
    value_col: &str,
    config: &RollingConfig,
) -> Result<DataFrame> {
    let ages = column_as_options(df, age_col)?;
    let values = column_as_options(df, value_col)?;

    // Rows without an age cannot be positioned in any window
    let observations: Vec<Observation> = ages
        .into_iter()
        .zip(values)
        .filter_map(|(age, value)| age.map(|age| Observation { age, value }))
        .collect();

    let estimator = RollingBootstrap::new(config.clone())?;
    let series = estimator.estimate(&observations)?;

    series_to_frame(&series)
}

/// Lay the result series out as the output table
fn series_to_frame(series: &RollingSeries) -> Result<DataFrame> {
    let n = series.len();
    let mut age = Vec::with_capacity(n);
    let mut median = Vec::with_capacity(n);
    let mut ic1_low = Vec::with_capacity(n);
    let mut ic1_high = Vec::with_capacity(n);
    let mut ic2_low = Vec::with_capacity(n);
    let mut ic2_high = Vec::with_capacity(n);
    let mut n_obs = Vec::with_capacity(n);

    for row in series {
        age.push(row.center);
        median.push(row.median);
        ic1_low.push(row.narrow_low);
        ic1_high.push(row.narrow_high);
        ic2_low.push(row.wide_low);
        ic2_high.push(row.wide_high);
        n_obs.push(row.n_obs as u32);
    }

    let columns = vec![
        Series::new("age".into(), age).into(),
        Series::new("median".into(), median).into(),
        Series::new("ic1_low".into(), ic1_low).into(),
        Series::new("ic1_high".into(), ic1_high).into(),
        Series::new("ic2_low".into(), ic2_low).into(),
        Series::new("ic2_high".into(), ic2_high).into(),
        Series::new("n_obs".into(), n_obs).into(),
    ];

    Ok(DataFrame::new(columns)?)
}
