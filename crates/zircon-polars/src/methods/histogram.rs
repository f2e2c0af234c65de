//! Age histograms over DataFrame columns

use super::column_as_options;
use crate::{Error, Result};
use polars::prelude::*;
use zircon_histogram::{FixedWidthBuilder, HistogramBuilder};

pub(crate) fn age_histogram_impl(
    df: &DataFrame,
    age_col: &str,
    require_col: Option<&str>,
    num_bins: usize,
) -> Result<DataFrame> {
    if num_bins == 0 {
        return Err(Error::InvalidParameter(
            "Number of bins must be positive".to_string(),
        ));
    }

    let ages = column_as_options(df, age_col)?;

    let retained: Vec<f64> = match require_col {
        Some(name) => {
            let required = column_as_options(df, name)?;
            ages.into_iter()
                .zip(required)
                .filter_map(|(age, req)| match (age, req) {
                    (Some(age), Some(_)) => Some(age),
                    _ => None,
                })
                .collect()
        }
        None => ages.into_iter().flatten().collect(),
    };

    let hist = FixedWidthBuilder::new(num_bins).build(&retained)?;
    let total = hist.total_count();

    let mut bin_left = Vec::with_capacity(hist.len());
    let mut bin_right = Vec::with_capacity(hist.len());
    let mut bin_center = Vec::with_capacity(hist.len());
    let mut count = Vec::with_capacity(hist.len());
    let mut frequency = Vec::with_capacity(hist.len());

    for bin in hist.bins() {
        bin_left.push(bin.left);
        bin_right.push(bin.right);
        bin_center.push(bin.center());
        count.push(bin.count as u32);
        frequency.push(bin.frequency(total));
    }

    let columns = vec![
        Series::new("bin_left".into(), bin_left).into(),
        Series::new("bin_right".into(), bin_right).into(),
        Series::new("bin_center".into(), bin_center).into(),
        Series::new("count".into(), count).into(),
        Series::new("frequency".into(), frequency).into(),
    ];

    Ok(DataFrame::new(columns)?)
}
