//! Tests for the rolling bootstrap DataFrame method

mod common;

use common::{extract_f64_column, synthetic_df};
use polars::prelude::*;
use zircon_polars::{RollingConfig, ZirconStatsExt};

#[test]
fn test_output_table_shape() {
    let df = synthetic_df(500, 1);
    let config = RollingConfig::default().with_resamples(20).with_seed(1);

    let result = df.rolling_bootstrap("Age", "Eu/Eu*", &config).unwrap();

    // One row per window start in the default scan, seven columns
    assert_eq!(result.shape(), (238, 7));
    for name in [
        "age", "median", "ic1_low", "ic1_high", "ic2_low", "ic2_high", "n_obs",
    ] {
        assert!(result.column(name).is_ok(), "missing column {name}");
    }
}

#[test]
fn test_window_centers_follow_the_scan() {
    let df = synthetic_df(200, 2);
    let config = RollingConfig::default()
        .with_scan_range(0.0, 100.0)
        .with_step(20.0)
        .with_window_width(500.0)
        .with_resamples(20)
        .with_seed(2);

    let result = df.rolling_bootstrap("Age", "Eu/Eu*", &config).unwrap();
    let centers = extract_f64_column(&result, "age");

    assert_eq!(centers, vec![250.0, 270.0, 290.0, 310.0, 330.0]);
}

#[test]
fn test_bands_bracket_the_median() {
    let df = synthetic_df(2000, 3);
    let config = RollingConfig::default().with_resamples(200).with_seed(3);

    let result = df.rolling_bootstrap("Age", "Eu/Eu*", &config).unwrap();

    let median = extract_f64_column(&result, "median");
    let ic1_low = extract_f64_column(&result, "ic1_low");
    let ic1_high = extract_f64_column(&result, "ic1_high");
    let ic2_low = extract_f64_column(&result, "ic2_low");
    let ic2_high = extract_f64_column(&result, "ic2_high");

    for i in 0..median.len() {
        if median[i].is_nan() {
            assert!(ic1_low[i].is_nan() && ic1_high[i].is_nan());
            assert!(ic2_low[i].is_nan() && ic2_high[i].is_nan());
        } else {
            assert!(ic1_low[i] <= median[i] && median[i] <= ic1_high[i]);
            assert!(ic2_low[i] <= median[i] && median[i] <= ic2_high[i]);
        }
    }
}

#[test]
fn test_missing_values_and_ages_are_excluded() {
    let df = df![
        "Age" => [Some(100.0), Some(110.0), None, Some(120.0)],
        "Eu/Eu*" => [Some(0.2), None, Some(0.4), Some(0.4)],
    ]
    .unwrap();
    let config = RollingConfig::default()
        .with_scan_range(0.0, 1.0)
        .with_window_width(500.0)
        .with_resamples(100)
        .with_seed(4);

    let result = df.rolling_bootstrap("Age", "Eu/Eu*", &config).unwrap();
    assert_eq!(result.height(), 1);

    // Only the two rows with both fields survive
    let n_obs = result.column("n_obs").unwrap().u32().unwrap().get(0).unwrap();
    assert_eq!(n_obs, 2);
    let median = extract_f64_column(&result, "median")[0];
    assert!((median - 0.3).abs() < 1e-12);
}

#[test]
fn test_integer_age_column_is_accepted() {
    let df = df![
        "Age" => [100i64, 150, 200],
        "Eu/Eu*" => [0.2, 0.3, 0.4],
    ]
    .unwrap();
    let config = RollingConfig::default()
        .with_scan_range(0.0, 1.0)
        .with_window_width(500.0)
        .with_resamples(50)
        .with_seed(5);

    let result = df.rolling_bootstrap("Age", "Eu/Eu*", &config).unwrap();
    let median = extract_f64_column(&result, "median")[0];
    assert!((median - 0.3).abs() < 1e-12);
}

#[test]
fn test_seeded_runs_match() {
    let df = synthetic_df(600, 6);
    let config = RollingConfig::default().with_resamples(50).with_seed(99);

    let a = df.rolling_bootstrap("Age", "Eu/Eu*", &config).unwrap();
    let b = df.rolling_bootstrap("Age", "Eu/Eu*", &config).unwrap();

    for name in ["median", "ic1_low", "ic1_high", "ic2_low", "ic2_high"] {
        let xs = df_column_with_nans(&a, name);
        let ys = df_column_with_nans(&b, name);
        assert_eq!(xs.len(), ys.len());
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert!(x == y || (x.is_nan() && y.is_nan()));
        }
    }
}

fn df_column_with_nans(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect()
}
