//! Common test utilities for zircon-polars tests

use polars::prelude::*;
use rand::prelude::*;
use rand_distr::LogNormal;

/// A small synthetic compilation with an age and a ratio column
pub fn synthetic_df(n: usize, seed: u64) -> DataFrame {
    let mut rng = StdRng::seed_from_u64(seed);
    let ratio_dist = LogNormal::new(-1.2, 0.4).unwrap();

    let ages: Vec<f64> = (0..n).map(|_| rng.gen_range(-100.0..4400.0)).collect();
    let ratios: Vec<Option<f64>> = (0..n)
        .map(|_| {
            if rng.gen_bool(0.1) {
                None
            } else {
                Some(ratio_dist.sample(&mut rng))
            }
        })
        .collect();

    df!["Age" => ages, "Eu/Eu*" => ratios].unwrap()
}

/// Extract a whole f64 column from a result DataFrame
pub fn extract_f64_column(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}
