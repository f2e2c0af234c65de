//! Utility functions for working with data slices

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use zircon_core::stats::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater, // NaN goes after non-NaN
        (false, true) => std::cmp::Ordering::Less,    // non-NaN goes before NaN
        (false, false) => a.partial_cmp(b).unwrap(),  // Safe for non-NaN values
    });
    sorted
}

/// Median of an already-sorted slice
///
/// Even lengths average the two middle elements. Returns NaN for an empty
/// slice.
pub fn sorted_median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Median of an unsorted slice
///
/// Returns NaN for an empty slice.
///
/// # Examples
///
/// ```rust
/// use zircon_core::stats::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
pub fn median(data: &[f64]) -> f64 {
    sorted_median(&sorted(data))
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Calculate the sample standard deviation
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use zircon_core::stats::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}
