//! Method implementations behind the extension trait

pub(crate) mod histogram;
pub(crate) mod rolling;

use crate::{Error, Result};
use polars::prelude::*;

/// Extract a numeric column as `Option<f64>` values
///
/// Accepts float and integer dtypes, casting to f64 like the rest of the
/// workspace; anything else is a `TypeMismatch`. Nulls map to `None`, and
/// NaN entries that survived a float column are normalized to `None` too,
/// so downstream code has a single notion of "missing".
pub(crate) fn column_as_options(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let column = df
        .column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))?;

    let casted = match column.dtype() {
        DataType::Float64 => column.clone(),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8 => column.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    let ca = casted.f64()?;
    Ok(ca
        .into_iter()
        .map(|opt| opt.filter(|v| v.is_finite()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_as_options_float() {
        let df = df!["v" => [Some(1.0), None, Some(f64::NAN), Some(2.0)]].unwrap();
        let values = column_as_options(&df, "v").unwrap();
        assert_eq!(values, vec![Some(1.0), None, None, Some(2.0)]);
    }

    #[test]
    fn test_column_as_options_int_is_cast() {
        let df = df!["v" => [1i64, 2, 3]].unwrap();
        let values = column_as_options(&df, "v").unwrap();
        assert_eq!(values, vec![Some(1.0), Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_missing_column_is_named_in_error() {
        let df = df!["v" => [1.0]].unwrap();
        let err = column_as_options(&df, "Age").unwrap_err();
        assert!(err.to_string().contains("Age"));
    }

    #[test]
    fn test_string_column_is_rejected() {
        let df = df!["v" => ["a", "b"]].unwrap();
        assert!(matches!(
            column_as_options(&df, "v"),
            Err(Error::TypeMismatch { .. })
        ));
    }
}
