//! The observation record consumed by the estimators

use std::fmt;

/// One row of a zircon compilation: a U-Pb age plus an optional
/// trace-element value
///
/// Ages are in Ma. The value field is whatever column the analysis targets
/// (typically a normalized trace-element ratio such as Eu/Eu*); `None`
/// models a grain where that measurement is missing. Ages are real numbers,
/// not necessarily sorted or evenly spaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Zircon U-Pb age in Ma
    pub age: f64,
    /// Trace-element value, if measured for this grain
    pub value: Option<f64>,
}

impl Observation {
    /// Create an observation with a measured value
    pub fn new(age: f64, value: f64) -> Self {
        Self {
            age,
            value: Some(value),
        }
    }

    /// Create an observation whose value field is missing
    pub fn missing(age: f64) -> Self {
        Self { age, value: None }
    }

    /// The value, if present and finite
    ///
    /// NaN and infinite values count as missing. Loaders map nulls to
    /// `None` already; this catches NaN that survived a float column.
    pub fn finite_value(&self) -> Option<f64> {
        self.value.filter(|v| v.is_finite())
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{:.1} Ma: {}", self.age, v),
            None => write!(f, "{:.1} Ma: <missing>", self.age),
        }
    }
}
