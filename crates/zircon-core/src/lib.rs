//! Core types for zircon trace-element analysis
//!
//! This crate provides the pieces shared by the rest of the workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Observation`]: one row of a zircon compilation (age + optional
//!   trace-element value)
//! - [`stats`]: small numeric helpers over `f64` slices

pub mod error;
pub mod observation;
pub mod stats;

pub use error::{Error, Result};
pub use observation::Observation;
