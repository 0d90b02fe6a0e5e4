//! Shared utilities for the hoops crates.
//!
//! This crate provides the polars value helpers used when feature tables are
//! inspected or rendered outside of polars itself.

pub mod polars;

pub use polars::{any_to_string, format_numeric, null_counts};
