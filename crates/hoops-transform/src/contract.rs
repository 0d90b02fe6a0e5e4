//! Row-count contracts for feature generators.
//!
//! A [`SameSizeContract`] names one input slot (by position and keyword) and
//! guarantees that the wrapped transform returns exactly as many rows as that
//! input had when the call started. Row-preserving generators enforce it on
//! every call; [`Contracted`] attaches it to any other generator.
//!
//! # Example
//!
//! ```ignore
//! const CONTRACT: SameSizeContract = SameSizeContract::new(0, "data");
//!
//! let output = CONTRACT.enforce(&inputs, |inputs| derive(inputs))?;
//! ```

use std::borrow::Cow;

use polars::prelude::{DataFrame, LazyFrame, PolarsResult};
use tracing::{debug, error};

use crate::error::{ContractError, Result};
use crate::generator::FeatureGenerator;
use crate::inputs::TableInputs;

/// Output-length accessor used by contracts.
pub trait RowCount {
    fn row_count(&self) -> PolarsResult<usize>;
}

impl RowCount for DataFrame {
    fn row_count(&self) -> PolarsResult<usize> {
        Ok(self.height())
    }
}

impl RowCount for LazyFrame {
    fn row_count(&self) -> PolarsResult<usize> {
        Ok(self.clone().collect()?.height())
    }
}

/// Where the sized input is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLocator {
    pub arg_pos: usize,
    pub kw_name: Cow<'static, str>,
}

/// Requires the located input and the output to have the same row count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameSizeContract {
    locator: InputLocator,
}

impl SameSizeContract {
    pub const fn new(arg_pos: usize, kw_name: &'static str) -> Self {
        Self {
            locator: InputLocator {
                arg_pos,
                kw_name: Cow::Borrowed(kw_name),
            },
        }
    }

    /// Contract over a keyword only known at runtime.
    pub fn with_keyword(arg_pos: usize, kw_name: impl Into<String>) -> Self {
        Self {
            locator: InputLocator {
                arg_pos,
                kw_name: Cow::Owned(kw_name.into()),
            },
        }
    }

    /// Row count of the located input.
    ///
    /// The keyword entry is measured when present, otherwise the positional
    /// one; a positional list shorter than `arg_pos` simply falls through to
    /// the [`ContractError::Location`] error.
    pub fn input_size(&self, inputs: &TableInputs) -> std::result::Result<usize, ContractError> {
        let InputLocator { arg_pos, kw_name } = &self.locator;
        let (table, location) = match (inputs.keyword(kw_name), inputs.positional(*arg_pos)) {
            (Some(table), _) => (table, format!("with keyword '{kw_name}'")),
            (None, Some(table)) => (table, format!("at position {arg_pos}")),
            (None, None) => {
                return Err(ContractError::Location {
                    arg_pos: *arg_pos,
                    kw_name: kw_name.to_string(),
                });
            }
        };
        table
            .height()
            .map_err(|source| ContractError::Lookup { location, source })
    }

    /// Run `transform` and check its output against the located input.
    ///
    /// The input is measured before `transform` runs. The output is returned
    /// unchanged when the counts agree.
    pub fn enforce<O, E, F>(&self, inputs: &TableInputs, transform: F) -> std::result::Result<O, E>
    where
        O: RowCount,
        E: From<ContractError>,
        F: FnOnce(&TableInputs) -> std::result::Result<O, E>,
    {
        let input_size = self.input_size(inputs)?;
        let output = transform(inputs)?;
        let output_size = output
            .row_count()
            .map_err(|source| ContractError::OutputSize { source })?;
        if input_size != output_size {
            error!(
                kw_name = %self.locator.kw_name,
                input_size,
                output_size,
                "row-count contract violated"
            );
            return Err(ContractError::Violation {
                input_size,
                output_size,
            }
            .into());
        }
        debug!(kw_name = %self.locator.kw_name, rows = output_size, "row-count contract held");
        Ok(output)
    }
}

/// A generator whose every call is checked by a [`SameSizeContract`].
pub struct Contracted<G> {
    inner: G,
    contract: SameSizeContract,
}

impl<G: FeatureGenerator> Contracted<G> {
    pub fn new(inner: G, contract: SameSizeContract) -> Self {
        Self { inner, contract }
    }
}

impl<G: FeatureGenerator> FeatureGenerator for Contracted<G> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn transform(&self, inputs: &TableInputs) -> Result<DataFrame> {
        self.contract.enforce(inputs, |inputs| self.inner.transform(inputs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    use crate::error::TransformError;

    fn frame(rows: usize) -> DataFrame {
        let values: Vec<i64> = (0..rows as i64).collect();
        df!("x" => values).unwrap()
    }

    const CONTRACT: SameSizeContract = SameSizeContract::new(0, "data");

    #[test]
    fn test_matching_sizes_pass_output_through() {
        let inputs = TableInputs::new().arg(frame(3));
        let out: Result<DataFrame> = CONTRACT.enforce(&inputs, |_| Ok(frame(3)));
        assert_eq!(out.unwrap().height(), 3);
    }

    #[test]
    fn test_mismatch_is_violation() {
        let inputs = TableInputs::new().named("data", frame(3));
        let err: TransformError = CONTRACT
            .enforce(&inputs, |_| Ok::<_, TransformError>(frame(2)))
            .unwrap_err();
        assert!(matches!(
            err,
            TransformError::Contract(ContractError::Violation {
                input_size: 3,
                output_size: 2
            })
        ));
    }

    #[test]
    fn test_short_positional_list_falls_back_to_keyword() {
        let contract = SameSizeContract::new(2, "data");
        let inputs = TableInputs::new().arg(frame(1)).named("data", frame(5));
        assert_eq!(contract.input_size(&inputs).unwrap(), 5);
    }

    #[test]
    fn test_missing_everywhere_is_location_error() {
        let contract = SameSizeContract::with_keyword(3, "observations");
        let inputs = TableInputs::new().arg(frame(1));
        let err = contract.input_size(&inputs).unwrap_err();
        assert!(err.is_location());
    }

    #[test]
    fn test_input_measured_before_transform_runs() {
        let inputs = TableInputs::new().arg(frame(2));
        let mut calls = 0;
        let err: TransformError = SameSizeContract::new(1, "data")
            .enforce(&inputs, |_| {
                calls += 1;
                Ok::<_, TransformError>(frame(2))
            })
            .unwrap_err();
        assert_eq!(calls, 0);
        assert!(err.as_contract().is_some_and(ContractError::is_location));
    }

    #[test]
    fn test_unmeasurable_input_is_lookup_error() {
        let broken = df!("x" => [1i64]).unwrap().lazy().select([col("missing")]);
        let inputs = TableInputs::new().arg(broken);
        let err = CONTRACT.input_size(&inputs).unwrap_err();
        assert!(matches!(err, ContractError::Lookup { ref location, .. } if location == "at position 0"));
    }

    #[test]
    fn test_lazy_output_is_measured() {
        let inputs = TableInputs::new().arg(frame(2));
        let out: Result<LazyFrame> = CONTRACT.enforce(&inputs, |_| Ok(frame(2).lazy()));
        assert!(out.is_ok());
    }
}
