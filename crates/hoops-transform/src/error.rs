//! Error types for feature generation.
//!
//! Contract failures are split by cause: [`ContractError::Location`] means a
//! generator and its caller disagree about where the sized input lives, while
//! [`ContractError::Violation`] means the algorithm or its data broke the
//! row-count invariant.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failures raised by a size contract.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The sized input is at neither the declared position nor keyword.
    #[error("could not find input at position {arg_pos} or with keyword '{kw_name}'")]
    Location { arg_pos: usize, kw_name: String },

    /// Input and output row counts differ.
    #[error("input size of {input_size} does not match output size of {output_size}")]
    Violation {
        input_size: usize,
        output_size: usize,
    },

    /// The input was found but measuring it failed.
    #[error("unexpected error when checking input size {location}: {source}")]
    Lookup {
        location: String,
        #[source]
        source: PolarsError,
    },

    /// The transform ran but its output could not be measured.
    #[error("unexpected error when checking output size: {source}")]
    OutputSize {
        #[source]
        source: PolarsError,
    },
}

impl ContractError {
    /// True for wiring bugs between a generator and its caller.
    pub fn is_location(&self) -> bool {
        matches!(self, Self::Location { .. })
    }

    /// True when the transform produced the wrong number of rows.
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation { .. })
    }
}

/// Errors from feature generators.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// A generator input is at neither its position nor its keyword.
    #[error("missing input '{kw_name}' (position {arg_pos})")]
    MissingInput { arg_pos: usize, kw_name: String },

    #[error("column '{column}' not found in {table}")]
    MissingColumn { table: String, column: String },

    #[error("invalid parameter for {generator}: {message}")]
    InvalidParameter {
        generator: &'static str,
        message: String,
    },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl TransformError {
    /// The contract failure behind this error, if any.
    pub fn as_contract(&self) -> Option<&ContractError> {
        match self {
            Self::Contract(error) => Some(error),
            _ => None,
        }
    }
}

/// Result type for feature generation.
pub type Result<T> = std::result::Result<T, TransformError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_messages_carry_counts() {
        let err = ContractError::Violation {
            input_size: 3,
            output_size: 2,
        };
        assert_eq!(
            err.to_string(),
            "input size of 3 does not match output size of 2"
        );
        assert!(err.is_violation());
        assert!(!err.is_location());
    }

    #[test]
    fn test_location_message_names_both_places() {
        let err = ContractError::Location {
            arg_pos: 4,
            kw_name: "boxscore_data".into(),
        };
        assert_eq!(
            err.to_string(),
            "could not find input at position 4 or with keyword 'boxscore_data'"
        );
        assert!(err.is_location());
    }

    #[test]
    fn test_transform_error_exposes_contract() {
        let err: TransformError = ContractError::Violation {
            input_size: 1,
            output_size: 0,
        }
        .into();
        assert!(err.as_contract().is_some_and(ContractError::is_violation));

        let err = TransformError::Polars(PolarsError::ColumnNotFound("pts".into()));
        assert!(err.as_contract().is_none());
    }
}
