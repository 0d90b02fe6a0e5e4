//! Argument bundles passed to feature generators.
//!
//! A generator receives its tables either by position or by keyword, the same
//! way a caller would wire them in a pipeline definition:
//!
//! ```ignore
//! let inputs = TableInputs::new()
//!     .named("boxscore_data", boxscores)
//!     .named("game_data", games);
//! let features = RollingAverageStats::new(["pts"], 5).transform(&inputs)?;
//! ```
//!
//! When both are supplied for the same slot the keyword entry wins.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, IntoLazy, LazyFrame, PolarsResult};

use crate::error::{Result, TransformError};

/// One input table.
#[derive(Clone)]
pub enum TableArg {
    Eager(DataFrame),
    /// A query plan; measuring it means collecting it, which can fail.
    Lazy(LazyFrame),
}

impl TableArg {
    /// Row count of the table.
    pub fn height(&self) -> PolarsResult<usize> {
        match self {
            Self::Eager(df) => Ok(df.height()),
            Self::Lazy(lf) => Ok(lf.clone().collect()?.height()),
        }
    }

    /// The table as a lazy query.
    pub fn lazy(&self) -> LazyFrame {
        match self {
            Self::Eager(df) => df.clone().lazy(),
            Self::Lazy(lf) => lf.clone(),
        }
    }
}

impl From<DataFrame> for TableArg {
    fn from(df: DataFrame) -> Self {
        Self::Eager(df)
    }
}

impl From<&DataFrame> for TableArg {
    fn from(df: &DataFrame) -> Self {
        Self::Eager(df.clone())
    }
}

impl From<LazyFrame> for TableArg {
    fn from(lf: LazyFrame) -> Self {
        Self::Lazy(lf)
    }
}

impl std::fmt::Debug for TableArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Eager(df) => write!(f, "Eager({}x{})", df.height(), df.width()),
            Self::Lazy(_) => f.write_str("Lazy"),
        }
    }
}

/// Positional and keyword tables for one `transform` call.
#[derive(Debug, Clone, Default)]
pub struct TableInputs {
    positional: Vec<TableArg>,
    named: BTreeMap<String, TableArg>,
}

impl TableInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional table.
    #[must_use]
    pub fn arg(mut self, table: impl Into<TableArg>) -> Self {
        self.positional.push(table.into());
        self
    }

    /// Add or replace a keyword table.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>, table: impl Into<TableArg>) -> Self {
        self.named.insert(name.into(), table.into());
        self
    }

    pub fn positional(&self, arg_pos: usize) -> Option<&TableArg> {
        self.positional.get(arg_pos)
    }

    pub fn keyword(&self, kw_name: &str) -> Option<&TableArg> {
        self.named.get(kw_name)
    }

    /// The table for a slot, keyword first.
    pub fn resolve(&self, arg_pos: usize, kw_name: &str) -> Option<&TableArg> {
        self.keyword(kw_name).or_else(|| self.positional(arg_pos))
    }

    /// Like [`resolve`](Self::resolve) but missing inputs are an error.
    pub fn require(&self, arg_pos: usize, kw_name: &str) -> Result<&TableArg> {
        self.resolve(arg_pos, kw_name)
            .ok_or_else(|| TransformError::MissingInput {
                arg_pos,
                kw_name: kw_name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn frame(rows: usize) -> DataFrame {
        let values: Vec<i64> = (0..rows as i64).collect();
        df!("x" => values).unwrap()
    }

    #[test]
    fn test_keyword_wins_over_position() {
        let inputs = TableInputs::new().arg(frame(1)).named("data", frame(3));
        let table = inputs.resolve(0, "data").unwrap();
        assert_eq!(table.height().unwrap(), 3);
    }

    #[test]
    fn test_position_used_when_keyword_absent() {
        let inputs = TableInputs::new().arg(frame(1)).arg(frame(2));
        assert_eq!(inputs.resolve(1, "data").unwrap().height().unwrap(), 2);
        assert!(inputs.resolve(2, "data").is_none());
    }

    #[test]
    fn test_require_reports_slot() {
        let inputs = TableInputs::new();
        let err = inputs.require(1, "game_data").unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingInput { arg_pos: 1, ref kw_name } if kw_name == "game_data"
        ));
    }

    #[test]
    fn test_lazy_height_collects() {
        let lf = frame(4).lazy().filter(col("x").gt(lit(1)));
        let arg = TableArg::from(lf);
        assert_eq!(arg.height().unwrap(), 2);
    }
}
