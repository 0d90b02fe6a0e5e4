//! Equi-join of two feature tables.

use polars::prelude::*;
use tracing::debug;

use hoops_model::JoinHow;

use crate::error::{Result, TransformError};
use crate::frame::require_columns;
use crate::generator::{FeatureGenerator, LEFT, RIGHT};
use crate::inputs::TableInputs;

/// Suffix given to right-side columns that clash with a left-side column.
pub const RIGHT_SUFFIX: &str = "_right";

const LEFT_ORDER: &str = "__hoops_left_row";
const RIGHT_ORDER: &str = "__hoops_right_row";

/// Joins `left` and `right` on shared key columns.
///
/// Row count depends on the data, so no size contract applies. Key columns
/// appear once in the output. Rows come out in left order, fanned-out matches
/// in right order, and right-only rows of an outer join last.
///
/// A non-key column present on both sides keeps its name from the left table
/// and gets [`RIGHT_SUFFIX`] on the right one. The left column is never
/// renamed, so `pts` and `pts_right` come out rather than `pts_x` and `pts_y`.
#[derive(Debug, Clone)]
pub struct Merge {
    on: Vec<String>,
    how: JoinHow,
    keep: Option<Vec<String>>,
}

impl Merge {
    pub const NAME: &'static str = "merge";

    /// Inner join on `on`.
    pub fn new<I, S>(on: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            on: on.into_iter().map(Into::into).collect(),
            how: JoinHow::default(),
            keep: None,
        }
    }

    #[must_use]
    pub fn with_how(mut self, how: JoinHow) -> Self {
        self.how = how;
        self
    }

    /// Only keep these columns, in this order, after the join.
    #[must_use]
    pub fn with_columns<I, S>(mut self, keep: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep = Some(keep.into_iter().map(Into::into).collect());
        self
    }

    pub fn on(&self) -> &[String] {
        &self.on
    }

    pub fn how(&self) -> JoinHow {
        self.how
    }

    pub fn apply(&self, left: &DataFrame, right: &DataFrame) -> Result<DataFrame> {
        self.transform(&TableInputs::new().arg(left).arg(right))
    }

    fn join_type(&self) -> JoinType {
        match self.how {
            JoinHow::Inner => JoinType::Inner,
            JoinHow::Left => JoinType::Left,
            JoinHow::Outer => JoinType::Full,
        }
    }

    fn project(&self, joined: DataFrame) -> Result<DataFrame> {
        let Some(keep) = &self.keep else {
            let columns = joined
                .get_column_names_str()
                .into_iter()
                .filter(|name| *name != LEFT_ORDER && *name != RIGHT_ORDER)
                .map(str::to_string)
                .collect::<Vec<_>>();
            return Ok(joined.select(columns)?);
        };
        let available = joined.get_column_names_str();
        if let Some(missing) = keep.iter().find(|name| !available.contains(&name.as_str())) {
            return Err(TransformError::MissingColumn {
                table: "merge output".to_string(),
                column: missing.clone(),
            });
        }
        Ok(joined.select(keep.iter().map(String::as_str))?)
    }
}

impl FeatureGenerator for Merge {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&self, inputs: &TableInputs) -> Result<DataFrame> {
        if self.on.is_empty() {
            return Err(TransformError::InvalidParameter {
                generator: Self::NAME,
                message: "no key columns to join on".to_string(),
            });
        }
        let left = inputs.require(0, LEFT)?.lazy();
        let right = inputs.require(1, RIGHT)?.lazy();
        let keys = self.on.iter().map(String::as_str);
        require_columns(LEFT, &left, keys.clone())?;
        require_columns(RIGHT, &right, keys)?;

        let on: Vec<Expr> = self.on.iter().map(|key| col(key.as_str())).collect();
        let args = JoinArgs::new(self.join_type())
            .with_coalesce(JoinCoalesce::CoalesceColumns)
            .with_suffix(Some(RIGHT_SUFFIX.into()));
        let joined = left
            .with_row_index(LEFT_ORDER, None)
            .join(
                right.with_row_index(RIGHT_ORDER, None),
                on.clone(),
                on,
                args,
            )
            .sort_by_exprs(
                [col(LEFT_ORDER), col(RIGHT_ORDER)],
                SortMultipleOptions::default()
                    .with_maintain_order(true)
                    .with_nulls_last(true),
            )
            .collect()?;

        let merged = self.project(joined)?;
        debug!(
            generator = Self::NAME,
            how = %self.how,
            rows = merged.height(),
            "tables merged"
        );
        Ok(merged)
    }
}
