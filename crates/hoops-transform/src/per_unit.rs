//! Row-wise rates such as points per minute.

use polars::prelude::*;
use tracing::debug;

use hoops_model::columns::{BOXSCORE_LINK, PLAYER_LINK};

use crate::contract::SameSizeContract;
use crate::error::{Result, TransformError};
use crate::frame::{feature_keys, float_stat, require_columns};
use crate::generator::{DATA, FeatureGenerator};
use crate::inputs::TableInputs;
use crate::naming::ColumnNaming;

const CONTRACT: SameSizeContract = SameSizeContract::new(0, DATA);

/// Divides each stat by a reference column, row by row.
///
/// A zero or missing dividend gives a missing rate. Output keeps input order.
#[derive(Debug, Clone)]
pub struct PerUnitStats {
    stats: Vec<String>,
    dividend: String,
    naming: ColumnNaming,
}

impl PerUnitStats {
    pub const NAME: &'static str = "per_unit_stats";

    pub fn new<I, S>(stats: I, dividend: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stats: stats.into_iter().map(Into::into).collect(),
            dividend: dividend.into(),
            naming: ColumnNaming::Default,
        }
    }

    #[must_use]
    pub fn with_naming(mut self, naming: ColumnNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn stats(&self) -> &[String] {
        &self.stats
    }

    pub fn dividend(&self) -> &str {
        &self.dividend
    }

    /// Column name derived for `stat`, `{stat}_per_{dividend}` by default.
    pub fn output_name(&self, stat: &str) -> String {
        let dividend = &self.dividend;
        self.naming.apply(stat, |stat| format!("{stat}_per_{dividend}"))
    }

    pub fn apply(&self, data: &DataFrame) -> Result<DataFrame> {
        self.transform(&TableInputs::new().arg(data))
    }

    fn validate(&self) -> Result<()> {
        if self.stats.is_empty() {
            return Err(TransformError::InvalidParameter {
                generator: Self::NAME,
                message: "no stats to divide".to_string(),
            });
        }
        Ok(())
    }

    fn derive(&self, inputs: &TableInputs) -> Result<DataFrame> {
        let data = inputs.require(0, DATA)?.lazy();
        require_columns(
            DATA,
            &data,
            [PLAYER_LINK, BOXSCORE_LINK, self.dividend.as_str()]
                .into_iter()
                .chain(self.stats.iter().map(String::as_str)),
        )?;

        let divisor = float_stat(&self.dividend);
        let mut projection = feature_keys();
        projection.extend(self.stats.iter().map(|stat| {
            when(divisor.clone().eq(lit(0.0)))
                .then(lit(NULL).cast(DataType::Float64))
                .otherwise(float_stat(stat) / divisor.clone())
                .alias(self.output_name(stat))
        }));

        let rates = data.select(projection).collect()?;
        debug!(
            generator = Self::NAME,
            dividend = %self.dividend,
            rows = rates.height(),
            "per-unit rates derived"
        );
        Ok(rates)
    }
}

impl FeatureGenerator for PerUnitStats {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&self, inputs: &TableInputs) -> Result<DataFrame> {
        self.validate()?;
        CONTRACT.enforce(inputs, |inputs| self.derive(inputs))
    }
}
