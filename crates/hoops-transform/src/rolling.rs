//! Trailing averages over a player's previous games.

use polars::prelude::*;
use tracing::debug;

use hoops_model::columns::{BOXSCORE_LINK, DATE, PLAYER_LINK};

use crate::contract::SameSizeContract;
use crate::error::{Result, TransformError};
use crate::frame::{
    attach_game_columns, chronological, feature_keys, float_stat, require_columns,
    with_input_order,
};
use crate::generator::{BOXSCORE_DATA, FeatureGenerator, GAME_DATA};
use crate::inputs::TableInputs;
use crate::naming::ColumnNaming;

const CONTRACT: SameSizeContract = SameSizeContract::new(0, BOXSCORE_DATA);

/// Mean of each stat over the player's previous `window` games.
///
/// The current game never contributes to its own feature: values are shifted
/// one game back inside each player's history before averaging. A partial
/// window is averaged over the games available, and a player's first game has
/// no value.
///
/// Inputs are the observation table (`boxscore_data`, position 0) and the game
/// table (`game_data`, position 1). Output rows follow the player's
/// chronological order and carry `player_link`, `boxscore_link` and one
/// `Float64` column per stat, named `{stat}_prev_{window}g_avg` by default.
#[derive(Debug, Clone)]
pub struct RollingAverageStats {
    stats: Vec<String>,
    window: usize,
    naming: ColumnNaming,
}

impl RollingAverageStats {
    pub const NAME: &'static str = "rolling_average_stats";

    pub fn new<I, S>(stats: I, window: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stats: stats.into_iter().map(Into::into).collect(),
            window,
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

    pub fn window(&self) -> usize {
        self.window
    }

    /// Column name derived for `stat`.
    pub fn output_name(&self, stat: &str) -> String {
        let window = self.window;
        self.naming.apply(stat, |stat| format!("{stat}_prev_{window}g_avg"))
    }

    /// Run on eager frames.
    pub fn apply(&self, boxscores: &DataFrame, games: &DataFrame) -> Result<DataFrame> {
        self.transform(&TableInputs::new().arg(boxscores).arg(games))
    }

    fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(TransformError::InvalidParameter {
                generator: Self::NAME,
                message: "window must be at least 1".to_string(),
            });
        }
        if self.stats.is_empty() {
            return Err(TransformError::InvalidParameter {
                generator: Self::NAME,
                message: "no stats to average".to_string(),
            });
        }
        Ok(())
    }

    fn derive(&self, inputs: &TableInputs) -> Result<DataFrame> {
        let boxscores = inputs.require(0, BOXSCORE_DATA)?.lazy();
        let games = inputs.require(1, GAME_DATA)?.lazy();

        let stat_names = self.stats.iter().map(String::as_str);
        require_columns(
            BOXSCORE_DATA,
            &boxscores,
            [PLAYER_LINK, BOXSCORE_LINK].into_iter().chain(stat_names),
        )?;
        require_columns(GAME_DATA, &games, [BOXSCORE_LINK, DATE])?;

        let mut observed = feature_keys();
        observed.extend(self.stats.iter().map(|stat| col(stat.as_str())));

        let options = RollingOptionsFixedWindow {
            window_size: self.window,
            min_periods: 1,
            ..Default::default()
        };
        let mut projection = feature_keys();
        projection.extend(self.stats.iter().map(|stat| {
            float_stat(stat)
                .shift(lit(1))
                .rolling_mean(options.clone())
                .over([col(PLAYER_LINK)])
                .alias(self.output_name(stat))
        }));

        let observations = with_input_order(boxscores.select(observed));
        let features = chronological(attach_game_columns(
            observations,
            games,
            &[DATE],
            JoinType::Inner,
        ))
        .select(projection)
        .collect()?;

        debug!(
            generator = Self::NAME,
            window = self.window,
            stats = self.stats.len(),
            rows = features.height(),
            "rolling averages derived"
        );
        Ok(features)
    }
}

impl FeatureGenerator for RollingAverageStats {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&self, inputs: &TableInputs) -> Result<DataFrame> {
        self.validate()?;
        CONTRACT.enforce(inputs, |inputs| self.derive(inputs))
    }
}
