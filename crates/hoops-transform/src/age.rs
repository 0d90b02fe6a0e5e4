//! Player age on game day.

use polars::prelude::*;
use tracing::debug;

use hoops_model::columns::{AGE_IN_DAYS, BIRTH_DATE, BOXSCORE_LINK, DATE, PLAYER_LINK};

use crate::contract::SameSizeContract;
use crate::error::Result;
use crate::frame::{
    attach_game_columns, feature_keys, input_order, require_columns, with_input_order,
};
use crate::generator::{BOXSCORE_DATA, FeatureGenerator, GAME_DATA, PLAYER_DATA};
use crate::inputs::TableInputs;

const CONTRACT: SameSizeContract = SameSizeContract::new(0, BOXSCORE_DATA);

/// Days between the player's birth date and the game date.
///
/// Both lookups are left joins, so an observation whose game or player is
/// unknown keeps its row with a missing `age_in_days`. Output keeps input
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerAge;

impl PlayerAge {
    pub const NAME: &'static str = "player_age";

    pub fn apply(
        &self,
        boxscores: &DataFrame,
        games: &DataFrame,
        players: &DataFrame,
    ) -> Result<DataFrame> {
        self.transform(
            &TableInputs::new()
                .arg(boxscores)
                .arg(games)
                .arg(players),
        )
    }

    fn derive(inputs: &TableInputs) -> Result<DataFrame> {
        let boxscores = inputs.require(0, BOXSCORE_DATA)?.lazy();
        let games = inputs.require(1, GAME_DATA)?.lazy();
        let players = inputs.require(2, PLAYER_DATA)?.lazy();
        require_columns(BOXSCORE_DATA, &boxscores, [PLAYER_LINK, BOXSCORE_LINK])?;
        require_columns(GAME_DATA, &games, [BOXSCORE_LINK, DATE])?;
        require_columns(PLAYER_DATA, &players, [PLAYER_LINK, BIRTH_DATE])?;

        let birth_dates = players.select([
            col(PLAYER_LINK),
            col(BIRTH_DATE).cast(DataType::Date),
        ]);
        let with_dates = attach_game_columns(
            with_input_order(boxscores.select(feature_keys())),
            games,
            &[DATE],
            JoinType::Left,
        )
        .join(
            birth_dates,
            [col(PLAYER_LINK)],
            [col(PLAYER_LINK)],
            JoinArgs::new(JoinType::Left),
        );

        let age = (col(DATE).cast(DataType::Int32) - col(BIRTH_DATE).cast(DataType::Int32))
            .cast(DataType::Int64)
            .alias(AGE_IN_DAYS);
        let mut projection = feature_keys();
        projection.push(age);

        let ages = input_order(with_dates).select(projection).collect()?;
        debug!(
            generator = Self::NAME,
            rows = ages.height(),
            missing = ages.column(AGE_IN_DAYS)?.null_count(),
            "player ages derived"
        );
        Ok(ages)
    }
}

impl FeatureGenerator for PlayerAge {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&self, inputs: &TableInputs) -> Result<DataFrame> {
        CONTRACT.enforce(inputs, Self::derive)
    }
}
