//! Running game counters per player.
//!
//! A counter is the dense rank of the game date within a player's partition:
//! two games on the same date share a number and the next date gets the next
//! number. Regular season and playoff games are counted separately.

use polars::prelude::*;
use tracing::debug;

use hoops_model::columns::{
    BOXSCORE_LINK, DATE, GAME_COUNT, PLAYER_LINK, PLAYOFFS, SEASON_GAME_COUNT, SEASON_LINK,
};

use crate::contract::SameSizeContract;
use crate::error::Result;
use crate::frame::{
    attach_game_columns, chronological, feature_keys, require_columns, with_input_order,
};
use crate::generator::{BOXSCORE_DATA, FeatureGenerator, GAME_DATA};
use crate::inputs::TableInputs;

const CONTRACT: SameSizeContract = SameSizeContract::new(0, BOXSCORE_DATA);

/// Game number within the player's season, split by playoffs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonGameCount;

impl SeasonGameCount {
    pub const NAME: &'static str = "season_game_count";

    pub fn apply(&self, boxscores: &DataFrame, games: &DataFrame) -> Result<DataFrame> {
        self.transform(&TableInputs::new().arg(boxscores).arg(games))
    }
}

impl FeatureGenerator for SeasonGameCount {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&self, inputs: &TableInputs) -> Result<DataFrame> {
        CONTRACT.enforce(inputs, |inputs| {
            dense_game_rank(
                inputs,
                Self::NAME,
                SEASON_GAME_COUNT,
                &[PLAYER_LINK, SEASON_LINK, PLAYOFFS],
            )
        })
    }
}

/// Career game number of the player, split by playoffs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameCount;

impl GameCount {
    pub const NAME: &'static str = "game_count";

    pub fn apply(&self, boxscores: &DataFrame, games: &DataFrame) -> Result<DataFrame> {
        self.transform(&TableInputs::new().arg(boxscores).arg(games))
    }
}

impl FeatureGenerator for GameCount {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn transform(&self, inputs: &TableInputs) -> Result<DataFrame> {
        CONTRACT.enforce(inputs, |inputs| {
            dense_game_rank(inputs, Self::NAME, GAME_COUNT, &[PLAYER_LINK, PLAYOFFS])
        })
    }
}

/// Dense date rank over `partition`, as an `Int64` column named `column`.
///
/// `partition` must start with `player_link`; the remaining keys are game
/// columns. A row with a missing partition key belongs to no group and gets a
/// missing counter.
fn dense_game_rank(
    inputs: &TableInputs,
    generator: &'static str,
    column: &str,
    partition: &[&str],
) -> Result<DataFrame> {
    let boxscores = inputs.require(0, BOXSCORE_DATA)?.lazy();
    let games = inputs.require(1, GAME_DATA)?.lazy();
    require_columns(BOXSCORE_DATA, &boxscores, [PLAYER_LINK, BOXSCORE_LINK])?;

    let game_columns: Vec<&str> = std::iter::once(DATE)
        .chain(partition.iter().copied().filter(|&key| key != PLAYER_LINK))
        .collect();
    require_columns(
        GAME_DATA,
        &games,
        std::iter::once(BOXSCORE_LINK).chain(game_columns.iter().copied()),
    )?;

    let keyed = partition
        .iter()
        .fold(lit(true), |keyed, &key| keyed.and(col(key).is_not_null()));
    let dense_rank = col(DATE)
        .cast(DataType::Int32)
        .rank(
            RankOptions {
                method: RankMethod::Dense,
                descending: false,
            },
            None,
        )
        .over(partition.iter().map(|&key| col(key)).collect::<Vec<_>>())
        .cast(DataType::Int64);
    let rank = when(keyed)
        .then(dense_rank)
        .otherwise(lit(NULL).cast(DataType::Int64))
        .alias(column);
    let mut projection = feature_keys();
    projection.push(rank);

    let observations = with_input_order(boxscores.select(feature_keys()));
    let counts = chronological(attach_game_columns(
        observations,
        games,
        &game_columns,
        JoinType::Inner,
    ))
    .select(projection)
    .collect()?;

    debug!(generator, rows = counts.height(), "game counters derived");
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxscores() -> DataFrame {
        df!(
            "player_link" => ["p1", "p1", "p1", "p1"],
            "boxscore_link" => ["g1", "g2", "g3", "g4"],
        )
        .unwrap()
    }

    fn games() -> DataFrame {
        df!(
            "boxscore_link" => ["g1", "g2", "g3", "g4"],
            "date" => [1i32, 3, 3, 8],
            "season_link" => ["s1", "s1", "s1", "s2"],
            "playoffs" => [false, false, false, false],
        )
        .unwrap()
        .lazy()
        .with_column(col("date").cast(DataType::Date))
        .collect()
        .unwrap()
    }

    fn counts(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
        df.column(name).unwrap().i64().unwrap().into_iter().collect()
    }

    #[test]
    fn test_same_date_shares_rank() {
        let out = GameCount.apply(&boxscores(), &games()).unwrap();
        assert_eq!(counts(&out, "game_count"), vec![Some(1), Some(2), Some(2), Some(3)]);
    }

    #[test]
    fn test_season_restarts_count() {
        let out = SeasonGameCount.apply(&boxscores(), &games()).unwrap();
        assert_eq!(
            counts(&out, "season_game_count"),
            vec![Some(1), Some(2), Some(2), Some(1)]
        );
    }

    #[test]
    fn test_missing_season_gets_no_count() {
        let games = games()
            .lazy()
            .with_column(
                when(col("boxscore_link").eq(lit("g2")))
                    .then(lit(NULL).cast(DataType::String))
                    .otherwise(col("season_link"))
                    .alias("season_link"),
            )
            .collect()
            .unwrap();
        let out = SeasonGameCount.apply(&boxscores(), &games).unwrap();
        assert_eq!(out.height(), 4);
        assert_eq!(
            counts(&out, "season_game_count"),
            vec![Some(1), None, Some(2), Some(1)]
        );

        let out = GameCount.apply(&boxscores(), &games).unwrap();
        assert_eq!(counts(&out, "game_count"), vec![Some(1), Some(2), Some(2), Some(3)]);
    }
}
