use polars::prelude::*;

use hoops_model::columns::{BOXSCORE_LINK, DATE, GAME_COLUMNS, PLAYOFFS};

use super::{first_per_key, require_columns, to_calendar_date};
use crate::error::Result;

/// Reduce the game table to one row per `boxscore_link`.
///
/// Only the known game columns are kept. A game listed both as a regular
/// season and a playoff game (teams with shortened seasons) becomes a
/// playoff game.
pub fn clean_games(df: DataFrame) -> Result<DataFrame> {
    let mut lf = df.lazy();
    let schema = lf.collect_schema()?;
    require_columns("game", &schema, &[BOXSCORE_LINK, DATE])?;

    let present: Vec<&str> = GAME_COLUMNS
        .into_iter()
        .filter(|column| schema.contains(column))
        .collect();
    let projection: Vec<Expr> = present.iter().map(|column| col(*column)).collect();
    let mut games = first_per_key(
        to_calendar_date(lf.select(projection), &schema, DATE),
        &present,
    );

    if schema.contains(PLAYOFFS) {
        let conflicting = col(BOXSCORE_LINK)
            .len()
            .over([col(BOXSCORE_LINK)])
            .gt(lit(1));
        games = first_per_key(
            games.with_column(
                when(conflicting)
                    .then(lit(true))
                    .otherwise(col(PLAYOFFS))
                    .alias(PLAYOFFS),
            ),
            &present,
        );
    }

    Ok(games.collect()?)
}
