use polars::prelude::*;

use hoops_model::columns::{BOXSCORE_LINK, GAME_URL, MINUTES, PLAYER_LINK, TEAM};

use super::{first_per_key, require_columns};
use crate::error::Result;

/// Deduplicate boxscore rows on (`boxscore_link`, `player_link`, `team`).
///
/// A crawler `game_url` column is renamed to `boxscore_link`. Rows are sorted
/// by (`boxscore_link`, `minutes`) before the first row of each key is kept,
/// so the duplicate with the fewest minutes survives.
pub fn clean_boxscores(mut df: DataFrame) -> Result<DataFrame> {
    if df.column(BOXSCORE_LINK).is_err() && df.column(GAME_URL).is_ok() {
        df.rename(GAME_URL, BOXSCORE_LINK.into())?;
    }

    let mut lf = df.lazy();
    let schema = lf.collect_schema()?;
    require_columns("boxscore", &schema, &[BOXSCORE_LINK, PLAYER_LINK])?;

    if schema.contains(MINUTES) {
        lf = lf.sort_by_exprs(
            [col(BOXSCORE_LINK), col(MINUTES)],
            SortMultipleOptions::default()
                .with_maintain_order(true)
                .with_nulls_last(true),
        );
    }

    let keys: &[&str] = if schema.contains(TEAM) {
        &[BOXSCORE_LINK, PLAYER_LINK, TEAM]
    } else {
        &[BOXSCORE_LINK, PLAYER_LINK]
    };
    Ok(first_per_key(lf, keys).collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renames_game_url_and_keeps_fewest_minutes() {
        let df = df!(
            "game_url" => ["g2", "g1", "g1", "g1"],
            "player_link" => ["p1", "p1", "p1", "p2"],
            "team" => ["A", "A", "A", "B"],
            "minutes" => [30.0, 25.0, 12.0, 40.0],
        )
        .unwrap();
        let out = clean_boxscores(df).unwrap();
        assert_eq!(out.height(), 3);
        let links: Vec<_> = out.column("boxscore_link").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(links, vec![Some("g1"), Some("g1"), Some("g2")]);
        let minutes: Vec<_> = out.column("minutes").unwrap().f64().unwrap().into_iter().collect();
        assert_eq!(minutes, vec![Some(12.0), Some(40.0), Some(30.0)]);
    }

    #[test]
    fn test_same_player_on_two_teams_is_kept() {
        let df = df!(
            "boxscore_link" => ["g1", "g1"],
            "player_link" => ["p1", "p1"],
            "team" => ["A", "B"],
        )
        .unwrap();
        assert_eq!(clean_boxscores(df).unwrap().height(), 2);
    }

    #[test]
    fn test_requires_player_link() {
        let df = df!("boxscore_link" => ["g1"]).unwrap();
        assert!(clean_boxscores(df).is_err());
    }
}
