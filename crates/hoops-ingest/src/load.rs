//! Read-and-clean entry points for the three source tables.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

use crate::clean::{clean_boxscores, clean_games, clean_players};
use crate::csv::read_csv_frame;
use crate::error::Result;

/// Load the boxscore table, one row per player, game and team.
pub fn load_boxscores(path: &Path) -> Result<DataFrame> {
    load("boxscore", path, clean_boxscores)
}

/// Load the game table, one row per game.
pub fn load_games(path: &Path) -> Result<DataFrame> {
    load("game", path, clean_games)
}

/// Load the player table.
pub fn load_players(path: &Path) -> Result<DataFrame> {
    load("player", path, clean_players)
}

fn load(
    table: &'static str,
    path: &Path,
    clean: impl FnOnce(DataFrame) -> Result<DataFrame>,
) -> Result<DataFrame> {
    let raw = read_csv_frame(path)?;
    let raw_rows = raw.height();
    let cleaned = clean(raw)?;
    info!(
        table,
        path = %path.display(),
        raw_rows,
        rows = cleaned.height(),
        dropped = raw_rows.saturating_sub(cleaned.height()),
        "table loaded"
    );
    Ok(cleaned)
}
