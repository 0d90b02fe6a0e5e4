//! Cleaning rules that turn raw source tables into well-formed inputs.
//!
//! - **boxscores**: one row per (`boxscore_link`, `player_link`, `team`)
//! - **games**: one row per `boxscore_link`, conflicting playoff flags resolved
//! - **players**: numeric height, calendar birth dates, position encodings

mod boxscores;
mod games;
mod players;

pub use boxscores::clean_boxscores;
pub use games::clean_games;
pub use players::{clean_players, parse_height_feet};

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Fail unless every column is present.
fn require_columns(table: &'static str, schema: &Schema, columns: &[&str]) -> Result<()> {
    match columns.iter().find(|column| !schema.contains(column)) {
        Some(column) => Err(IngestError::MissingColumn {
            column: (*column).to_string(),
            table,
        }),
        None => Ok(()),
    }
}

/// Normalise `column` to a calendar date when it exists.
///
/// Text is parsed leniently (unparsable values become null); datetimes are
/// truncated to their date.
fn to_calendar_date(lf: LazyFrame, schema: &Schema, column: &str) -> LazyFrame {
    match schema.get(column) {
        None | Some(DataType::Date) => lf,
        Some(DataType::String) => lf.with_column(col(column).str().to_date(StrptimeOptions {
            strict: false,
            ..Default::default()
        })),
        Some(_) => lf.with_column(col(column).cast(DataType::Date)),
    }
}

/// Keep the first row of every `keys` group, in frame order.
fn first_per_key(lf: LazyFrame, keys: &[&str]) -> LazyFrame {
    use polars::lazy::dsl::int_range;

    let Some(first) = keys.first() else {
        return lf;
    };
    let partition: Vec<Expr> = keys.iter().map(|key| col(*key)).collect();
    let position = int_range(lit(0), col(*first).len(), 1, DataType::Int64).over(partition);
    lf.filter(position.eq(lit(0)))
}
