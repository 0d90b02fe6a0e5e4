//! Frame helpers shared by the generators.
//!
//! Input order is carried through joins in a hidden [`ROW_INDEX`] column so
//! that every generator's output order is a pure function of its inputs.

use polars::prelude::*;

use hoops_model::columns::{BOXSCORE_LINK, DATE, PLAYER_LINK};

use crate::error::{Result, TransformError};

/// Hidden column holding the observation's input position.
pub const ROW_INDEX: &str = "__hoops_row";

/// Fail with [`TransformError::MissingColumn`] unless `lf` has every column.
pub fn require_columns<I, S>(table: &str, lf: &LazyFrame, columns: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let schema = lf.clone().collect_schema()?;
    for column in columns {
        let column = column.as_ref();
        if !schema.contains(column) {
            return Err(TransformError::MissingColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Number the observation rows so later steps can restore or tie-break on input order.
pub fn with_input_order(observations: LazyFrame) -> LazyFrame {
    observations.with_row_index(ROW_INDEX, None)
}

/// Join game attributes onto observations by `boxscore_link`.
///
/// Only `columns` are taken from the game table; `date` is normalised to a
/// calendar date.
pub fn attach_game_columns(
    observations: LazyFrame,
    games: LazyFrame,
    columns: &[&str],
    how: JoinType,
) -> LazyFrame {
    let mut projection = vec![col(BOXSCORE_LINK)];
    projection.extend(columns.iter().map(|&name| {
        if name == DATE {
            col(DATE).cast(DataType::Date)
        } else {
            col(name)
        }
    }));
    observations.join(
        games.select(projection),
        [col(BOXSCORE_LINK)],
        [col(BOXSCORE_LINK)],
        JoinArgs::new(how),
    )
}

/// Stable chronological order per player.
///
/// Sorts on (`player_link`, `date`, input order). Same-date rows of one
/// player keep their input order; rows without a date go last.
pub fn chronological(lf: LazyFrame) -> LazyFrame {
    lf.sort_by_exprs(
        [col(PLAYER_LINK), col(DATE), col(ROW_INDEX)],
        SortMultipleOptions::default()
            .with_maintain_order(true)
            .with_nulls_last(true),
    )
}

/// Restore input order after joins.
pub fn input_order(lf: LazyFrame) -> LazyFrame {
    lf.sort_by_exprs(
        [col(ROW_INDEX)],
        SortMultipleOptions::default().with_maintain_order(true),
    )
}

/// The join keys every feature table starts with.
pub fn feature_keys() -> Vec<Expr> {
    vec![col(PLAYER_LINK), col(BOXSCORE_LINK)]
}

/// A stat column as `Float64`.
pub fn float_stat(name: &str) -> Expr {
    col(name).cast(DataType::Float64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_columns_names_table_and_column() {
        let lf = df!("player_link" => ["p1"]).unwrap().lazy();
        let err = require_columns("boxscore_data", &lf, ["player_link", "pts"]).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingColumn { ref table, ref column }
                if table == "boxscore_data" && column == "pts"
        ));
    }

    #[test]
    fn test_chronological_keeps_input_order_on_ties() {
        let df = df!(
            "player_link" => ["p1", "p1", "p1"],
            "date" => [2i32, 1, 2],
            "tag" => ["b", "a", "c"],
        )
        .unwrap();
        let out = chronological(with_input_order(df.lazy()))
            .collect()
            .unwrap();
        let tags: Vec<_> = out.column("tag").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(tags, vec![Some("a"), Some("b"), Some("c")]);
    }
}
