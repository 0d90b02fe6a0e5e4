use polars::prelude::*;

use hoops_model::columns::{
    BIRTH_DATE, HEIGHT, PLAYER_LINK, POSITION, POSITION_CODES, POSITION_COUNT, position_indicator,
    position_weight,
};

use super::{require_columns, to_calendar_date};
use crate::error::Result;

/// Parse a `feet-inches` height such as `"6-7"` into feet.
///
/// # Examples
///
/// ```
/// use hoops_ingest::parse_height_feet;
///
/// assert_eq!(parse_height_feet("6-6"), Some(6.5));
/// assert_eq!(parse_height_feet("7-0"), Some(7.0));
/// assert_eq!(parse_height_feet("tall"), None);
/// ```
pub fn parse_height_feet(value: &str) -> Option<f64> {
    let (feet, inches) = value.trim().split_once('-')?;
    let feet: f64 = feet.trim().parse().ok()?;
    let inches: f64 = inches.trim().parse().ok()?;
    Some(feet + inches / 12.0)
}

/// Normalise player attributes.
///
/// - `height` becomes numeric feet
/// - `birth_date` becomes a calendar date
/// - `pos` labels (e.g. `"G-F"`) become 0/1 indicators `pos_f`, `pos_c`,
///   `pos_g`, the count `n_pos` and weights `pos_*_scaled` summing to one
pub fn clean_players(df: DataFrame) -> Result<DataFrame> {
    let mut lf = df.lazy();
    let schema = lf.collect_schema()?;
    require_columns("player", &schema, &[PLAYER_LINK, BIRTH_DATE])?;

    let mut df = to_calendar_date(lf, &schema, BIRTH_DATE).collect()?;
    if let Some(height) = heights(&df)? {
        df.with_column(height)?;
    }
    if schema.contains(POSITION) {
        encode_positions(&mut df)?;
    }
    Ok(df)
}

fn heights(df: &DataFrame) -> Result<Option<Series>> {
    let Ok(column) = df.column(HEIGHT) else {
        return Ok(None);
    };
    let feet = match column.dtype() {
        DataType::String => column
            .str()?
            .into_iter()
            .map(|value| value.and_then(parse_height_feet))
            .collect::<Float64Chunked>()
            .with_name(HEIGHT.into())
            .into_series(),
        _ => column.as_materialized_series().cast(&DataType::Float64)?,
    };
    Ok(Some(feet))
}

fn encode_positions(df: &mut DataFrame) -> Result<()> {
    let labels: Vec<String> = df
        .column(POSITION)?
        .cast(&DataType::String)?
        .str()?
        .into_iter()
        .map(|label| label.unwrap_or_default().to_string())
        .collect();

    let indicators: Vec<Vec<i32>> = POSITION_CODES
        .iter()
        .map(|code| {
            labels
                .iter()
                .map(|label| i32::from(label.contains(*code)))
                .collect()
        })
        .collect();
    let counts: Vec<i32> = (0..labels.len())
        .map(|row| indicators.iter().map(|flags| flags[row]).sum())
        .collect();

    for (code, flags) in POSITION_CODES.iter().zip(&indicators) {
        df.with_column(Series::new(position_indicator(*code).into(), flags))?;
    }
    df.with_column(Series::new(POSITION_COUNT.into(), &counts))?;
    for (code, flags) in POSITION_CODES.iter().zip(&indicators) {
        let weights: Vec<Option<f64>> = flags
            .iter()
            .zip(&counts)
            .map(|(&flag, &count)| (count > 0).then(|| f64::from(flag) / f64::from(count)))
            .collect();
        df.with_column(Series::new(position_weight(*code).into(), weights))?;
    }
    Ok(())
}
