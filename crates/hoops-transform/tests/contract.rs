//! Tests for row-count contracts around generators.

use hoops_transform::{
    BOXSCORE_DATA, ContractError, Contracted, FeatureGenerator, GAME_DATA, PerUnitStats,
    RollingAverageStats, SameSizeContract, TableInputs, TransformError,
};
use polars::prelude::*;

/// Keeps only the first `keep` rows of its input.
struct Truncate {
    keep: usize,
}

impl FeatureGenerator for Truncate {
    fn name(&self) -> &'static str {
        "truncate"
    }

    fn transform(&self, inputs: &TableInputs) -> hoops_transform::Result<DataFrame> {
        let table = inputs.require(0, "observations")?.lazy();
        Ok(table.collect()?.head(Some(self.keep)))
    }
}

fn observations() -> DataFrame {
    df!(
        "player_link" => ["p1", "p1", "p2"],
        "boxscore_link" => ["g1", "g2", "g1"],
        "pts" => [10i64, 20, 30],
        "minutes" => [20.0, 40.0, 30.0],
    )
    .unwrap()
}

fn games() -> DataFrame {
    df!(
        "boxscore_link" => ["g1", "g2"],
        "date" => [10i32, 11],
    )
    .unwrap()
    .lazy()
    .with_column(col("date").cast(DataType::Date))
    .collect()
    .unwrap()
}

#[test]
fn test_wrapped_generator_violation_carries_counts() {
    let generator = Contracted::new(
        Truncate { keep: 2 },
        SameSizeContract::new(0, "observations"),
    );
    let err = generator
        .transform(&TableInputs::new().arg(observations()))
        .unwrap_err();
    match err.as_contract() {
        Some(ContractError::Violation {
            input_size,
            output_size,
        }) => {
            assert_eq!(*input_size, 3);
            assert_eq!(*output_size, 2);
        }
        other => panic!("expected violation, got {other:?}"),
    }
}

#[test]
fn test_wrapped_generator_passes_when_sizes_match() {
    let generator = Contracted::new(
        Truncate { keep: 10 },
        SameSizeContract::new(0, "observations"),
    );
    let out = generator
        .transform(&TableInputs::new().named("observations", observations()))
        .unwrap();
    assert_eq!(out.height(), 3);
    assert_eq!(generator.name(), "truncate");
}

#[test]
fn test_wrong_locator_is_location_error() {
    let generator = Contracted::new(
        Truncate { keep: 10 },
        SameSizeContract::new(5, "not_there"),
    );
    let err = generator
        .transform(&TableInputs::new().arg(observations()))
        .unwrap_err();
    assert!(err.as_contract().is_some_and(ContractError::is_location));
    assert_eq!(
        err.to_string(),
        "could not find input at position 5 or with keyword 'not_there'"
    );
}

#[test]
fn test_missing_game_breaks_rolling_contract() {
    let mut boxscores = observations();
    boxscores
        .vstack_mut(
            &df!(
                "player_link" => ["p2"],
                "boxscore_link" => ["g404"],
                "pts" => [5i64],
                "minutes" => [12.0],
            )
            .unwrap(),
        )
        .unwrap();
    let err = RollingAverageStats::new(["pts"], 3)
        .apply(&boxscores, &games())
        .unwrap_err();
    assert!(matches!(
        err,
        TransformError::Contract(ContractError::Violation {
            input_size: 4,
            output_size: 3
        })
    ));
}

#[test]
fn test_duplicate_game_fan_out_breaks_rolling_contract() {
    let mut duplicated = games();
    duplicated.vstack_mut(&games().head(Some(1))).unwrap();
    let inputs = TableInputs::new()
        .named(BOXSCORE_DATA, observations())
        .named(GAME_DATA, duplicated);
    let err = RollingAverageStats::new(["pts"], 3)
        .transform(&inputs)
        .unwrap_err();
    assert!(err.as_contract().is_some_and(ContractError::is_violation));
}

#[test]
fn test_contracted_per_unit_is_still_a_generator() {
    let generators: Vec<Box<dyn FeatureGenerator>> = vec![
        Box::new(PerUnitStats::new(["pts"], "minutes")),
        Box::new(Contracted::new(
            PerUnitStats::new(["pts"], "minutes"),
            SameSizeContract::new(0, "data"),
        )),
    ];
    let inputs = TableInputs::new().arg(observations());
    for generator in &generators {
        let out = generator.transform(&inputs).unwrap();
        assert_eq!(out.height(), 3, "{}", generator.name());
    }
}
