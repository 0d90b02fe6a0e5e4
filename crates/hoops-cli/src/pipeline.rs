//! Feature pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read and clean the boxscore, game and player CSV files
//! 2. **Rates**: Derive per-unit stats and add them to the observations
//! 3. **Features**: Run every configured generator over the observations
//! 4. **Assemble**: Left-merge each feature table into the master table
//!
//! The master table starts from the observation keys and must end with one
//! row per observation.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use hoops_ingest::{load_boxscores, load_games, load_players};
use hoops_model::columns::{BOXSCORE_LINK, PLAYER_LINK};
use hoops_model::{FeaturePlan, JoinHow};
use hoops_transform::{
    BOXSCORE_DATA, ColumnNaming, DATA, FeatureGenerator, GAME_DATA, GameCount, Merge, PLAYER_DATA,
    PerUnitStats, PlayerAge, RollingAverageStats, SameSizeContract, SeasonGameCount, TableInputs,
    TransformError,
};

use crate::types::{PipelineResult, StepSummary};

/// Keys every feature table is merged on.
const FEATURE_KEYS: [&str; 2] = [PLAYER_LINK, BOXSCORE_LINK];

/// Generators the pipeline can run, with a one-line description.
pub const GENERATORS: [(&str, &str); 6] = [
    (
        PerUnitStats::NAME,
        "stat divided by a reference column, missing when the reference is zero",
    ),
    (
        RollingAverageStats::NAME,
        "mean of each stat over the player's previous N games",
    ),
    (
        SeasonGameCount::NAME,
        "game number within the player's season, playoffs counted separately",
    ),
    (
        GameCount::NAME,
        "career game number, playoffs counted separately",
    ),
    (PlayerAge::NAME, "player age in days on game day"),
    (Merge::NAME, "equi-join of two feature tables"),
];

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// The cleaned input tables.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub boxscores: DataFrame,
    pub games: DataFrame,
    pub players: DataFrame,
}

impl SourceTables {
    /// Read and clean the three source files.
    pub fn load(boxscores: &Path, games: &Path, players: &Path) -> Result<Self> {
        info_span!("ingest").in_scope(|| -> Result<Self> {
            Ok(Self {
                boxscores: load_boxscores(boxscores)
                    .with_context(|| format!("load boxscores from {}", boxscores.display()))?,
                games: load_games(games)
                    .with_context(|| format!("load games from {}", games.display()))?,
                players: load_players(players)
                    .with_context(|| format!("load players from {}", players.display()))?,
            })
        })
    }
}

// ============================================================================
// Stages 2-4: Rates, Features, Assemble
// ============================================================================

/// A generator plus the parameters shown in the step summary.
struct PlannedStep {
    detail: String,
    generator: Box<dyn FeatureGenerator>,
}

/// Build the master feature table described by `plan`.
pub fn build_features(sources: &SourceTables, plan: &FeaturePlan) -> Result<PipelineResult> {
    plan.validate().context("validate feature plan")?;
    let pipeline_start = Instant::now();

    let mut master = sources
        .boxscores
        .select(FEATURE_KEYS)
        .context("select observation keys")?;
    let mut observations = sources.boxscores.clone();
    let mut steps = Vec::with_capacity(plan.generator_count());

    if let Some(per_unit) = &plan.per_unit {
        let step = PlannedStep {
            detail: format!("per {}", per_unit.dividend),
            generator: Box::new(
                PerUnitStats::new(per_unit.stats.iter().cloned(), per_unit.dividend.clone())
                    .with_naming(ColumnNaming::from_template(per_unit.naming.as_deref())),
            ),
        };
        let inputs = TableInputs::new().named(DATA, &observations);
        let (rates, summary) = run_step(&step, &inputs)?;
        observations = merge_features(&observations, &rates)
            .context("add per-unit stats to observations")?;
        master = merge_features(&master, &rates).context("merge per-unit stats")?;
        steps.push(summary);
    }

    let inputs = TableInputs::new()
        .named(BOXSCORE_DATA, &observations)
        .named(GAME_DATA, &sources.games)
        .named(PLAYER_DATA, &sources.players);
    for step in planned_steps(plan) {
        let (features, summary) = run_step(&step, &inputs)?;
        master = merge_features(&master, &features)
            .with_context(|| format!("merge {} features", step.generator.name()))?;
        steps.push(summary);
    }

    let features = SameSizeContract::new(0, BOXSCORE_DATA)
        .enforce(&inputs, |_| Ok::<_, TransformError>(master))
        .context("master feature table lost alignment with observations")?;

    info!(
        rows = features.height(),
        columns = features.width(),
        steps = steps.len(),
        duration_ms = pipeline_start.elapsed().as_millis(),
        "feature table built"
    );
    Ok(PipelineResult { features, steps })
}

/// Generators that run over the observations once per-unit stats are in place.
fn planned_steps(plan: &FeaturePlan) -> Vec<PlannedStep> {
    let mut steps: Vec<PlannedStep> = plan
        .rolling
        .iter()
        .map(|rolling| PlannedStep {
            detail: format!("window {}", rolling.window),
            generator: Box::new(
                RollingAverageStats::new(rolling.stats.iter().cloned(), rolling.window)
                    .with_naming(ColumnNaming::from_template(rolling.naming.as_deref())),
            ),
        })
        .collect();
    if plan.season_game_count {
        steps.push(PlannedStep {
            detail: String::new(),
            generator: Box::new(SeasonGameCount),
        });
    }
    if plan.game_count {
        steps.push(PlannedStep {
            detail: String::new(),
            generator: Box::new(GameCount),
        });
    }
    if plan.player_age {
        steps.push(PlannedStep {
            detail: String::new(),
            generator: Box::new(PlayerAge),
        });
    }
    steps
}

fn run_step(step: &PlannedStep, inputs: &TableInputs) -> Result<(DataFrame, StepSummary)> {
    let name = step.generator.name();
    let span = info_span!("feature_step", generator = name, detail = %step.detail);
    let _guard = span.enter();
    let start = Instant::now();
    let features = step
        .generator
        .transform(inputs)
        .with_context(|| format!("run {name}"))?;
    let summary = StepSummary {
        generator: name,
        detail: step.detail.clone(),
        rows: features.height(),
        columns: features.width().saturating_sub(FEATURE_KEYS.len()),
        duration_ms: start.elapsed().as_millis(),
    };
    info!(
        rows = summary.rows,
        columns = summary.columns,
        duration_ms = summary.duration_ms,
        "step complete"
    );
    Ok((features, summary))
}

/// Left-merge `features` into `master` on the feature keys.
fn merge_features(master: &DataFrame, features: &DataFrame) -> Result<DataFrame> {
    let merged = Merge::new(FEATURE_KEYS)
        .with_how(JoinHow::Left)
        .apply(master, features)?;
    debug!(
        rows = merged.height(),
        columns = merged.width(),
        "features merged"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_listed_once() {
        let mut names: Vec<&str> = GENERATORS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), GENERATORS.len());
    }

    #[test]
    fn planned_steps_follow_plan() {
        let plan = FeaturePlan {
            game_count: false,
            ..FeaturePlan::default()
        };
        let names: Vec<&str> = planned_steps(&plan)
            .iter()
            .map(|step| step.generator.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "rolling_average_stats",
                "rolling_average_stats",
                "season_game_count",
                "player_age"
            ]
        );
    }
}
