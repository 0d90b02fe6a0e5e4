use anyhow::{Context, Result};
use tracing::info_span;

use hoops_cli::pipeline::{GENERATORS, SourceTables, build_features};
use hoops_cli::summary::generator_table;
use hoops_cli::types::PipelineResult;
use hoops_model::FeaturePlan;

use crate::cli::BuildArgs;

pub fn run_generators() -> Result<()> {
    println!("{}", generator_table(&GENERATORS));
    Ok(())
}

pub fn run_build(args: &BuildArgs) -> Result<PipelineResult> {
    let build_span = info_span!("build");
    let _build_guard = build_span.enter();

    let plan = match &args.plan {
        Some(path) => FeaturePlan::load(path)
            .with_context(|| format!("load feature plan {}", path.display()))?,
        None => FeaturePlan::default(),
    };
    let sources = SourceTables::load(&args.boxscores, &args.games, &args.players)?;
    build_features(&sources, &plan)
}
