use polars::prelude::DataFrame;

/// Outcome of one generator run inside the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSummary {
    pub generator: &'static str,
    /// Parameters that distinguish this step, e.g. `window 5`.
    pub detail: String,
    pub rows: usize,
    /// Feature columns the step added, keys excluded.
    pub columns: usize,
    pub duration_ms: u128,
}

#[derive(Debug)]
pub struct PipelineResult {
    /// Master feature table, one row per observation.
    pub features: DataFrame,
    pub steps: Vec<StepSummary>,
}

impl PipelineResult {
    /// Feature columns in the master table, keys excluded.
    pub fn feature_columns(&self) -> usize {
        self.features.width().saturating_sub(2)
    }
}
