use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a feature plan.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read feature plan {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid feature plan: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("rolling window must be at least 1 (stats: {stats})")]
    ZeroWindow { stats: String },
    #[error("{section} has no stats configured")]
    EmptyStats { section: &'static str },
    #[error("unknown join type '{0}', expected inner, left or outer")]
    UnknownJoin(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
