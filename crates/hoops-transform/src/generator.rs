//! The capability every feature generator implements.
//!
//! Generators are stateless: their only state is the configuration captured
//! at construction, so one instance can be reused for any number of calls and
//! shared across threads. Callers hold them as `Box<dyn FeatureGenerator>` and
//! never branch on the concrete type.

use polars::prelude::DataFrame;

use crate::error::Result;
use crate::inputs::TableInputs;

/// Keyword of the observation table.
pub const BOXSCORE_DATA: &str = "boxscore_data";
/// Keyword of the game table.
pub const GAME_DATA: &str = "game_data";
/// Keyword of the player table.
pub const PLAYER_DATA: &str = "player_data";
/// Keyword of the single input of per-unit stats.
pub const DATA: &str = "data";
/// Keywords of the two merge inputs.
pub const LEFT: &str = "left";
pub const RIGHT: &str = "right";

/// A transformation from input tables to a feature table.
pub trait FeatureGenerator: Send + Sync {
    /// Stable identifier used in logs and summaries.
    fn name(&self) -> &'static str;

    /// Derive the feature table from `inputs`.
    ///
    /// # Errors
    ///
    /// Returns an error if an input or column is missing, a parameter is
    /// invalid, polars fails, or a row-count contract is broken.
    fn transform(&self, inputs: &TableInputs) -> Result<DataFrame>;
}

impl<G: FeatureGenerator + ?Sized> FeatureGenerator for Box<G> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn transform(&self, inputs: &TableInputs) -> Result<DataFrame> {
        (**self).transform(inputs)
    }
}
