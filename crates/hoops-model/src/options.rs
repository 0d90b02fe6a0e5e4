//! Feature plan configuration.
//!
//! A [`FeaturePlan`] tells the orchestrator which generators to run and with
//! which parameters. Plans are read from TOML:
//!
//! ```toml
//! season_game_count = true
//! game_count = true
//! player_age = true
//!
//! [per_unit]
//! stats = ["pts", "trb"]
//! dividend = "minutes"
//!
//! [[rolling]]
//! stats = ["pts", "pts_per_minutes"]
//! window = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Per-unit rate configuration (`stat / dividend`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerUnitPlan {
    pub stats: Vec<String>,
    pub dividend: String,
    /// Output name template; `{stat}` is replaced by the source column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming: Option<String>,
}

/// Rolling average configuration for one window size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingPlan {
    pub stats: Vec<String>,
    pub window: usize,
    /// Output name template; `{stat}` is replaced by the source column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming: Option<String>,
}

/// Which features to derive from the observation, game and player tables.
///
/// Sections left out of a TOML plan are disabled, except the three counter
/// and age switches which default to enabled. [`FeaturePlan::default`] is the
/// full basketball plan used when no file is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturePlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_unit: Option<PerUnitPlan>,
    #[serde(default)]
    pub rolling: Vec<RollingPlan>,
    #[serde(default = "enabled")]
    pub season_game_count: bool,
    #[serde(default = "enabled")]
    pub game_count: bool,
    #[serde(default = "enabled")]
    pub player_age: bool,
}

fn enabled() -> bool {
    true
}

impl Default for FeaturePlan {
    fn default() -> Self {
        let per_unit_stats = ["pts", "trb", "ast"];
        let mut rolling_stats: Vec<String> = ["pts", "trb", "ast", "minutes"]
            .into_iter()
            .map(String::from)
            .collect();
        rolling_stats.extend(per_unit_stats.iter().map(|stat| format!("{stat}_per_minutes")));
        Self {
            per_unit: Some(PerUnitPlan {
                stats: per_unit_stats.into_iter().map(String::from).collect(),
                dividend: "minutes".to_string(),
                naming: None,
            }),
            rolling: [5, 10]
                .into_iter()
                .map(|window| RollingPlan {
                    stats: rolling_stats.clone(),
                    window,
                    naming: None,
                })
                .collect(),
            season_game_count: true,
            game_count: true,
            player_age: true,
        }
    }
}

impl FeaturePlan {
    /// Parse and validate a plan from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let plan: Self = toml::from_str(contents)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Read, parse and validate a plan file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject plans no generator could run.
    pub fn validate(&self) -> Result<()> {
        if let Some(per_unit) = &self.per_unit
            && per_unit.stats.is_empty()
        {
            return Err(PlanError::EmptyStats {
                section: "per_unit",
            });
        }
        for rolling in &self.rolling {
            if rolling.stats.is_empty() {
                return Err(PlanError::EmptyStats { section: "rolling" });
            }
            if rolling.window == 0 {
                return Err(PlanError::ZeroWindow {
                    stats: rolling.stats.join(", "),
                });
            }
        }
        Ok(())
    }

    /// Number of generators the plan runs.
    pub fn generator_count(&self) -> usize {
        usize::from(self.per_unit.is_some())
            + self.rolling.len()
            + usize::from(self.season_game_count)
            + usize::from(self.game_count)
            + usize::from(self.player_age)
    }
}
