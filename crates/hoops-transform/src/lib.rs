//! Feature generators over player game observations.
//!
//! This crate derives model features from three tables: observations (one row
//! per player and game), games and players. It provides:
//!
//! - **inputs**: positional and keyword table bundles passed to generators
//! - **contract**: row-count contracts between a generator's input and output
//! - **generator**: the [`FeatureGenerator`] trait
//! - **rolling**, **per_unit**, **game_count**, **age**: row-preserving generators
//! - **merge**: equi-joins for assembling feature tables
//!
//! Every generator output carries `player_link` and `boxscore_link` so it can
//! be merged back into a master feature table.

pub mod age;
pub mod contract;
pub mod error;
pub mod frame;
pub mod game_count;
pub mod generator;
pub mod inputs;
pub mod merge;
pub mod naming;
pub mod per_unit;
pub mod rolling;

pub use age::PlayerAge;
pub use contract::{Contracted, InputLocator, RowCount, SameSizeContract};
pub use error::{ContractError, Result, TransformError};
pub use game_count::{GameCount, SeasonGameCount};
pub use generator::{BOXSCORE_DATA, DATA, FeatureGenerator, GAME_DATA, LEFT, PLAYER_DATA, RIGHT};
pub use inputs::{TableArg, TableInputs};
pub use merge::Merge;
pub use naming::ColumnNaming;
pub use per_unit::PerUnitStats;
pub use rolling::RollingAverageStats;
