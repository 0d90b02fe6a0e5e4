//! Source table ingestion.
//!
//! This crate loads the boxscore, game and player CSV files into Polars
//! DataFrames and applies the cleaning rules the feature generators rely on.
//!
//! # Features
//!
//! - **CSV Loading**: Read CSV files with a header row and date parsing
//! - **Cleaning**: Deduplicate boxscores and games, normalise player attributes
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use hoops_ingest::{load_boxscores, load_games, load_players};
//!
//! let boxscores = load_boxscores(Path::new("data/basic_boxscore.csv"))?;
//! let games = load_games(Path::new("data/games.csv"))?;
//! let players = load_players(Path::new("data/players.csv"))?;
//! ```

mod clean;
mod csv;
mod error;
mod load;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::read_csv_frame;

// === Cleaning ===
pub use clean::{clean_boxscores, clean_games, clean_players, parse_height_feet};

// === Loading ===
pub use load::{load_boxscores, load_games, load_players};
