//! CLI argument definitions for the feature builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hoops",
    version,
    about = "Build leakage-safe player features from boxscore data",
    long_about = "Build model features from boxscore, game and player tables.\n\n\
                  Every feature of a game is derived only from games played before it,\n\
                  and every feature table keeps one row per player observation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the source tables and build the feature table.
    Build(BuildArgs),

    /// List the available feature generators.
    Generators,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Boxscore CSV, one row per player and game.
    #[arg(long = "boxscores", value_name = "PATH")]
    pub boxscores: PathBuf,

    /// Game CSV, one row per game.
    #[arg(long = "games", value_name = "PATH")]
    pub games: PathBuf,

    /// Player CSV, one row per player.
    #[arg(long = "players", value_name = "PATH")]
    pub players: PathBuf,

    /// Feature plan in TOML (default: per-minute rates and 5/10 game averages).
    #[arg(long = "plan", value_name = "PLAN")]
    pub plan: Option<PathBuf>,

    /// Number of feature rows to print.
    #[arg(long = "preview", value_name = "N", default_value_t = 5)]
    pub preview: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
