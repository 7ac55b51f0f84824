//! Command-line parsing for the benchmark score projector.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fitting/projection code.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::ModelKind;
use crate::projection::DEFAULT_HORIZON_DAYS;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "horizon", version, about = "Benchmark score saturation projector")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit all models, print crossings and the leaderboard, and optionally plot/export.
    Project(ProjectArgs),
    /// Print the time remaining until the selected model reaches the target.
    Countdown(CountdownArgs),
    /// List the selectable model names.
    Models,
    /// Plot a previously exported projection JSON.
    Plot(PlotArgs),
}

/// Options for a full projection run.
#[derive(Debug, Parser, Clone)]
pub struct ProjectArgs {
    /// Dataset JSON. Defaults to `$HORIZON_DATA`; the embedded dataset is used if unreadable.
    #[arg(long, value_name = "JSON")]
    pub data: Option<PathBuf>,

    /// Model driving the primary projection.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelKind::MooresLaw)]
    pub model: ModelKind,

    /// Doubling period (days) for Moore's law. Defaults to the dataset's setting.
    #[arg(long)]
    pub doubling_days: Option<f64>,

    /// Target score. Defaults to the dataset's setting.
    #[arg(long)]
    pub target: Option<f64>,

    /// How many days past the latest snapshot to search for a crossing.
    #[arg(long, default_value_t = DEFAULT_HORIZON_DAYS)]
    pub horizon_days: u32,

    /// Render an ASCII plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the projection table to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the projection (dates, actuals, model series, crossings) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,
}

/// Options for the countdown.
#[derive(Debug, Parser, Clone)]
pub struct CountdownArgs {
    /// Dataset JSON. Defaults to `$HORIZON_DATA`.
    #[arg(long, value_name = "JSON")]
    pub data: Option<PathBuf>,

    /// Model driving the countdown.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelKind::MooresLaw)]
    pub model: ModelKind,
}

/// Options for plotting a saved projection.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Projection JSON file produced by `horizon project --export-json`.
    #[arg(long, value_name = "JSON")]
    pub projection: PathBuf,

    /// Model series to draw.
    #[arg(short = 'm', long, value_enum, default_value_t = ModelKind::MooresLaw)]
    pub model: ModelKind,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,
}
