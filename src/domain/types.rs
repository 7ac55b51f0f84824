//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - parsed straight from the dataset JSON
//! - used in-memory during fitting and projection
//! - exported to JSON/CSV

use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The nine regression families fitted to the score history.
///
/// Declaration order is the canonical output order: every per-model structure
/// in a projection lists kinds in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum ModelKind {
    #[value(name = "linear")]
    Linear,
    #[value(name = "exponential")]
    Exponential,
    #[value(name = "mooresLaw")]
    MooresLaw,
    #[value(name = "logarithmic")]
    Logarithmic,
    #[value(name = "polynomial")]
    Polynomial,
    #[value(name = "logistic")]
    Logistic,
    #[value(name = "powerLaw")]
    PowerLaw,
    #[value(name = "ridge")]
    Ridge,
    #[value(name = "localLinear")]
    LocalLinear,
}

impl ModelKind {
    pub const ALL: [ModelKind; 9] = [
        ModelKind::Linear,
        ModelKind::Exponential,
        ModelKind::MooresLaw,
        ModelKind::Logarithmic,
        ModelKind::Polynomial,
        ModelKind::Logistic,
        ModelKind::PowerLaw,
        ModelKind::Ridge,
        ModelKind::LocalLinear,
    ];

    /// Machine name used in JSON, CSV headers and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Exponential => "exponential",
            ModelKind::MooresLaw => "mooresLaw",
            ModelKind::Logarithmic => "logarithmic",
            ModelKind::Polynomial => "polynomial",
            ModelKind::Logistic => "logistic",
            ModelKind::PowerLaw => "powerLaw",
            ModelKind::Ridge => "ridge",
            ModelKind::LocalLinear => "localLinear",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear",
            ModelKind::Exponential => "Exponential",
            ModelKind::MooresLaw => "Moore's Law",
            ModelKind::Logarithmic => "Logarithmic",
            ModelKind::Polynomial => "Polynomial",
            ModelKind::Logistic => "Logistic (S-curve)",
            ModelKind::PowerLaw => "Power Law",
            ModelKind::Ridge => "Ridge",
            ModelKind::LocalLinear => "Local Linear",
        }
    }

    /// Position of this kind in [`ModelKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AppError::unknown_model(s))
    }
}

/// A dated best-score milestone (e.g. "first model to reach X%").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub date: NaiveDate,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// One model's score inside a snapshot roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelScore {
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub provider: String,
}

/// A dated leaderboard snapshot with its precomputed best score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub date: NaiveDate,
    pub best_score: f64,
    #[serde(default)]
    pub models: Vec<ModelScore>,
}

/// Projection settings carried by the dataset itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default = "default_doubling_time_days")]
    pub doubling_time_days: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_score: Option<f64>,
    #[serde(default = "default_target_score")]
    pub target_score: f64,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            method: None,
            doubling_time_days: default_doubling_time_days(),
            start_date: None,
            start_score: None,
            target_score: default_target_score(),
        }
    }
}

fn default_doubling_time_days() -> f64 {
    365.0
}

fn default_target_score() -> f64 {
    100.0
}

/// The full in-memory dataset handed to the projection engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
    #[serde(default)]
    pub historical_best_scores: Vec<Milestone>,
    #[serde(default)]
    pub scores: Vec<Snapshot>,
    #[serde(default)]
    pub projection: ProjectionSettings,
}

impl Dataset {
    /// The snapshot with the greatest date (later list entries win ties).
    pub fn latest_snapshot(&self) -> Option<&Snapshot> {
        self.scores
            .iter()
            .enumerate()
            .max_by_key(|(idx, s)| (s.date, *idx))
            .map(|(_, s)| s)
    }
}

/// A single fitting observation: `x` days since the reference date, `y` score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// In-sample fit diagnostics. Informational only; never used for selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    pub sse: f64,
    pub rmse: f64,
    pub n: usize,
}

/// A run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags plus the dataset's own projection block.
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    pub data_path: Option<PathBuf>,
    pub selected: ModelKind,

    /// Overrides for the dataset's projection settings.
    pub doubling_time_days: Option<f64>,
    pub target_score: Option<f64>,
    pub horizon_days: u32,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
}
