//! Shared "projection pipeline" logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! dataset load -> option resolution -> projection -> primary selection -> leaderboard
//!
//! The subcommands can then focus on presentation.

use tracing::debug;

use crate::domain::ProjectionConfig;
use crate::error::AppError;
use crate::io::ingest::{LoadedDataset, load_dataset};
use crate::projection::{PrimaryProjection, Projection, ProjectionContext, ProjectionOptions, generate_projection};
use crate::report::{DEBUT_TOP_N, Debut, Leaderboard, debut_points, leaderboard};

/// All computed outputs of a single `horizon project` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub loaded: LoadedDataset,
    pub options: ProjectionOptions,
    pub projection: Projection,
    pub context: ProjectionContext,
    pub primary: PrimaryProjection,
    pub leaderboard: Option<Leaderboard>,
    pub debuts: Vec<Debut>,
}

impl RunOutput {
    pub fn target(&self) -> f64 {
        self.options.solver.target
    }
}

/// Load the dataset and execute the full projection.
pub fn run_projection(config: &ProjectionConfig) -> Result<RunOutput, AppError> {
    let loaded = load_dataset(config.data_path.as_deref());
    run_projection_with_dataset(config, loaded)
}

/// Execute the projection on an already loaded dataset.
pub fn run_projection_with_dataset(config: &ProjectionConfig, loaded: LoadedDataset) -> Result<RunOutput, AppError> {
    let options = resolve_options(config, &loaded)?;
    debug!(?options, "projection options resolved");

    let projection = generate_projection(&loaded.dataset, &options)?;
    let context = ProjectionContext::new(config.selected);
    let primary = context.primary(&projection);

    let leaderboard = leaderboard(&loaded.dataset, options.solver.target);
    let debuts = debut_points(&loaded.dataset, DEBUT_TOP_N);

    Ok(RunOutput {
        loaded,
        options,
        projection,
        context,
        primary,
        leaderboard,
        debuts,
    })
}

/// Dataset settings overridden by CLI flags, then validated.
pub fn resolve_options(config: &ProjectionConfig, loaded: &LoadedDataset) -> Result<ProjectionOptions, AppError> {
    let mut options = ProjectionOptions::from_settings(&loaded.dataset.projection);
    if let Some(days) = config.doubling_time_days {
        options.fit.doubling_days = days;
    }
    if let Some(target) = config.target_score {
        options.solver.target = target;
    }
    options.solver.horizon_days = config.horizon_days;

    if !(options.fit.doubling_days.is_finite() && options.fit.doubling_days > 0.0) {
        return Err(AppError::usage(format!(
            "Doubling period must be a positive number of days (got {}).",
            options.fit.doubling_days
        )));
    }
    if !options.solver.target.is_finite() {
        return Err(AppError::usage("Target score must be finite."));
    }
    if options.solver.horizon_days == 0 {
        return Err(AppError::usage("--horizon-days must be at least 1."));
    }

    Ok(options)
}
