//! Projection generator.
//!
//! The single entry point presentation code calls. One invocation:
//!
//! 1. merges the dataset into a series (fixing the reference date)
//! 2. fits all nine models
//! 3. finds each model's crossing day from the anchor (latest snapshot)
//! 4. samples every model quarterly for five years past the anchor
//! 5. shifts each model by its continuity offset and clamps to `[0, 115]`
//!
//! Nothing is cached between calls; two calls on the same dataset produce
//! identical output.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::data::{Series, build_series};
use crate::domain::{Dataset, FitQuality, ModelKind, ProjectionSettings};
use crate::error::AppError;
use crate::fit::{FitOptions, ModelFit, fit_all};
use crate::models::Model;
use crate::projection::calendar::sample_dates;
use crate::projection::threshold::ThresholdSolver;

/// Lower bound for projected scores.
pub const CLAMP_MIN: f64 = 0.0;
/// Upper bound for projected scores; leaves room for visible overshoot past 100.
pub const CLAMP_MAX: f64 = 115.0;

/// Everything that shapes a projection run.
#[derive(Debug, Clone)]
pub struct ProjectionOptions {
    pub fit: FitOptions,
    pub solver: ThresholdSolver,
    /// Calendar months between future samples.
    pub step_months: u32,
    /// How far past the anchor to sample, in calendar years.
    pub sample_years: u32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            fit: FitOptions::default(),
            solver: ThresholdSolver::default(),
            step_months: 3,
            sample_years: 5,
        }
    }
}

impl ProjectionOptions {
    /// Defaults, with the doubling period and target taken from the dataset.
    pub fn from_settings(settings: &ProjectionSettings) -> Self {
        let mut opts = Self::default();
        opts.fit.doubling_days = settings.doubling_time_days;
        opts.solver.target = settings.target_score;
        opts
    }
}

/// The latest real observation every projection starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub date: NaiveDate,
    /// Day offset from the reference date.
    pub day: f64,
    /// Best score of the latest snapshot.
    pub score: f64,
    /// Position of `date` in the projection's date axis.
    pub index: usize,
}

/// When a model first reaches the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossing {
    /// Whole days after the anchor; `None` when unreachable within the horizon.
    pub days: Option<u32>,
    pub date: Option<NaiveDate>,
}

impl Crossing {
    pub fn is_reachable(&self) -> bool {
        self.days.is_some()
    }
}

/// One model's fitted curve projected onto the shared date axis.
#[derive(Debug, Clone)]
pub struct ModelProjection {
    pub kind: ModelKind,
    pub model: Model,
    pub quality: FitQuality,
    /// `current best − raw prediction at the anchor`.
    pub offset: f64,
    /// `None` at historical dates, exactly the current best at the anchor,
    /// then offset-adjusted, clamped samples.
    pub values: Vec<Option<f64>>,
    pub crossing: Crossing,
}

/// Full output of [`generate_projection`].
///
/// `dates`, `labels`, `actual` and every `models[i].values` are parallel
/// arrays. `None` means "no value here", which is distinct from a score of 0.
#[derive(Debug, Clone)]
pub struct Projection {
    pub reference_date: NaiveDate,
    pub anchor: Anchor,
    pub dates: Vec<NaiveDate>,
    pub labels: Vec<String>,
    /// Observed best score at historical dates, `None` at future dates.
    pub actual: Vec<Option<f64>>,
    /// One entry per kind, in `ModelKind::ALL` order.
    pub models: Vec<ModelProjection>,
}

impl Projection {
    pub fn model(&self, kind: ModelKind) -> &ModelProjection {
        &self.models[kind.index()]
    }

    pub fn history_len(&self) -> usize {
        self.actual.iter().take_while(|v| v.is_some()).count()
    }
}

/// Short label used on chart axes and in exports, e.g. `Dec 1, 2024`.
pub fn format_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Build the full projection for `dataset`.
pub fn generate_projection(dataset: &Dataset, opts: &ProjectionOptions) -> Result<Projection, AppError> {
    let series = build_series(&dataset.historical_best_scores, &dataset.scores)?;
    let latest = dataset.latest_snapshot().ok_or_else(|| {
        AppError::insufficient_data("The dataset has no score snapshots to anchor a projection on.")
    })?;

    let anchor = Anchor {
        date: latest.date,
        day: series.day_of(latest.date),
        score: latest.best_score,
        index: series.index_of(latest.date).ok_or_else(|| {
            AppError::insufficient_data(format!("Latest snapshot {} is missing from the merged series.", latest.date))
        })?,
    };
    debug!(
        reference = %series.reference_date,
        anchor = %anchor.date,
        anchor_day = anchor.day,
        points = series.len(),
        "series built"
    );

    let fits = fit_all(&series.points, &opts.fit);
    let future = sample_dates(anchor.date, opts.step_months, opts.sample_years);

    let mut dates = series.dates.clone();
    dates.extend(future.iter().copied());
    let labels = dates.iter().map(|&d| format_label(d)).collect();

    let mut actual: Vec<Option<f64>> = series.points.iter().map(|p| Some(p.y)).collect();
    actual.resize(dates.len(), None);

    let future_points: Vec<f64> = future.iter().map(|&d| series.day_of(d)).collect();
    let models: Vec<ModelProjection> = fits
        .into_iter()
        .map(|fit| project_model(fit, &series, &anchor, &future_points, opts))
        .collect();

    let reachable = models.iter().filter(|m| m.crossing.is_reachable()).count();
    info!(
        anchor = %anchor.date,
        current_best = anchor.score,
        samples = future.len(),
        reachable,
        "projection generated"
    );

    Ok(Projection {
        reference_date: series.reference_date,
        anchor,
        dates,
        labels,
        actual,
        models,
    })
}

fn project_model(
    fit: ModelFit,
    series: &Series,
    anchor: &Anchor,
    future_days: &[f64],
    opts: &ProjectionOptions,
) -> ModelProjection {
    let ModelFit { model, quality } = fit;
    let offset = continuity_offset(&model, anchor);

    let mut values: Vec<Option<f64>> = vec![None; series.len()];
    values[anchor.index] = Some(anchor.score);
    values.extend(future_days.iter().map(|&x| adjusted_sample(&model, offset, x)));

    let days = opts.solver.days_to_target(&model, anchor.day);
    let date = days.and_then(|d| anchor.date.checked_add_days(Days::new(u64::from(d))));

    ModelProjection {
        kind: model.kind(),
        model,
        quality,
        offset,
        values,
        crossing: Crossing { days, date },
    }
}

/// Additive shift that makes `model` pass through the anchor observation.
pub fn continuity_offset(model: &Model, anchor: &Anchor) -> f64 {
    anchor.score - model.predict(anchor.day)
}

/// `predict(x) + offset`, clamped to `[CLAMP_MIN, CLAMP_MAX]`; NaN becomes `None`.
pub fn adjusted_sample(model: &Model, offset: f64, x: f64) -> Option<f64> {
    let value = model.predict(x) + offset;
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(CLAMP_MIN, CLAMP_MAX))
    }
}
