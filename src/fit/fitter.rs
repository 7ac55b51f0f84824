//! Fitting orchestration for a single series.
//!
//! Given the chronological series points we:
//! - fit each of the nine model kinds independently (parallel)
//! - record in-sample diagnostics (SSE / RMSE) for reporting
//!
//! and return the fits in canonical `ModelKind::ALL` order.

use rayon::prelude::*;
use tracing::debug;

use crate::domain::{FitQuality, ModelKind, SeriesPoint};
use crate::fit::regression::{
    exponential_fit, linear_fit, local_linear_fit, logarithmic_fit, logistic_fit, moores_law_fit,
    polynomial_fit, power_law_fit, ridge_fit,
};
use crate::models::Model;

/// Knobs for the families that take a fixed parameter.
#[derive(Debug, Clone)]
pub struct FitOptions {
    /// Doubling period (days) for the Moore's-law projection.
    pub doubling_days: f64,
    /// Upper asymptote of the logistic curve.
    pub logistic_ceiling: f64,
    /// L2 penalty for the ridge line.
    pub ridge_lambda: f64,
    /// Number of most recent points used by the local linear fit.
    pub local_window: usize,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            doubling_days: 365.0,
            logistic_ceiling: 100.0,
            ridge_lambda: 0.1,
            local_window: 3,
        }
    }
}

/// One fitted model plus its diagnostics.
#[derive(Debug, Clone)]
pub struct ModelFit {
    pub model: Model,
    pub quality: FitQuality,
}

impl ModelFit {
    pub fn kind(&self) -> ModelKind {
        self.model.kind()
    }
}

/// Fit a single model kind.
pub fn fit_model(kind: ModelKind, points: &[SeriesPoint], opts: &FitOptions) -> Model {
    match kind {
        ModelKind::Linear => linear_fit(points),
        ModelKind::Exponential => exponential_fit(points),
        ModelKind::MooresLaw => moores_law_fit(points, opts.doubling_days),
        ModelKind::Logarithmic => logarithmic_fit(points),
        ModelKind::Polynomial => polynomial_fit(points),
        ModelKind::Logistic => logistic_fit(points, opts.logistic_ceiling),
        ModelKind::PowerLaw => power_law_fit(points),
        ModelKind::Ridge => ridge_fit(points, opts.ridge_lambda),
        ModelKind::LocalLinear => local_linear_fit(points, opts.local_window),
    }
}

/// Fit all nine model kinds over the same series.
///
/// The fits share nothing but the read-only input, so they run on the rayon
/// pool; `collect` keeps `ModelKind::ALL` order.
pub fn fit_all(points: &[SeriesPoint], opts: &FitOptions) -> Vec<ModelFit> {
    ModelKind::ALL
        .par_iter()
        .map(|&kind| {
            let model = fit_model(kind, points, opts);
            let quality = fit_quality(&model, points);
            debug!(model = %kind, sse = quality.sse, rmse = quality.rmse, "fitted");
            ModelFit { model, quality }
        })
        .collect()
}

/// SSE and RMSE of `model` over the training points.
pub fn fit_quality(model: &Model, points: &[SeriesPoint]) -> FitQuality {
    let sse: f64 = points
        .iter()
        .map(|p| {
            let r = p.y - model.predict(p.x);
            r * r
        })
        .sum();
    let n = points.len();
    let rmse = if n == 0 { f64::NAN } else { (sse / n as f64).sqrt() };
    FitQuality { sse, rmse, n }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sample_points() -> Vec<SeriesPoint> {
        [(0.0, 0.0), (120.0, 2.5), (300.0, 6.0), (520.0, 9.1), (732.0, 18.6), (752.0, 18.6)]
            .iter()
            .map(|&(x, y)| SeriesPoint::new(x, y))
            .collect()
    }

    #[test]
    fn fit_all_returns_nine_models_in_canonical_order() {
        let fits = fit_all(&sample_points(), &FitOptions::default());
        assert_eq!(fits.len(), ModelKind::ALL.len());
        for (fit, kind) in fits.iter().zip(ModelKind::ALL) {
            assert_eq!(fit.kind(), kind);
            assert_eq!(fit.quality.n, 6);
        }
    }

    #[test]
    fn fit_all_is_deterministic() {
        let points = sample_points();
        let opts = FitOptions::default();
        let a = fit_all(&points, &opts);
        let b = fit_all(&points, &opts);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.model, y.model);
        }
    }

    #[test]
    fn quality_is_zero_for_exact_fit() {
        let points: Vec<SeriesPoint> = (0..4).map(|i| SeriesPoint::new(i as f64, 3.0 * i as f64 + 1.0)).collect();
        let model = fit_model(ModelKind::Linear, &points, &FitOptions::default());
        let q = fit_quality(&model, &points);
        assert_abs_diff_eq!(q.sse, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.rmse, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn options_reach_parameterized_families() {
        let opts = FitOptions {
            doubling_days: 180.0,
            logistic_ceiling: 90.0,
            ridge_lambda: 2.0,
            local_window: 2,
        };
        let points = sample_points();
        match fit_model(ModelKind::MooresLaw, &points, &opts) {
            Model::MooresLaw { doubling_days, .. } => assert_eq!(doubling_days, 180.0),
            other => panic!("unexpected {other:?}"),
        }
        match fit_model(ModelKind::Logistic, &points, &opts) {
            Model::Logistic { ceiling, .. } => assert_eq!(ceiling, 90.0),
            other => panic!("unexpected {other:?}"),
        }
        match fit_model(ModelKind::LocalLinear, &points, &opts) {
            Model::LocalLinear { window, slope, .. } => {
                assert_eq!(window, 2);
                assert_abs_diff_eq!(slope, 0.0, epsilon = 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
