//! The nine regression families.
//!
//! Every function here is total: given any slice of points (including empty or
//! degenerate ones) it returns *a* model. Downstream code relies on always
//! having nine models, so numerical trouble is absorbed locally:
//!
//! - linear-type fits let NaN/Inf coefficients through unchanged
//! - polynomial falls back to the zero model on a singular system
//! - logarithmic / logistic switch to fixed defaults below two usable points
//!
//! Points are expected in chronological order; the anchored fits
//! (`moores_law_fit`, `logarithmic_fit`'s fallback) read the last point.

use nalgebra::{Matrix3, Vector3};

use crate::domain::SeriesPoint;
use crate::math::{least_squares_line, penalized_line, solve_cramer3};
use crate::models::{LogarithmicFit, Model};

/// Growth coefficient used when a logarithmic fit has too few points.
const LOG_FALLBACK_GROWTH: f64 = 5.0;

/// Logistic defaults used when fewer than two points lie strictly inside `(0, L)`.
const LOGISTIC_FALLBACK_K: f64 = 0.005;
const LOGISTIC_FALLBACK_X0: f64 = 500.0;

/// `y = m·x + b` by ordinary least squares.
pub fn linear_fit(points: &[SeriesPoint]) -> Model {
    let line = least_squares_line(points);
    Model::Linear {
        slope: line.slope,
        intercept: line.intercept,
    }
}

/// `y = a·e^(b·x)`, fitted as a line through `(x, ln y)` for `y > 0`.
pub fn exponential_fit(points: &[SeriesPoint]) -> Model {
    let log_points: Vec<SeriesPoint> = points
        .iter()
        .filter(|p| p.y > 0.0)
        .map(|p| SeriesPoint::new(p.x, p.y.ln()))
        .collect();
    let line = least_squares_line(&log_points);
    Model::Exponential {
        a: line.intercept.exp(),
        b: line.slope,
    }
}

/// Fixed doubling from the most recent point: `y_last · 2^((x − x_last)/T)`.
///
/// Nothing is estimated; `doubling_days` is supplied by the caller.
pub fn moores_law_fit(points: &[SeriesPoint], doubling_days: f64) -> Model {
    let last = points.last().copied().unwrap_or(SeriesPoint::new(0.0, 0.0));
    Model::MooresLaw {
        start_day: last.x,
        start_score: last.y,
        doubling_days,
    }
}

/// `y = a·ln(x) + b` over points with `x > 0`.
pub fn logarithmic_fit(points: &[SeriesPoint]) -> Model {
    let log_points: Vec<SeriesPoint> = points
        .iter()
        .filter(|p| p.x > 0.0)
        .map(|p| SeriesPoint::new(p.x.ln(), p.y))
        .collect();

    if log_points.len() < 2 {
        let last = points.last().copied().unwrap_or(SeriesPoint::new(0.0, 0.0));
        return Model::Logarithmic(LogarithmicFit::Anchored {
            anchor_x: last.x,
            anchor_y: last.y,
            growth: LOG_FALLBACK_GROWTH,
        });
    }

    let line = least_squares_line(&log_points);
    let first_y = points.first().map(|p| p.y).unwrap_or(0.0);
    Model::Logarithmic(LogarithmicFit::Fitted {
        a: line.slope,
        b: line.intercept,
        first_y,
    })
}

/// `y = a·x² + b·x + c` from the 3×3 normal equations.
pub fn polynomial_fit(points: &[SeriesPoint]) -> Model {
    let mut s = [0.0_f64; 5]; // Σx^0..Σx^4
    let mut t = [0.0_f64; 3]; // Σy, Σxy, Σx²y
    for p in points {
        let x2 = p.x * p.x;
        s[0] += 1.0;
        s[1] += p.x;
        s[2] += x2;
        s[3] += x2 * p.x;
        s[4] += x2 * x2;
        t[0] += p.y;
        t[1] += p.x * p.y;
        t[2] += x2 * p.y;
    }

    let normal = Matrix3::new(
        s[0], s[1], s[2], //
        s[1], s[2], s[3], //
        s[2], s[3], s[4],
    );
    let rhs = Vector3::new(t[0], t[1], t[2]);

    match solve_cramer3(&normal, &rhs) {
        // Unknowns are ordered (c, b, a) to match the Σx^0.. column layout.
        Some(sol) => Model::Polynomial {
            a: sol[2],
            b: sol[1],
            c: sol[0],
        },
        None => Model::Polynomial {
            a: 0.0,
            b: 0.0,
            c: 0.0,
        },
    }
}

/// `y = L / (1 + e^(−k(x − x0)))` with a fixed ceiling `L`.
///
/// Linearized as `ln(L/y − 1) = −k·x + k·x0` over points with `0 < y < L`.
pub fn logistic_fit(points: &[SeriesPoint], ceiling: f64) -> Model {
    let transformed: Vec<SeriesPoint> = points
        .iter()
        .filter(|p| p.y > 0.0 && p.y < ceiling)
        .map(|p| SeriesPoint::new(p.x, (ceiling / p.y - 1.0).ln()))
        .collect();

    if transformed.len() < 2 {
        return Model::Logistic {
            ceiling,
            k: LOGISTIC_FALLBACK_K,
            x0: LOGISTIC_FALLBACK_X0,
        };
    }

    let line = least_squares_line(&transformed);
    let k = -line.slope;
    Model::Logistic {
        ceiling,
        k,
        x0: line.intercept / k,
    }
}

/// `y = a·x^b`, fitted in log-log space over points with `x > 0` and `y > 0`.
///
/// No minimum-count guard: with fewer than two usable points the
/// coefficients come out non-finite, as for `linear_fit`.
pub fn power_law_fit(points: &[SeriesPoint]) -> Model {
    let log_points: Vec<SeriesPoint> = points
        .iter()
        .filter(|p| p.x > 0.0 && p.y > 0.0)
        .map(|p| SeriesPoint::new(p.x.ln(), p.y.ln()))
        .collect();
    let line = least_squares_line(&log_points);
    Model::PowerLaw {
        a: line.intercept.exp(),
        b: line.slope,
    }
}

/// Linear fit with an L2 penalty `lambda · n` added to the slope denominator.
pub fn ridge_fit(points: &[SeriesPoint], lambda: f64) -> Model {
    let line = penalized_line(points, lambda);
    Model::Ridge {
        slope: line.slope,
        intercept: line.intercept,
        lambda,
    }
}

/// Linear fit over the `window` most recent points (by `x`).
pub fn local_linear_fit(points: &[SeriesPoint], window: usize) -> Model {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
    let recent = &sorted[sorted.len().saturating_sub(window)..];

    let line = least_squares_line(recent);
    Model::LocalLinear {
        slope: line.slope,
        intercept: line.intercept,
        window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn pts(raw: &[(f64, f64)]) -> Vec<SeriesPoint> {
        raw.iter().map(|&(x, y)| SeriesPoint::new(x, y)).collect()
    }

    #[test]
    fn linear_recovers_collinear_points() {
        let Model::Linear { slope, intercept } = linear_fit(&pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 4.0)]))
        else {
            panic!("expected linear model");
        };
        assert_abs_diff_eq!(slope, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(intercept, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn linear_on_identical_x_does_not_panic() {
        let m = linear_fit(&pts(&[(5.0, 1.0), (5.0, 3.0)]));
        assert!(!m.predict(10.0).is_finite());
    }

    #[test]
    fn exponential_recovers_growth_rate_and_skips_zero_scores() {
        let points = pts(&[(0.0, 0.0), (10.0, 2.0 * (0.1f64 * 10.0).exp()), (20.0, 2.0 * (0.1f64 * 20.0).exp())]);
        let Model::Exponential { a, b } = exponential_fit(&points) else {
            panic!("expected exponential model");
        };
        assert_relative_eq!(a, 2.0, epsilon = 1e-9);
        assert_relative_eq!(b, 0.1, epsilon = 1e-9);
    }

    #[test]
    fn moores_law_anchors_at_last_point() {
        let m = moores_law_fit(&pts(&[(0.0, 1.0), (100.0, 10.0)]), 365.0);
        assert_relative_eq!(m.predict(100.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(m.predict(465.0), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn moores_law_property_from_origin() {
        let m = moores_law_fit(&pts(&[(0.0, 10.0)]), 365.0);
        assert_relative_eq!(m.predict(365.0), 20.0, epsilon = 1e-9);
        assert_relative_eq!(m.predict(3650.0), 10.0 * 2f64.powi(10), epsilon = 1e-9);
    }

    #[test]
    fn logarithmic_falls_back_with_one_positive_x() {
        let m = logarithmic_fit(&pts(&[(0.0, 0.0), (30.0, 12.0)]));
        let Model::Logarithmic(LogarithmicFit::Anchored { anchor_x, anchor_y, growth }) = m else {
            panic!("expected anchored fallback, got {m:?}");
        };
        assert_eq!(anchor_x, 30.0);
        assert_eq!(anchor_y, 12.0);
        assert_eq!(growth, 5.0);
        assert_relative_eq!(m.predict(30.0), 12.0 + 5.0 * 2f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn logarithmic_fits_log_curve() {
        let points: Vec<SeriesPoint> = [0.0, 1.0, 10.0, 100.0]
            .iter()
            .map(|&x: &f64| SeriesPoint::new(x, if x > 0.0 { 3.0 * x.ln() + 4.0 } else { -1.0 }))
            .collect();
        let m = logarithmic_fit(&points);
        assert_relative_eq!(m.predict(50.0), 3.0 * 50f64.ln() + 4.0, epsilon = 1e-9);
        assert_eq!(m.predict(0.0), -1.0);
    }

    #[test]
    fn polynomial_recovers_quadratic() {
        let points: Vec<SeriesPoint> = (0..6)
            .map(|i| {
                let x = i as f64;
                SeriesPoint::new(x, 0.5 * x * x - 2.0 * x + 3.0)
            })
            .collect();
        let Model::Polynomial { a, b, c } = polynomial_fit(&points) else {
            panic!("expected polynomial model");
        };
        assert_abs_diff_eq!(a, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(b, -2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn polynomial_singular_gives_zero_model() {
        let m = polynomial_fit(&pts(&[(0.0, 1.0), (10.0, 5.0)]));
        assert_eq!(
            m,
            Model::Polynomial {
                a: 0.0,
                b: 0.0,
                c: 0.0
            }
        );
        assert_eq!(m.predict(123.0), 0.0);
    }

    #[test]
    fn logistic_recovers_parameters() {
        let (k, x0) = (0.01, 600.0);
        let points: Vec<SeriesPoint> = [0.0, 200.0, 400.0, 800.0]
            .iter()
            .map(|&x| SeriesPoint::new(x, 100.0 / (1.0 + (-k * (x - x0)).exp())))
            .collect();
        let Model::Logistic { ceiling, k: kf, x0: x0f } = logistic_fit(&points, 100.0) else {
            panic!("expected logistic model");
        };
        assert_eq!(ceiling, 100.0);
        assert_relative_eq!(kf, k, epsilon = 1e-9);
        assert_relative_eq!(x0f, x0, epsilon = 1e-6);
    }

    #[test]
    fn logistic_defaults_with_one_interior_point() {
        let m = logistic_fit(&pts(&[(0.0, 0.0), (10.0, 20.0), (20.0, 100.0)]), 100.0);
        assert_eq!(
            m,
            Model::Logistic {
                ceiling: 100.0,
                k: 0.005,
                x0: 500.0
            }
        );
    }

    #[test]
    fn power_law_recovers_exponent() {
        let points: Vec<SeriesPoint> = [0.0, 1.0, 4.0, 16.0]
            .iter()
            .map(|&x: &f64| SeriesPoint::new(x, 3.0 * x.powf(0.5)))
            .collect();
        let Model::PowerLaw { a, b } = power_law_fit(&points) else {
            panic!("expected power law model");
        };
        assert_relative_eq!(a, 3.0, epsilon = 1e-9);
        assert_relative_eq!(b, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn power_law_with_one_usable_point_is_degenerate_not_fatal() {
        let m = power_law_fit(&pts(&[(0.0, 0.0), (10.0, 5.0)]));
        assert!(!m.predict(20.0).is_finite());
    }

    #[test]
    fn ridge_is_damped_linear() {
        let points = pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 4.0)]);
        let Model::Ridge { slope, lambda, .. } = ridge_fit(&points, 0.1) else {
            panic!("expected ridge model");
        };
        assert_eq!(lambda, 0.1);
        // n·Σxy − ΣxΣy = 3·10 − 3·6 = 12; denominator 6 + 0.3.
        assert_relative_eq!(slope, 12.0 / 6.3, epsilon = 1e-12);
    }

    #[test]
    fn local_linear_uses_most_recent_window() {
        // Old flat history, recent steep trend.
        let points = pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 10.0), (30.0, 20.0), (40.0, 30.0)]);
        let Model::LocalLinear { slope, intercept, window } = local_linear_fit(&points, 3) else {
            panic!("expected local linear model");
        };
        assert_eq!(window, 3);
        assert_relative_eq!(slope, 1.0, epsilon = 1e-12);
        assert_relative_eq!(intercept, -10.0, epsilon = 1e-12);
    }

    #[test]
    fn local_linear_with_short_history_uses_everything() {
        let points = pts(&[(0.0, 1.0), (2.0, 5.0)]);
        let a = local_linear_fit(&points, 3);
        let b = linear_fit(&points);
        assert_relative_eq!(a.predict(7.0), b.predict(7.0), epsilon = 1e-12);
    }

    #[test]
    fn every_fit_tolerates_empty_input() {
        let empty: Vec<SeriesPoint> = Vec::new();
        let models = [
            linear_fit(&empty),
            exponential_fit(&empty),
            moores_law_fit(&empty, 365.0),
            logarithmic_fit(&empty),
            polynomial_fit(&empty),
            logistic_fit(&empty, 100.0),
            power_law_fit(&empty),
            ridge_fit(&empty, 0.1),
            local_linear_fit(&empty, 3),
        ];
        for m in models {
            let _ = m.predict(10.0);
        }
    }
}
