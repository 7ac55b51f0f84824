//! Closed-form simple least squares.
//!
//! Most of the regression families reduce to fitting a straight line in some
//! transformed space:
//!
//! ```text
//! minimize Σ (y_i - (m x_i + b))^2  [+ λ n m^2 for ridge]
//! ```
//!
//! We solve that directly from running sums rather than building a design
//! matrix. The formulas are evaluated exactly as written, so degenerate inputs
//! (no points, all `x` equal) produce NaN/Inf coefficients instead of errors.
//! Callers of the fitted line must tolerate non-finite predictions.

use crate::domain::SeriesPoint;

/// Running sums over a point set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearSums {
    pub n: f64,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x2: f64,
}

impl LinearSums {
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a SeriesPoint>) -> Self {
        points.into_iter().fold(Self::default(), |mut acc, p| {
            acc.n += 1.0;
            acc.sum_x += p.x;
            acc.sum_y += p.y;
            acc.sum_xy += p.x * p.y;
            acc.sum_x2 += p.x * p.x;
            acc
        })
    }
}

/// Slope and intercept of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares line through `points`.
pub fn least_squares_line(points: &[SeriesPoint]) -> Line {
    penalized_line(points, 0.0)
}

/// Least squares line with an L2 penalty of `lambda * n` added to the slope
/// denominator. `lambda = 0` is plain OLS.
pub fn penalized_line(points: &[SeriesPoint], lambda: f64) -> Line {
    let s = LinearSums::from_points(points);
    let denom = s.n * s.sum_x2 - s.sum_x * s.sum_x + lambda * s.n;
    let slope = (s.n * s.sum_xy - s.sum_x * s.sum_y) / denom;
    let intercept = (s.sum_y - slope * s.sum_x) / s.n;
    Line { slope, intercept }
}
