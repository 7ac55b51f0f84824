//! Fitted model values and their prediction functions.
//!
//! A [`Model`] is a tagged variant: the discriminant says which of the nine
//! families it is and the payload carries that family's fitted parameters.
//! `predict` is pure and defined for every real `x`, including far outside
//! the training range, so the projection code can iterate over the variants
//! without per-kind branching.

use serde::{Deserialize, Serialize};

use crate::domain::ModelKind;

/// Anything that maps a day offset to a predicted score.
///
/// Implemented for [`Model`] and for plain closures, which keeps the threshold
/// solver usable with ad-hoc curves.
pub trait Predict {
    fn predict(&self, x: f64) -> f64;
}

impl<F> Predict for F
where
    F: Fn(f64) -> f64,
{
    fn predict(&self, x: f64) -> f64 {
        self(x)
    }
}

/// How a logarithmic fit was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum LogarithmicFit {
    /// `a·ln(x) + b` for `x > 0`; `first_y` for `x <= 0`.
    #[serde(rename_all = "camelCase")]
    Fitted { a: f64, b: f64, first_y: f64 },
    /// Too few positive-`x` points: gentle log growth from the last point.
    #[serde(rename_all = "camelCase")]
    Anchored {
        anchor_x: f64,
        anchor_y: f64,
        growth: f64,
    },
}

/// A fitted regression model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Model {
    Linear {
        slope: f64,
        intercept: f64,
    },
    Exponential {
        a: f64,
        b: f64,
    },
    #[serde(rename_all = "camelCase")]
    MooresLaw {
        start_day: f64,
        start_score: f64,
        doubling_days: f64,
    },
    Logarithmic(LogarithmicFit),
    Polynomial {
        a: f64,
        b: f64,
        c: f64,
    },
    #[serde(rename_all = "camelCase")]
    Logistic {
        ceiling: f64,
        k: f64,
        x0: f64,
    },
    PowerLaw {
        a: f64,
        b: f64,
    },
    Ridge {
        slope: f64,
        intercept: f64,
        lambda: f64,
    },
    LocalLinear {
        slope: f64,
        intercept: f64,
        window: usize,
    },
}

impl Model {
    pub fn kind(&self) -> ModelKind {
        match self {
            Model::Linear { .. } => ModelKind::Linear,
            Model::Exponential { .. } => ModelKind::Exponential,
            Model::MooresLaw { .. } => ModelKind::MooresLaw,
            Model::Logarithmic(_) => ModelKind::Logarithmic,
            Model::Polynomial { .. } => ModelKind::Polynomial,
            Model::Logistic { .. } => ModelKind::Logistic,
            Model::PowerLaw { .. } => ModelKind::PowerLaw,
            Model::Ridge { .. } => ModelKind::Ridge,
            Model::LocalLinear { .. } => ModelKind::LocalLinear,
        }
    }

    /// Predicted score at day offset `x`.
    pub fn predict(&self, x: f64) -> f64 {
        match *self {
            Model::Linear { slope, intercept }
            | Model::Ridge {
                slope, intercept, ..
            }
            | Model::LocalLinear {
                slope, intercept, ..
            } => slope * x + intercept,
            Model::Exponential { a, b } => a * (b * x).exp(),
            Model::MooresLaw {
                start_day,
                start_score,
                doubling_days,
            } => start_score * 2f64.powf((x - start_day) / doubling_days),
            Model::Logarithmic(LogarithmicFit::Fitted { a, b, first_y }) => {
                if x <= 0.0 {
                    first_y
                } else {
                    a * x.ln() + b
                }
            }
            Model::Logarithmic(LogarithmicFit::Anchored {
                anchor_x,
                anchor_y,
                growth,
            }) => anchor_y + growth * ((x + 1.0) / (anchor_x + 1.0) + 1.0).ln(),
            Model::Polynomial { a, b, c } => a * x * x + b * x + c,
            Model::Logistic { ceiling, k, x0 } => ceiling / (1.0 + (-k * (x - x0)).exp()),
            Model::PowerLaw { a, b } => a * x.powf(b),
        }
    }
}

impl Predict for Model {
    fn predict(&self, x: f64) -> f64 {
        Model::predict(self, x)
    }
}
