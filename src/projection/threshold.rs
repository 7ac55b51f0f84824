//! Threshold crossing search.
//!
//! Several families (polynomial, logistic, the anchored log fallback) have no
//! convenient closed-form inverse, so the crossing day is found by a bounded
//! integer-day scan. Every `predict` is O(1), which keeps a multi-thousand-day
//! horizon cheap, and the fixed bound guarantees termination even when a
//! degenerate fit predicts NaN everywhere.

use crate::models::Predict;

/// Default search horizon in days (~13.7 years).
pub const DEFAULT_HORIZON_DAYS: u32 = 5000;

/// Default saturation threshold.
pub const DEFAULT_TARGET: f64 = 100.0;

/// Scan parameters for [`ThresholdSolver::days_to_target`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSolver {
    pub target: f64,
    pub horizon_days: u32,
}

impl Default for ThresholdSolver {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

impl ThresholdSolver {
    pub fn new(target: f64, horizon_days: u32) -> Self {
        Self {
            target,
            horizon_days,
        }
    }

    /// First offset `i` in `0..horizon_days` with `predict(start_day + i) >= target`.
    ///
    /// `None` means the model does not reach the target within the horizon.
    /// Choosing a display fallback for that case is up to the caller.
    pub fn days_to_target(&self, model: &impl Predict, start_day: f64) -> Option<u32> {
        (0..self.horizon_days).find(|&offset| model.predict(start_day + f64::from(offset)) >= self.target)
    }
}
