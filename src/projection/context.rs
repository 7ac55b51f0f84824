//! Caller-held projection context.
//!
//! Holds which model drives the primary countdown. Keeping it in a value the
//! caller owns (rather than process-wide state) lets independent projection
//! runs coexist.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::domain::ModelKind;
use crate::error::AppError;
use crate::projection::calendar::add_years_rolling;
use crate::projection::generator::Projection;

/// Years added to the anchor when the selected model never crosses.
pub const FALLBACK_YEARS: u32 = 5;

/// The countdown target produced by the selected model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimaryProjection {
    pub kind: ModelKind,
    pub target_date: NaiveDate,
    pub days_to_target: u32,
    pub current_best: f64,
    /// True when the model never reached the target and the 5-year default
    /// was substituted.
    pub fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionContext {
    selected: ModelKind,
}

impl Default for ProjectionContext {
    fn default() -> Self {
        Self {
            selected: ModelKind::MooresLaw,
        }
    }
}

impl ProjectionContext {
    pub fn new(selected: ModelKind) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> ModelKind {
        self.selected
    }

    /// Switch the primary model by name (e.g. `"powerLaw"`).
    ///
    /// Unknown names are rejected and the previous selection stays active.
    pub fn select(&mut self, name: &str) -> Result<ModelKind, AppError> {
        let kind: ModelKind = name.parse()?;
        self.selected = kind;
        info!(model = %kind, "primary model selected");
        Ok(kind)
    }

    /// Countdown target for the selected model.
    pub fn primary(&self, projection: &Projection) -> PrimaryProjection {
        let anchor = &projection.anchor;
        let crossing = projection.model(self.selected).crossing;

        let (target_date, days_to_target, fallback) = match (crossing.days, crossing.date) {
            (Some(days), Some(date)) => (date, days, false),
            _ => (
                add_years_rolling(anchor.date, FALLBACK_YEARS).unwrap_or(anchor.date),
                365 * FALLBACK_YEARS,
                true,
            ),
        };

        PrimaryProjection {
            kind: self.selected,
            target_date,
            days_to_target,
            current_best: anchor.score,
            fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_dataset;
    use crate::error::ErrorKind;
    use crate::projection::generator::{ProjectionOptions, generate_projection};

    #[test]
    fn default_selection_is_moores_law() {
        assert_eq!(ProjectionContext::default().selected(), ModelKind::MooresLaw);
    }

    #[test]
    fn unknown_name_keeps_previous_selection() {
        let mut ctx = ProjectionContext::default();
        assert_eq!(ctx.select("powerLaw").unwrap(), ModelKind::PowerLaw);
        let err = ctx.select("quantum").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownModel);
        assert_eq!(ctx.selected(), ModelKind::PowerLaw);
    }

    #[test]
    fn every_kind_name_is_selectable() {
        let mut ctx = ProjectionContext::default();
        for kind in ModelKind::ALL {
            assert_eq!(ctx.select(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn primary_uses_crossing_when_reachable() {
        let projection = generate_projection(&fallback_dataset(), &ProjectionOptions::default()).unwrap();
        let ctx = ProjectionContext::default();
        let primary = ctx.primary(&projection);
        let crossing = projection.model(ModelKind::MooresLaw).crossing;
        assert!(!primary.fallback);
        assert_eq!(Some(primary.days_to_target), crossing.days);
        assert_eq!(Some(primary.target_date), crossing.date);
        assert_eq!(primary.current_best, 18.6);
    }

    #[test]
    fn primary_falls_back_to_five_years() {
        let mut opts = ProjectionOptions::default();
        opts.solver.horizon_days = 10;
        let projection = generate_projection(&fallback_dataset(), &opts).unwrap();
        let primary = ProjectionContext::new(ModelKind::MooresLaw).primary(&projection);
        assert!(primary.fallback);
        assert_eq!(primary.days_to_target, 1825);
        assert_eq!(primary.target_date, NaiveDate::from_ymd_opt(2029, 12, 21).unwrap());
    }
}
