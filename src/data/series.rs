//! Series builder: merge milestone and snapshot observations into one
//! chronological, per-date series anchored at the earliest date (day 0).

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{Milestone, SeriesPoint, Snapshot};
use crate::error::AppError;

/// A merged score history.
///
/// `dates[i]` is the calendar date of `points[i]`; both are sorted ascending
/// and `points[i].x` is the whole-day distance from `reference_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub reference_date: NaiveDate,
    pub dates: Vec<NaiveDate>,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Day offset of `date` relative to this series' reference date.
    pub fn day_of(&self, date: NaiveDate) -> f64 {
        (date - self.reference_date).num_days() as f64
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the point observed on `date`, if any.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }
}

/// Merge observations into a [`Series`].
///
/// Observations sharing a date collapse to the maximum score for that date,
/// whichever source they come from.
pub fn build_series(milestones: &[Milestone], snapshots: &[Snapshot]) -> Result<Series, AppError> {
    let mut by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    let observations = milestones
        .iter()
        .map(|m| (m.date, m.score))
        .chain(snapshots.iter().map(|s| (s.date, s.best_score)));

    for (date, score) in observations {
        by_date
            .entry(date)
            .and_modify(|best| {
                if score > *best {
                    *best = score;
                }
            })
            .or_insert(score);
    }

    let Some((&reference_date, _)) = by_date.first_key_value() else {
        return Err(AppError::insufficient_data(
            "No observations to project from: the dataset has no milestones or score snapshots.",
        ));
    };

    let mut dates = Vec::with_capacity(by_date.len());
    let mut points = Vec::with_capacity(by_date.len());
    for (date, score) in by_date {
        dates.push(date);
        points.push(SeriesPoint::new((date - reference_date).num_days() as f64, score));
    }

    Ok(Series {
        reference_date,
        dates,
        points,
    })
}
