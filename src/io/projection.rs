//! Read/write projection JSON files.
//!
//! Projection JSON is the portable representation of one run:
//! - the shared date axis (ISO dates plus display labels)
//! - observed best scores (`null` at future dates)
//! - every model's projected values (`null` where no value exists) and crossing
//!
//! Model parameters are not stored: degenerate fits carry non-finite
//! parameters that JSON cannot represent. `null` entries survive a round trip
//! as `None`, never as 0.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ModelKind;
use crate::error::AppError;
use crate::projection::{Anchor, Crossing, Projection};

/// One model's series inside a [`ProjectionFile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedSeries {
    pub kind: ModelKind,
    /// Continuity offset; `null` when the raw anchor prediction was not finite.
    pub offset: Option<f64>,
    pub rmse: Option<f64>,
    pub values: Vec<Option<f64>>,
    pub crossing: Crossing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionFile {
    pub tool: String,
    pub reference_date: NaiveDate,
    pub anchor: Anchor,
    pub target_score: f64,
    pub dates: Vec<NaiveDate>,
    pub labels: Vec<String>,
    pub actual: Vec<Option<f64>>,
    pub models: Vec<ProjectedSeries>,
}

impl ProjectionFile {
    pub fn new(projection: &Projection, target_score: f64) -> Self {
        let models = projection
            .models
            .iter()
            .map(|m| ProjectedSeries {
                kind: m.kind,
                offset: finite(m.offset),
                rmse: finite(m.quality.rmse),
                values: m.values.clone(),
                crossing: m.crossing,
            })
            .collect();

        Self {
            tool: "horizon".to_string(),
            reference_date: projection.reference_date,
            anchor: projection.anchor.clone(),
            target_score,
            dates: projection.dates.clone(),
            labels: projection.labels.clone(),
            actual: projection.actual.clone(),
            models,
        }
    }

    pub fn model(&self, kind: ModelKind) -> Option<&ProjectedSeries> {
        self.models.iter().find(|m| m.kind == kind)
    }
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// Write a projection JSON file.
pub fn write_projection_json(path: &Path, projection: &Projection, target_score: f64) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create projection JSON '{}': {e}", path.display())))?;

    let doc = ProjectionFile::new(projection, target_score);
    serde_json::to_writer_pretty(BufWriter::new(file), &doc)
        .map_err(|e| AppError::io(format!("Failed to write projection JSON: {e}")))?;

    Ok(())
}

/// Read a projection JSON file.
pub fn read_projection_json(path: &Path) -> Result<ProjectionFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open projection JSON '{}': {e}", path.display())))?;
    let doc: ProjectionFile =
        serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid projection JSON: {e}")))?;

    let n = doc.dates.len();
    if doc.labels.len() != n || doc.actual.len() != n || doc.models.iter().any(|m| m.values.len() != n) {
        return Err(AppError::io(format!(
            "Projection JSON '{}' has arrays of mismatched length.",
            path.display()
        )));
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fallback_dataset;
    use crate::projection::{ProjectionOptions, generate_projection};

    #[test]
    fn round_trip_keeps_nulls_distinct_from_zero() {
        let projection = generate_projection(&fallback_dataset(), &ProjectionOptions::default()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projection.json");

        write_projection_json(&path, &projection, 100.0).unwrap();
        let doc = read_projection_json(&path).unwrap();

        assert_eq!(doc.dates, projection.dates);
        assert_eq!(doc.actual, projection.actual);
        // First milestone is a genuine zero, not a missing value.
        assert_eq!(doc.actual[0], Some(0.0));
        let moores = doc.model(ModelKind::MooresLaw).unwrap();
        assert_eq!(moores.values[0], None);
        assert_eq!(moores.values[projection.anchor.index], Some(18.6));
        assert_eq!(moores.crossing, projection.model(ModelKind::MooresLaw).crossing);
        assert_eq!(doc.models.len(), 9);
    }

    #[test]
    fn mismatched_arrays_are_rejected() {
        let projection = generate_projection(&fallback_dataset(), &ProjectionOptions::default()).unwrap();
        let mut doc = ProjectionFile::new(&projection, 100.0);
        doc.labels.pop();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

        assert!(read_projection_json(&path).is_err());
    }

    #[test]
    fn non_finite_offsets_become_null() {
        assert_eq!(finite(f64::NAN), None);
        assert_eq!(finite(f64::NEG_INFINITY), None);
        assert_eq!(finite(1.5), Some(1.5));
    }
}
