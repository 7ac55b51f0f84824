//! Dataset ingest.
//!
//! Reads the dataset JSON (milestones, score snapshots, projection settings).
//! Loading never fails outright: a missing, unreadable or malformed file is
//! reported with a warning and the embedded fallback dataset is used instead,
//! so the projection engine always receives a well-formed dataset.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::data::fallback_dataset;
use crate::domain::Dataset;
use crate::error::AppError;

/// Where the dataset in a [`LoadedDataset`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    /// The embedded default, with the reason the file was not used.
    Fallback { reason: String },
}

/// Ingest output: the dataset plus its provenance.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub source: DatasetSource,
}

impl LoadedDataset {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, DatasetSource::Fallback { .. })
    }
}

/// Load the dataset from `path`, falling back to the embedded default.
pub fn load_dataset(path: Option<&Path>) -> LoadedDataset {
    let Some(path) = path else {
        return fallback("no dataset path given".to_string());
    };

    match read_dataset(path) {
        Ok(dataset) => {
            info!(
                path = %path.display(),
                milestones = dataset.historical_best_scores.len(),
                snapshots = dataset.scores.len(),
                "dataset loaded"
            );
            LoadedDataset {
                dataset,
                source: DatasetSource::File(path.to_path_buf()),
            }
        }
        Err(err) => fallback(err.to_string()),
    }
}

/// Read and validate a dataset file.
pub fn read_dataset(path: &Path) -> Result<Dataset, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open dataset '{}': {e}", path.display())))?;
    parse_dataset(BufReader::new(file))
}

/// Parse dataset JSON from any reader.
///
/// A dataset without score snapshots is rejected: nothing could anchor a
/// projection.
pub fn parse_dataset(reader: impl Read) -> Result<Dataset, AppError> {
    let dataset: Dataset =
        serde_json::from_reader(reader).map_err(|e| AppError::io(format!("Invalid dataset JSON: {e}")))?;
    if dataset.scores.is_empty() {
        return Err(AppError::io("Dataset has no `scores` snapshots."));
    }
    Ok(dataset)
}

fn fallback(reason: String) -> LoadedDataset {
    warn!(%reason, "using embedded fallback dataset");
    LoadedDataset {
        dataset: fallback_dataset(),
        source: DatasetSource::Fallback { reason },
    }
}
