//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the dataset schema (`Dataset`, `Milestone`, `Snapshot`, `ProjectionSettings`)
//! - the nine model kinds (`ModelKind`)
//! - fitting observations and diagnostics (`SeriesPoint`, `FitQuality`)
//! - the run configuration (`ProjectionConfig`)

pub mod types;

pub use types::*;
