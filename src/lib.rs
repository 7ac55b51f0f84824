//! `score-horizon` library crate.
//!
//! The binary (`horizon`) is a thin wrapper around this library so that:
//!
//! - the projection engine is testable without spawning processes
//! - modules are reusable (e.g., a web front-end calling `generate_projection`)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod projection;
pub mod report;
