//! Curve fitting.
//!
//! Responsibilities:
//!
//! - the nine regression families (`regression`)
//! - fitting all of them over one series, in parallel (`fitter`)

pub mod fitter;
pub mod regression;

pub use fitter::*;
pub use regression::*;
