//! Projection engine.
//!
//! - threshold crossing search (`threshold`)
//! - calendar stepping for future samples (`calendar`)
//! - the projection generator itself (`generator`)
//! - primary-model selection and countdown (`context`, `countdown`)

pub mod calendar;
pub mod context;
pub mod countdown;
pub mod generator;
pub mod threshold;

pub use context::*;
pub use countdown::*;
pub use generator::*;
pub use threshold::*;
