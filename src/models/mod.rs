//! Fitted regression models.
//!
//! Models are plain values (parameters + a pure `predict`) so that fitting,
//! solving and projection code can stay generic.

pub mod model;

pub use model::*;
