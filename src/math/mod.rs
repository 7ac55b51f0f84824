//! Mathematical utilities: closed-form least squares and small linear systems.

pub mod cramer;
pub mod ols;

pub use cramer::*;
pub use ols::*;
