//! Input/output helpers.
//!
//! - dataset JSON ingest with fallback (`ingest`)
//! - CSV export of a projection (`export`)
//! - projection JSON read/write (`projection`)

pub mod export;
pub mod ingest;
pub mod projection;

pub use export::*;
pub use ingest::*;
pub use projection::*;
