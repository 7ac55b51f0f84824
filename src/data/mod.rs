//! Data preparation: the embedded fallback dataset and the series builder.

pub mod fallback;
pub mod series;

pub use fallback::fallback_dataset;
pub use series::{Series, build_series};
