//! Descriptive statistics over the loaded records.

pub(crate) mod order;
mod summary;

pub use summary::{AreaExtremes, DEFAULT_TOP_COUNTIES, Summary, TopCounties};
