//! Platform-independent run logic: the record model, month filtering,
//! aggregate statistics, sorting, and display formatting.

pub mod activity;
pub mod dataset;
pub mod filter;
pub mod format;
pub mod sort;
pub mod stats;
