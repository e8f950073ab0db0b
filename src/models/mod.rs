//! Data models module
//!
//! Contains dataset descriptors and the per-trial result record.

pub mod dataset;
pub mod result;

// Re-export commonly used types
pub use dataset::{DataType, Dataset};
pub use result::TrialResult;
