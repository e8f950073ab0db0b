//! Utility functions module
//!
//! Contains helper functions for units formatting and derived metrics.

pub mod units;

// Re-export commonly used functions
pub use units::{calculate_throughput_mbps, compression_ratio, format_bytes, format_seconds};
