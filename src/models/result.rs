//! Trial result data model
//!
//! One record per compressor invocation: which tool ran with which
//! arguments, on which dataset, and the sizes and time it produced.

use crate::models::dataset::Dataset;
use crate::util::units::{calculate_throughput_mbps, compression_ratio, format_bytes, format_seconds};
use crate::Result;
use serde::{Deserialize, Serialize};

/// Outcome of a single compression trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialResult {
    /// Compressor identifier, e.g. `zstd`
    pub compressor: String,
    /// Arguments that distinguish this trial (the level for zstd)
    pub args: Vec<String>,
    /// Dataset that was compressed
    pub ds: Dataset,
    /// Byte length of the input file
    pub raw_size: u64,
    /// Byte length of the compressed output file
    pub compressed_size: u64,
    /// Wall-clock seconds spent in the compressor
    pub duration: f64,
}

impl TrialResult {
    pub fn new(
        compressor: impl Into<String>,
        args: Vec<String>,
        ds: Dataset,
        raw_size: u64,
        compressed_size: u64,
        duration: f64,
    ) -> Self {
        Self {
            compressor: compressor.into(),
            args,
            ds,
            raw_size,
            compressed_size,
            duration,
        }
    }

    /// Raw size divided by compressed size
    pub fn ratio(&self) -> f64 {
        compression_ratio(self.raw_size, self.compressed_size)
    }

    /// Input bytes consumed per second, in MiB/s
    pub fn throughput_mbps(&self) -> f64 {
        calculate_throughput_mbps(self.raw_size, self.duration)
    }

    /// Get a human-readable summary of the trial
    pub fn summary(&self) -> String {
        format!(
            "{} [{}] {} - {} -> {} ({:.3}x) in {}",
            self.compressor,
            self.args.join(" "),
            self.ds.name,
            format_bytes(self.raw_size),
            format_bytes(self.compressed_size),
            self.ratio(),
            format_seconds(self.duration)
        )
    }

    /// Render as a single-line JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a record previously rendered by [`TrialResult::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
