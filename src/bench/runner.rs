//! Trial execution
//!
//! Runs one compressor invocation, times it, and reads the input and
//! output sizes back once it has finished. External tools are sized from
//! the shared output file; the in-process zstd trial from its buffer.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use tracing::{info, warn};

use crate::bench::command::check_call;
use crate::bench::compressor::{ExternalCompressor, FpzipCommand, ZstdCommand};
use crate::catalog::Catalog;
use crate::config::BenchConfig;
use crate::models::{Dataset, TrialResult};
use crate::util::units::{format_bytes, format_seconds};
use crate::{FpBenchError, Result};

/// Executes trials against the configured output path.
///
/// Every trial overwrites the same output file, so trials from one runner
/// must not run concurrently.
#[derive(Debug, Clone, Default)]
pub struct TrialRunner {
    config: BenchConfig,
}

impl TrialRunner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    /// Compress `dataset` with zstd at `level`
    pub fn run_trial(&self, dataset: &Dataset, level: i32) -> Result<TrialResult> {
        let zstd = ZstdCommand::new(self.config.zstd_program.as_str(), level);
        self.run(&zstd, dataset)
    }

    /// Compress `dataset` with fpzip
    pub fn run_fpzip(&self, dataset: &Dataset) -> Result<TrialResult> {
        let fpzip = FpzipCommand::new(self.config.fpzip_program.as_str());
        self.run(&fpzip, dataset)
    }

    /// Compress `dataset` with the zstd library inside this process.
    ///
    /// The file is streamed in [`STREAM_CHUNK_SIZE`] reads into an in-memory
    /// encoder; the shared output file is not touched.
    pub fn run_zstd_stream(&self, dataset: &Dataset, level: i32) -> Result<TrialResult> {
        let start = Instant::now();
        let mut input = File::open(&dataset.path).map_err(|e| {
            FpBenchError::FileSizeError(format!("Failed to open {}: {}", dataset.path.display(), e))
        })?;
        let mut encoder = zstd::stream::Encoder::new(Vec::new(), level)?;
        let mut chunk = vec![0u8; STREAM_CHUNK_SIZE];
        loop {
            let n = input.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            encoder.write_all(&chunk[..n])?;
        }
        let compressed = encoder.finish()?;
        let duration = start.elapsed().as_secs_f64();

        let raw_size = file_size(&dataset.path)?;
        let compressed_size = compressed.len() as u64;

        info!(
            "zstd (in-process) on {}: {} -> {} in {}",
            dataset.name,
            format_bytes(raw_size),
            format_bytes(compressed_size),
            format_seconds(duration)
        );

        Ok(TrialResult::new(
            "zstd",
            vec![level.to_string()],
            dataset.clone(),
            raw_size,
            compressed_size,
            duration,
        ))
    }

    /// Run fpzip over the first `count` catalog entries.
    ///
    /// Datasets fpzip cannot handle are logged and skipped; any other
    /// failure stops the sweep.
    pub fn fpzip_sweep(&self, catalog: &Catalog, count: usize) -> Result<Vec<TrialResult>> {
        let mut results = Vec::new();
        for dataset in catalog.iter().take(count) {
            info!("start: {}", dataset.name);
            match self.run_fpzip(dataset) {
                Ok(result) => results.push(result),
                Err(FpBenchError::UnsupportedDataset(msg)) => warn!("skipping fpzip: {}", msg),
                Err(e) => return Err(e),
            }
        }
        Ok(results)
    }

    /// Run any external compressor once and collect its result
    pub fn run(&self, compressor: &dyn ExternalCompressor, dataset: &Dataset) -> Result<TrialResult> {
        let output = self.output_path();
        let args = compressor.command_args(dataset, output)?;

        let start = Instant::now();
        check_call(compressor.program(), &args)?;
        let duration = start.elapsed().as_secs_f64();

        let raw_size = file_size(&dataset.path)?;
        let compressed_size = file_size(output)?;

        info!(
            "{} on {}: {} -> {} in {}",
            compressor.name(),
            dataset.name,
            format_bytes(raw_size),
            format_bytes(compressed_size),
            format_seconds(duration)
        );

        Ok(TrialResult::new(
            compressor.name(),
            compressor.recorded_args(),
            dataset.clone(),
            raw_size,
            compressed_size,
            duration,
        ))
    }
}

/// Read size used by the in-process zstd trial
pub const STREAM_CHUNK_SIZE: usize = 4 << 20;

/// Run a zstd trial with the default configuration
pub fn run_trial(dataset: &Dataset, level: i32) -> Result<TrialResult> {
    TrialRunner::default().run_trial(dataset, level)
}

/// Byte length of the file at `path`
pub fn file_size(path: &Path) -> Result<u64> {
    fs::metadata(path).map(|m| m.len()).map_err(|e| {
        FpBenchError::FileSizeError(format!("Failed to stat {}: {}", path.display(), e))
    })
}
