//! Benchmark engine module
//!
//! Contains the subprocess plumbing, the external compressor command
//! lines, and the trial runner that ties them together with the
//! in-process zstd trial.

pub mod command;
pub mod compressor;
pub mod runner;

// Re-export commonly used types
pub use compressor::{ExternalCompressor, FpzipCommand, ZstdCommand};
pub use runner::{file_size, run_trial, TrialRunner, STREAM_CHUNK_SIZE};
