//! FPBENCH - Floating-Point compression Bench
//!
//! A small harness that runs external compressors against a fixed catalog
//! of scientific datasets and reports compressed size and wall-clock time.

use std::fmt;

// Public re-exports
pub mod bench;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum FpBenchError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// External compressor could not be started
    CompressorUnavailable(String),
    /// External compressor exited unsuccessfully
    CompressorFailed(String),
    /// Input or output file could not be statted after a trial
    FileSizeError(String),
    /// Dataset cannot be handled by the selected compressor
    UnsupportedDataset(String),
}

impl fmt::Display for FpBenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FpBenchError::IoError(err) => write!(f, "I/O error: {}", err),
            FpBenchError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FpBenchError::CompressorUnavailable(msg) => {
                write!(f, "Compressor unavailable: {}", msg)
            }
            FpBenchError::CompressorFailed(msg) => write!(f, "Compressor failed: {}", msg),
            FpBenchError::FileSizeError(msg) => write!(f, "File size error: {}", msg),
            FpBenchError::UnsupportedDataset(msg) => write!(f, "Unsupported dataset: {}", msg),
        }
    }
}

impl std::error::Error for FpBenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FpBenchError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FpBenchError {
    fn from(err: std::io::Error) -> Self {
        FpBenchError::IoError(err)
    }
}

impl From<serde_json::Error> for FpBenchError {
    fn from(err: serde_json::Error) -> Self {
        FpBenchError::ConfigError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for FpBenchError {
    fn from(err: toml::de::Error) -> Self {
        FpBenchError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for FPBENCH operations
pub type Result<T> = std::result::Result<T, FpBenchError>;

/// Error handling utilities
pub mod error {
    use super::FpBenchError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &FpBenchError) -> String {
        match error {
            FpBenchError::CompressorUnavailable(msg) => format!(
                "Could not start the compressor ({}). Check that it is installed and on PATH.",
                msg
            ),
            FpBenchError::CompressorFailed(msg) => format!(
                "The compressor reported an error ({}). Check that the dataset exists and the output path is writable.",
                msg
            ),
            FpBenchError::FileSizeError(msg) => {
                format!("Could not read file sizes after the trial ({}).", msg)
            }
            FpBenchError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "fpbench";
pub const CONFIG_FILE: &str = "fpbench.toml";
pub const DEFAULT_DATA_DIR: &str = "../data";
pub const DEFAULT_OUTPUT_PATH: &str = "/tmp/testout";
