//! Configuration management module
//!
//! Handles loading and validation of the benchmark configuration. Every
//! field defaults to the built-in value, so an absent config file means
//! the stock run: the first dataset at levels 3 and 20.

use crate::{FpBenchError, Result, APP_NAME, CONFIG_FILE, DEFAULT_DATA_DIR, DEFAULT_OUTPUT_PATH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Benchmark configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Base directory the dataset catalog is rooted at
    pub data_dir: PathBuf,
    /// Output file shared by every trial; overwritten each time
    pub output_path: PathBuf,
    /// zstd executable name or path
    pub zstd_program: String,
    /// fpzip executable name or path
    pub fpzip_program: String,
    /// Catalog position of the dataset to benchmark
    pub dataset_index: usize,
    /// zstd levels to run, in order
    pub levels: Vec<i32>,
    /// Also run one fpzip trial on the dataset
    pub include_fpzip: bool,
    /// Also run the in-process zstd encoder at each level
    pub include_stream: bool,
    /// Run fpzip over this many leading catalog entries, skipping unsupported ones
    pub fpzip_sweep: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            zstd_program: "zstd".to_string(),
            fpzip_program: "fpzip".to_string(),
            dataset_index: 0,
            levels: vec![3, 20],
            include_fpzip: false,
            include_stream: false,
            fpzip_sweep: 0,
        }
    }
}

impl BenchConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.zstd_program.trim().is_empty() {
            return Err(FpBenchError::ConfigError(
                "zstd program must not be empty".to_string(),
            ));
        }

        if self.fpzip_program.trim().is_empty() {
            return Err(FpBenchError::ConfigError(
                "fpzip program must not be empty".to_string(),
            ));
        }

        if self.levels.is_empty() {
            return Err(FpBenchError::ConfigError(
                "At least one compression level is required".to_string(),
            ));
        }

        if self.output_path.file_name().is_none() {
            return Err(FpBenchError::ConfigError(format!(
                "Output path does not name a file: {}",
                self.output_path.display()
            )));
        }

        Ok(())
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_zstd_program(mut self, program: impl Into<String>) -> Self {
        self.zstd_program = program.into();
        self
    }

    pub fn with_fpzip_program(mut self, program: impl Into<String>) -> Self {
        self.fpzip_program = program.into();
        self
    }

    pub fn with_levels(mut self, levels: Vec<i32>) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_dataset_index(mut self, index: usize) -> Self {
        self.dataset_index = index;
        self
    }

    pub fn with_fpzip_sweep(mut self, count: usize) -> Self {
        self.fpzip_sweep = count;
        self
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from an explicit TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            FpBenchError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            FpBenchError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/fpbench/fpbench.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            FpBenchError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_builtin_run() {
        let config = BenchConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("../data"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/testout"));
        assert_eq!(config.zstd_program, "zstd");
        assert_eq!(config.dataset_index, 0);
        assert_eq!(config.levels, vec![3, 20]);
        assert!(!config.include_fpzip);
        assert!(!config.include_stream);
        assert_eq!(config.fpzip_sweep, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(BenchConfig::new().with_levels(vec![]).validate().is_err());
        assert!(BenchConfig::new().with_zstd_program("  ").validate().is_err());
        assert!(BenchConfig::new().with_fpzip_program("").validate().is_err());
        assert!(BenchConfig::new().with_output_path("/").validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fpbench.toml");
        fs::write(&path, "levels = [1, 9]\ndata_dir = \"/srv/data\"\nfpzip_sweep = 4\n").unwrap();

        let config = BenchConfig::load_from(&path).expect("load");
        assert_eq!(config.levels, vec![1, 9]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.fpzip_sweep, 4);
        assert!(!config.include_stream);
        assert_eq!(config.zstd_program, "zstd");
        assert_eq!(config.output_path, PathBuf::from("/tmp/testout"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BenchConfig::new()
            .with_levels(vec![19])
            .with_dataset_index(4)
            .with_output_path("/var/tmp/out.zst");
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: BenchConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fpbench.toml");
        fs::write(&path, "levels = \"three\"").unwrap();
        assert!(matches!(
            BenchConfig::load_from(&path),
            Err(FpBenchError::ConfigError(_))
        ));

        fs::write(&path, "levels = []").unwrap();
        assert!(BenchConfig::load_from(&path).is_err());

        assert!(BenchConfig::load_from(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_config_file_path() {
        let path = BenchConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("fpbench"));
        assert!(path.to_string_lossy().ends_with("fpbench.toml"));
    }
}
