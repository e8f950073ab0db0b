//! External compressor command lines
//!
//! Each compressor knows how to turn a dataset and an output path into an
//! argument vector for its executable. The runner owns timing and sizing.

use std::path::Path;

use crate::models::{DataType, Dataset};
use crate::{FpBenchError, Result};

/// A compressor executed as a separate process
pub trait ExternalCompressor {
    /// Identifier recorded in the trial result
    fn name(&self) -> &'static str;

    /// Executable to spawn
    fn program(&self) -> &str;

    /// Full argument list compressing `dataset` into `output`
    fn command_args(&self, dataset: &Dataset, output: &Path) -> Result<Vec<String>>;

    /// Arguments recorded in the trial result
    fn recorded_args(&self) -> Vec<String>;
}

/// `zstd -<level> -o <output> -f <input>`
#[derive(Debug, Clone)]
pub struct ZstdCommand {
    program: String,
    level: i32,
}

impl ZstdCommand {
    pub fn new(program: impl Into<String>, level: i32) -> Self {
        Self {
            program: program.into(),
            level,
        }
    }

    pub fn level(&self) -> i32 {
        self.level
    }
}

impl ExternalCompressor for ZstdCommand {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn command_args(&self, dataset: &Dataset, output: &Path) -> Result<Vec<String>> {
        Ok(vec![
            format!("-{}", self.level),
            "-o".to_string(),
            output.display().to_string(),
            "-f".to_string(),
            dataset.path.display().to_string(),
        ])
    }

    fn recorded_args(&self) -> Vec<String> {
        vec![self.level.to_string()]
    }
}

/// `fpzip -o <output> -i <input> [-t double] -<ndims> <extent>...`
///
/// Needs a known shape of one to three axes and a floating-point type.
#[derive(Debug, Clone)]
pub struct FpzipCommand {
    program: String,
}

impl FpzipCommand {
    pub const MAX_AXES: usize = 3;

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ExternalCompressor for FpzipCommand {
    fn name(&self) -> &'static str {
        "fpzip"
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn command_args(&self, dataset: &Dataset, output: &Path) -> Result<Vec<String>> {
        if dataset.shape.is_empty() || dataset.shape.len() > Self::MAX_AXES {
            return Err(FpBenchError::UnsupportedDataset(format!(
                "{}: fpzip needs 1 to {} axes, shape is {:?}",
                dataset.name,
                Self::MAX_AXES,
                dataset.shape
            )));
        }
        if !dataset.typ.is_float() {
            return Err(FpBenchError::UnsupportedDataset(format!(
                "{}: fpzip only handles floating-point data, got {:?}",
                dataset.name, dataset.typ
            )));
        }

        let mut args = vec![
            "-o".to_string(),
            output.display().to_string(),
            "-i".to_string(),
            dataset.path.display().to_string(),
        ];
        if dataset.typ == DataType::F64 {
            args.push("-t".to_string());
            args.push("double".to_string());
        }
        args.push(format!("-{}", dataset.shape.len()));
        args.extend(dataset.shape.iter().map(|extent| extent.to_string()));

        Ok(args)
    }

    fn recorded_args(&self) -> Vec<String> {
        Vec::new()
    }
}
