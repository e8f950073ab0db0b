//! Dataset descriptors
//!
//! Describes the benchmark input files: where they live and what kind of
//! array they hold.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Binary element type of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// 32-bit IEEE float
    F32,
    /// 64-bit IEEE float
    F64,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit unsigned integer
    U64,
}

impl DataType {
    /// Size of one element in bytes
    pub fn element_size(&self) -> usize {
        match self {
            DataType::F32 | DataType::U32 => 4,
            DataType::F64 | DataType::U64 => 8,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DataType::F32 | DataType::F64)
    }
}

/// A single benchmark input file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Short label, e.g. `rsim.f32`
    pub name: String,
    /// Location of the raw array file
    pub path: PathBuf,
    /// Element type stored in the file
    pub typ: DataType,
    /// Dimensionality of the array
    pub dim: u32,
    /// Per-axis extents, empty when unknown
    pub shape: Vec<usize>,
}

impl Dataset {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        typ: DataType,
        dim: u32,
        shape: Vec<usize>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            typ,
            dim,
            shape,
        }
    }
}
