//! Dataset catalog
//!
//! The fixed, ordered list of benchmark datasets. Paths are resolved
//! against a base data directory but never checked for existence here;
//! a missing file only surfaces when a trial runs.

use std::ops::Index;
use std::path::Path;

use crate::models::{DataType, Dataset};
use crate::{FpBenchError, Result, DEFAULT_DATA_DIR};

/// Ordered collection of known datasets
#[derive(Debug, Clone)]
pub struct Catalog {
    datasets: Vec<Dataset>,
}

impl Catalog {
    /// Build the catalog with every path rooted at `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let base = data_dir.as_ref().join("fabian");
        let entry = |name: &str, file: &str, typ: DataType, dim: u32, shape: &[usize]| {
            Dataset::new(name, base.join(file), typ, dim, shape.to_vec())
        };

        const RSIM: &[usize] = &[11509, 2048];
        const ASTRO_PT: &[usize] = &[640, 256, 512];
        const WAVE: &[usize] = &[512, 512, 512];

        let datasets = vec![
            entry("rsim.f32", "rsim.f32", DataType::F32, 1, RSIM),
            entry("rsim.f64", "rsim.f64", DataType::F64, 1, RSIM),
            entry("astro_mhd.f32", "astro_mhd.f32", DataType::F32, 1, &[]),
            entry("astro_mhd.f64", "astro_mhd.f64", DataType::F64, 1, &[]),
            entry("astro_pt.f32", "astro_pt.f32", DataType::F32, 3, ASTRO_PT),
            entry("astro_pt.f64", "astro_pt.f64", DataType::F64, 3, ASTRO_PT),
            entry("wave.f32", "wave.f32", DataType::F32, 2, WAVE),
            entry("wave.f64", "wave.f64", DataType::F64, 2, WAVE),
        ];

        Self { datasets }
    }

    /// Dataset at `index`, or a configuration error when out of range
    pub fn get(&self, index: usize) -> Result<&Dataset> {
        self.datasets.get(index).ok_or_else(|| {
            FpBenchError::ConfigError(format!(
                "Dataset index {} out of range (catalog has {} entries)",
                index,
                self.datasets.len()
            ))
        })
    }

    pub fn find(&self, name: &str) -> Option<&Dataset> {
        self.datasets.iter().find(|ds| ds.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dataset> {
        self.datasets.iter()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl Index<usize> for Catalog {
    type Output = Dataset;

    fn index(&self, index: usize) -> &Dataset {
        &self.datasets[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Dataset;
    type IntoIter = std::slice::Iter<'a, Dataset>;

    fn into_iter(self) -> Self::IntoIter {
        self.datasets.iter()
    }
}
