//! Pairwise matrix serialization
//!
//! Computed matrices can be written as pretty JSON together with the metric
//! and parameters that produced them, or as plain CSV rows.

use crate::core::{KernelParams, MetricError, Result};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Serializable representation of a pairwise matrix
#[derive(Debug, Serialize, Deserialize)]
pub struct SerializableMatrix {
    /// Row-major values, one inner vector per sample of `x`
    pub values: Vec<Vec<f64>>,
    /// Parameters with gamma already resolved
    pub params: KernelParams,
    /// Matrix metadata
    pub metadata: MatrixMetadata,
}

/// Metadata describing how a matrix was produced
#[derive(Debug, Serialize, Deserialize)]
pub struct MatrixMetadata {
    /// Library version used to create the matrix
    pub library_version: String,
    /// Number of rows (samples in x)
    pub n_rows: usize,
    /// Number of columns (samples in y)
    pub n_cols: usize,
    /// Whether y was omitted and x was paired with itself
    pub self_paired: bool,
    /// Creation timestamp
    pub created_at: String,
}

impl SerializableMatrix {
    /// Wrap a computed matrix
    pub fn new(matrix: ArrayView2<'_, f64>, params: KernelParams, self_paired: bool) -> Self {
        let (n_rows, n_cols) = matrix.dim();
        let values = matrix.outer_iter().map(|row| row.to_vec()).collect();

        Self {
            values,
            params,
            metadata: MatrixMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                n_rows,
                n_cols,
                self_paired,
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Rebuild the dense matrix, checking rows against the recorded shape
    pub fn to_array(&self) -> Result<Array2<f64>> {
        let (n_rows, n_cols) = (self.metadata.n_rows, self.metadata.n_cols);
        if self.values.len() != n_rows {
            return Err(MetricError::DimensionMismatch {
                expected: n_rows,
                actual: self.values.len(),
            });
        }

        let mut flat = Vec::with_capacity(n_rows * n_cols);
        for row in &self.values {
            if row.len() != n_cols {
                return Err(MetricError::DimensionMismatch {
                    expected: n_cols,
                    actual: row.len(),
                });
            }
            flat.extend_from_slice(row);
        }

        Array2::from_shape_vec((n_rows, n_cols), flat)
            .map_err(|e| MetricError::SerializationError(e.to_string()))
    }

    /// Save matrix to a JSON file
    ///
    /// JSON has no representation for `inf` or `NaN`, so a matrix holding
    /// either is rejected before the file is created.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some((i, j, v)) = self.first_non_finite() {
            return Err(MetricError::SerializationError(format!(
                "value {v} at ({i}, {j}) cannot be stored as JSON"
            )));
        }

        let file = File::create(path).map_err(MetricError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| MetricError::SerializationError(e.to_string()))?;
        Ok(())
    }

    fn first_non_finite(&self) -> Option<(usize, usize, f64)> {
        self.values.iter().enumerate().find_map(|(i, row)| {
            row.iter()
                .position(|v| !v.is_finite())
                .map(|j| (i, j, row[j]))
        })
    }

    /// Load matrix from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(MetricError::IoError)?;
        let reader = BufReader::new(file);
        let matrix = serde_json::from_reader(reader)
            .map_err(|e| MetricError::SerializationError(e.to_string()))?;
        Ok(matrix)
    }

    /// Print matrix summary
    pub fn print_summary(&self) {
        println!("=== Pairwise Matrix Summary ===");
        println!("Metric: {}", self.params.kind.as_str());
        println!("Shape: {} x {}", self.metadata.n_rows, self.metadata.n_cols);
        println!("Self-paired: {}", self.metadata.self_paired);
        let kind = self.params.kind;
        if let Some(gamma) = self.params.gamma.filter(|_| kind.uses_gamma()) {
            println!("Gamma: {}", gamma);
        }
        if kind.uses_degree() {
            println!("Degree: {}", self.params.degree);
        }
        if kind.uses_coef() {
            println!("Coef: {}", self.params.coef);
        }
        println!("Library Version: {}", self.metadata.library_version);
        println!("Created: {}", self.metadata.created_at);
    }
}

/// Write a matrix as CSV, one row per line
pub fn write_csv<W: Write>(matrix: ArrayView2<'_, f64>, mut writer: W) -> Result<()> {
    for row in matrix.outer_iter() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(writer, "{}", line.join(",")).map_err(MetricError::IoError)?;
    }
    writer.flush().map_err(MetricError::IoError)?;
    Ok(())
}

/// Write a matrix as CSV to a file
pub fn save_csv<P: AsRef<Path>>(matrix: ArrayView2<'_, f64>, path: P) -> Result<()> {
    let file = File::create(path).map_err(MetricError::IoError)?;
    write_csv(matrix, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KernelType;
    use crate::kernel::rbf_kernel;
    use ndarray::array;
    use tempfile::NamedTempFile;

    #[test]
    fn test_matrix_serialization() -> Result<()> {
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let params = KernelParams::new(KernelType::Rbf).with_gamma(1.0);
        let kernel = rbf_kernel(x.view(), None, params.gamma)?;
        let serializable = SerializableMatrix::new(kernel.view(), params, true);

        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        serializable.save_to_file(temp_file.path())?;
        let loaded = SerializableMatrix::load_from_file(temp_file.path())?;

        assert_eq!(loaded.params.kind, KernelType::Rbf);
        assert_eq!(loaded.params.gamma, Some(1.0));
        assert_eq!(loaded.metadata.n_rows, 2);
        assert_eq!(loaded.metadata.n_cols, 2);
        assert!(loaded.metadata.self_paired);
        assert_eq!(loaded.to_array()?, kernel);
        Ok(())
    }

    #[test]
    fn test_to_array_shape_check() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let mut serializable =
            SerializableMatrix::new(x.view(), KernelParams::new(KernelType::Linear), false);
        serializable.values[1].pop();
        assert!(matches!(
            serializable.to_array(),
            Err(MetricError::DimensionMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_non_finite_matrix_is_not_saved() {
        let x = array![[1e200, 1e200]];
        let kernel = crate::kernel::polynomial_kernel(x.view(), None, 3, Some(1.0), 1.0).unwrap();
        assert!(kernel[[0, 0]].is_infinite());

        let serializable =
            SerializableMatrix::new(kernel.view(), KernelParams::new(KernelType::Polynomial), true);
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("overflow.json");

        assert!(matches!(
            serializable.save_to_file(&path),
            Err(MetricError::SerializationError(_))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_write_csv() {
        let m = array![[0.0, 5.0], [1.5, -2.0]];
        let mut out = Vec::new();
        write_csv(m.view(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0,5\n1.5,-2\n");
    }
}
