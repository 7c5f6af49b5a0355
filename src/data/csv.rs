//! Dense feature matrices from CSV files
//!
//! Every column is a feature and every row is a sample:
//! - Blank lines and lines starting with `#` are skipped
//! - A header row is detected automatically when most fields are non-numeric
//! - All rows must have the same number of fields

use crate::core::{MetricError, Result};
use log::debug;
use ndarray::{Array2, ArrayView2};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Feature matrix loaded from CSV, shape (n_samples, n_features)
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    data: Array2<f64>,
    header: Option<Vec<String>>,
}

impl FeatureMatrix {
    /// Load a feature matrix from a CSV file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading feature matrix from {:?}", path);
        let file = File::open(path).map_err(MetricError::IoError)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Load a feature matrix from a reader, detecting a header row
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, true)
    }

    /// Load a feature matrix from a reader with explicit header option
    pub fn from_reader_with_options<R: BufRead>(
        reader: R,
        auto_detect_header: bool,
    ) -> Result<Self> {
        let mut values = Vec::new();
        let mut n_features: Option<usize> = None;
        let mut n_samples = 0;
        let mut header: Option<Vec<String>> = None;
        let mut first_row = true;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(MetricError::IoError)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if first_row {
                first_row = false;
                if auto_detect_header && Self::is_header_line(line) {
                    header = Some(line.split(',').map(|f| f.trim().to_string()).collect());
                    continue;
                }
            }

            let row = Self::parse_data_line(line, line_no + 1)?;
            match n_features {
                None => n_features = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(MetricError::ParseError(format!(
                        "Line {} has {} fields, expected {}",
                        line_no + 1,
                        row.len(),
                        expected
                    )));
                }
                Some(_) => {}
            }
            values.extend(row);
            n_samples += 1;
        }

        let n_features = match n_features {
            Some(n) => n,
            None => return Err(MetricError::EmptyDataset),
        };

        if let Some(names) = &header {
            if names.len() != n_features {
                return Err(MetricError::ParseError(format!(
                    "Header has {} columns, data rows have {}",
                    names.len(),
                    n_features
                )));
            }
        }

        let data = Array2::from_shape_vec((n_samples, n_features), values)
            .map_err(|e| MetricError::ParseError(e.to_string()))?;
        debug!("Loaded {} samples with {} features", n_samples, n_features);

        Ok(FeatureMatrix { data, header })
    }

    /// Check if a line appears to be a header
    fn is_header_line(line: &str) -> bool {
        let fields: Vec<&str> = line.split(',').collect();

        let non_numeric_count = fields
            .iter()
            .filter(|field| field.trim().parse::<f64>().is_err())
            .count();

        non_numeric_count * 2 > fields.len()
    }

    /// Parse a CSV data line into feature values
    fn parse_data_line(line: &str, line_no: usize) -> Result<Vec<f64>> {
        line.split(',')
            .map(|f| f.trim())
            .enumerate()
            .map(|(col, field)| {
                field.parse::<f64>().map_err(|_| {
                    MetricError::ParseError(format!(
                        "Invalid feature value at line {}, column {}: {}",
                        line_no,
                        col + 1,
                        field
                    ))
                })
            })
            .collect()
    }

    /// Number of samples (rows)
    pub fn n_samples(&self) -> usize {
        self.data.nrows()
    }

    /// Number of features (columns)
    pub fn n_features(&self) -> usize {
        self.data.ncols()
    }

    /// Column names, if the file had a header row
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    /// Borrow the matrix
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Take ownership of the matrix
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }
}
