//! Kernel parameters and the shared argument policy of the pairwise functions

use crate::core::{MetricError, Result};
use crate::distance::euclidean_distance;
use crate::kernel::{LinearKernel, PairwiseKernel, PolynomialKernel, RBFKernel, SigmoidKernel};
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Default polynomial degree
pub const DEFAULT_DEGREE: u32 = 3;

/// Default independent term for the polynomial and sigmoid kernels
pub const DEFAULT_COEF: f64 = 1.0;

/// Pairwise metric selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KernelType {
    /// Euclidean distance (not a kernel, but computed the same way)
    Euclidean,
    Linear,
    #[serde(alias = "gaussian")]
    Rbf,
    #[serde(alias = "poly")]
    Polynomial,
    #[serde(alias = "tanh")]
    Sigmoid,
}

impl KernelType {
    /// Lowercase name used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            KernelType::Euclidean => "euclidean",
            KernelType::Linear => "linear",
            KernelType::Rbf => "rbf",
            KernelType::Polynomial => "polynomial",
            KernelType::Sigmoid => "sigmoid",
        }
    }

    /// Whether `gamma` takes part in the formula
    pub fn uses_gamma(&self) -> bool {
        matches!(
            self,
            KernelType::Rbf | KernelType::Polynomial | KernelType::Sigmoid
        )
    }

    /// Whether `degree` takes part in the formula
    pub fn uses_degree(&self) -> bool {
        matches!(self, KernelType::Polynomial)
    }

    /// Whether `coef` takes part in the formula
    pub fn uses_coef(&self) -> bool {
        matches!(self, KernelType::Polynomial | KernelType::Sigmoid)
    }
}

/// Parameters for a pairwise computation
///
/// `gamma: None` means "resolve from the feature count of `x` at call time",
/// which is not the same thing as `Some(0.0)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelParams {
    /// Which metric to compute
    pub kind: KernelType,
    /// Kernel bandwidth; `None` defaults to 1 / n_features
    pub gamma: Option<f64>,
    /// Polynomial degree
    pub degree: u32,
    /// Independent term for polynomial and sigmoid kernels
    pub coef: f64,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            kind: KernelType::Rbf,
            gamma: None,
            degree: DEFAULT_DEGREE,
            coef: DEFAULT_COEF,
        }
    }
}

impl KernelParams {
    /// Parameters for the given metric with all other values at their defaults
    pub fn new(kind: KernelType) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set gamma explicitly
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Set polynomial degree
    pub fn with_degree(mut self, degree: u32) -> Self {
        self.degree = degree;
        self
    }

    /// Set the independent term
    pub fn with_coef(mut self, coef: f64) -> Self {
        self.coef = coef;
        self
    }

    /// Load parameters from a JSON file. Missing fields keep their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(MetricError::IoError)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| MetricError::SerializationError(e.to_string()))
    }

    /// Build the kernel object for these parameters
    ///
    /// Returns `None` for [`KernelType::Euclidean`], which is a distance.
    pub fn kernel(&self) -> Option<Box<dyn PairwiseKernel>> {
        match self.kind {
            KernelType::Euclidean => None,
            KernelType::Linear => Some(Box::new(LinearKernel::new())),
            KernelType::Rbf => Some(Box::new(RBFKernel {
                gamma: self.gamma,
            })),
            KernelType::Polynomial => Some(Box::new(PolynomialKernel {
                degree: self.degree,
                gamma: self.gamma,
                coef0: self.coef,
            })),
            KernelType::Sigmoid => Some(Box::new(SigmoidKernel {
                gamma: self.gamma,
                coef0: self.coef,
            })),
        }
    }

    /// Compute the pairwise matrix selected by `kind`
    pub fn compute(
        &self,
        x: ArrayView2<'_, f64>,
        y: Option<ArrayView2<'_, f64>>,
    ) -> Result<Array2<f64>> {
        match self.kernel() {
            Some(kernel) => kernel.pairwise(x, y),
            None => euclidean_distance(x, y),
        }
    }

    /// Copy of these parameters with `gamma` filled in from `x` when unset
    pub fn resolved(&self, x: ArrayView2<'_, f64>) -> Result<Self> {
        let mut params = self.clone();
        if self.kind.uses_gamma() {
            params.gamma = Some(resolve_gamma(self.gamma, &x)?);
        }
        Ok(params)
    }
}

/// Default gamma: 1 / n_features of `x`
pub fn default_gamma(x: &ArrayView2<'_, f64>) -> Result<f64> {
    let n_features = x.ncols();
    if n_features == 0 {
        return Err(MetricError::InvalidParameter(
            "gamma defaults to 1 / n_features, but x has no features".to_string(),
        ));
    }
    Ok(1.0 / n_features as f64)
}

/// Use `gamma` if given, otherwise derive it from `x` (never from `y`)
pub fn resolve_gamma(gamma: Option<f64>, x: &ArrayView2<'_, f64>) -> Result<f64> {
    match gamma {
        Some(gamma) => Ok(gamma),
        None => default_gamma(x),
    }
}

/// Resolve the second operand, defaulting to `x`, and check feature counts
pub fn resolve_pair<'a>(
    x: ArrayView2<'a, f64>,
    y: Option<ArrayView2<'a, f64>>,
) -> Result<ArrayView2<'a, f64>> {
    let y = y.unwrap_or(x);
    if y.ncols() != x.ncols() {
        return Err(MetricError::DimensionMismatch {
            expected: x.ncols(),
            actual: y.ncols(),
        });
    }
    Ok(y)
}
