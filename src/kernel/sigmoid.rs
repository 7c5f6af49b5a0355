//! Sigmoid (Tanh) Kernel Implementation
//!
//! K(x, y) = tanh(γ * <x, y> + r)
//!
//! Output is bounded in (-1, 1). The kernel is not positive semi-definite for
//! every choice of γ and r, so it may not correspond to a valid inner product.

use crate::core::{resolve_gamma, resolve_pair, Result, DEFAULT_COEF};
use crate::kernel::PairwiseKernel;
use ndarray::{Array2, ArrayView2};

/// Sigmoid kernel matrix: K[i, j] = tanh(gamma * <x_i, y_j> + coef)
///
/// `gamma = None` uses 1 / n_features of `x`.
pub fn sigmoid_kernel(
    x: ArrayView2<'_, f64>,
    y: Option<ArrayView2<'_, f64>>,
    gamma: Option<f64>,
    coef: f64,
) -> Result<Array2<f64>> {
    let y = resolve_pair(x.view(), y.as_ref().map(|y| y.view()))?;
    let gamma = resolve_gamma(gamma, &x)?;

    let mut kernel = x.dot(&y.t());
    kernel.mapv_inplace(|dot| (gamma * dot + coef).tanh());
    Ok(kernel)
}

/// Sigmoid (Hyperbolic Tangent) kernel
#[derive(Debug, Clone)]
pub struct SigmoidKernel {
    /// Scaling parameter for the dot product (default: 1 / n_features)
    pub gamma: Option<f64>,
    /// Bias/offset parameter (default: 1.0)
    pub coef0: f64,
}

impl Default for SigmoidKernel {
    fn default() -> Self {
        Self {
            gamma: None,
            coef0: DEFAULT_COEF,
        }
    }
}

impl SigmoidKernel {
    /// Creates a new Sigmoid kernel with specified parameters
    ///
    /// # Examples
    /// ```
    /// use pairwise_kernels::kernel::SigmoidKernel;
    ///
    /// let kernel = SigmoidKernel::new(0.1, -1.0);
    /// assert_eq!(kernel.gamma, Some(0.1));
    /// assert_eq!(kernel.coef0, -1.0);
    /// ```
    pub fn new(gamma: f64, coef0: f64) -> Self {
        Self {
            gamma: Some(gamma),
            coef0,
        }
    }

    /// Gamma from the data, mimicking a neural network unit with bias -1
    pub fn neural_network() -> Self {
        Self {
            gamma: None,
            coef0: -1.0,
        }
    }

    /// Origin-centered kernel with coef0 = 0.0
    pub fn zero_bias(gamma: f64) -> Self {
        Self::new(gamma, 0.0)
    }
}

impl PairwiseKernel for SigmoidKernel {
    fn pairwise(
        &self,
        x: ArrayView2<'_, f64>,
        y: Option<ArrayView2<'_, f64>>,
    ) -> Result<Array2<f64>> {
        sigmoid_kernel(x, y, self.gamma, self.coef0)
    }

    fn name(&self) -> &'static str {
        "sigmoid"
    }
}
