//! RBF (Radial Basis Function) kernel implementation
//!
//! The RBF kernel is defined as: K(x, y) = exp(-γ * ||x - y||²)
//! where γ (gamma) is a hyperparameter that controls the kernel width.

use crate::core::{resolve_gamma, Result};
use crate::distance::euclidean_distance;
use crate::kernel::PairwiseKernel;
use ndarray::{Array2, ArrayView2};

/// RBF kernel matrix: K[i, j] = exp(-gamma * ||x_i - y_j||²)
///
/// `gamma = None` uses 1 / n_features of `x`. Values lie in (0, 1] and the
/// self-paired diagonal is 1.
///
/// # Examples
/// ```
/// use ndarray::array;
/// use pairwise_kernels::rbf_kernel;
///
/// let x = array![[1.0, 0.0], [0.0, 1.0]];
/// let k = rbf_kernel(x.view(), None, Some(1.0)).unwrap();
/// assert!((k[[0, 0]] - 1.0).abs() < 1e-12);
/// assert!((k[[0, 1]] - (-2.0_f64).exp()).abs() < 1e-12);
/// ```
pub fn rbf_kernel(
    x: ArrayView2<'_, f64>,
    y: Option<ArrayView2<'_, f64>>,
    gamma: Option<f64>,
) -> Result<Array2<f64>> {
    let mut kernel = euclidean_distance(x, y)?;
    let gamma = resolve_gamma(gamma, &x)?;
    kernel.mapv_inplace(|d| (-gamma * d * d).exp());
    Ok(kernel)
}

/// RBF (Radial Basis Function) kernel: K(x, y) = exp(-γ * ||x - y||²)
///
/// The gamma parameter controls the "reach" of each training example:
/// - High gamma: close points have high influence (potential overfitting)
/// - Low gamma: distant points have influence (potential underfitting)
///
/// Leaving gamma unset picks 1.0 / n_features when the matrix is computed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RBFKernel {
    pub gamma: Option<f64>,
}

impl RBFKernel {
    /// Create an RBF kernel whose gamma is derived from the data
    pub fn new() -> Self {
        Self { gamma: None }
    }

    /// Create an RBF kernel with a fixed gamma
    pub fn with_gamma(gamma: f64) -> Self {
        Self { gamma: Some(gamma) }
    }

    /// Create RBF kernel with gamma = 1.0
    ///
    /// Useful for normalized/scaled data where feature variance is around 1.
    pub fn unit_gamma() -> Self {
        Self::with_gamma(1.0)
    }
}

impl PairwiseKernel for RBFKernel {
    fn pairwise(
        &self,
        x: ArrayView2<'_, f64>,
        y: Option<ArrayView2<'_, f64>>,
    ) -> Result<Array2<f64>> {
        rbf_kernel(x, y, self.gamma)
    }

    fn name(&self) -> &'static str {
        "rbf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_rbf_kernel_creation() {
        assert_eq!(RBFKernel::new().gamma, None);
        assert_eq!(RBFKernel::default().gamma, None);
        assert_eq!(RBFKernel::with_gamma(0.5).gamma, Some(0.5));
        assert_eq!(RBFKernel::unit_gamma().gamma, Some(1.0));
    }

    #[test]
    fn test_rbf_kernel_unit_vectors() {
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let k = rbf_kernel(x.view(), None, Some(1.0)).unwrap();

        assert_abs_diff_eq!(k[[0, 0]], 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(k[[1, 1]], 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(k[[0, 1]], (-2.0_f64).exp(), epsilon = 1e-8);
        assert_abs_diff_eq!(k[[1, 0]], (-2.0_f64).exp(), epsilon = 1e-8);
    }

    #[test]
    fn test_rbf_kernel_default_gamma() {
        // Two features -> gamma = 0.5; ||x - y||² = 2 -> exp(-1)
        let x = array![[1.0, 0.0], [0.0, 1.0]];
        let k = rbf_kernel(x.view(), None, None).unwrap();
        assert_abs_diff_eq!(k[[0, 1]], (-1.0_f64).exp(), epsilon = 1e-8);
    }

    #[test]
    fn test_rbf_kernel_different_gammas() {
        let x = array![[1.0]];
        let y = array![[3.0]];

        // ||x - y||² = (1 - 3)² = 4
        let low = rbf_kernel(x.view(), Some(y.view()), Some(0.1)).unwrap()[[0, 0]];
        let high = rbf_kernel(x.view(), Some(y.view()), Some(10.0)).unwrap()[[0, 0]];

        assert!(low > high);
        assert_abs_diff_eq!(low, (-0.1 * 4.0_f64).exp(), epsilon = 1e-10);
        assert_abs_diff_eq!(high, (-10.0 * 4.0_f64).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_rbf_kernel_decreases_with_distance() {
        let x = array![[0.0]];
        let y = array![[1.0], [2.0], [3.0]];
        let k = rbf_kernel(x.view(), Some(y.view()), Some(1.0)).unwrap();

        assert!(k[[0, 0]] > k[[0, 1]]);
        assert!(k[[0, 1]] > k[[0, 2]]);
        assert!(k.iter().all(|&v| v > 0.0 && v <= 1.0));
    }

    #[test]
    fn test_rbf_kernel_object() {
        let x = array![[1.0, 2.0], [2.0, 0.5]];
        let kernel = RBFKernel::with_gamma(0.3);
        assert_eq!(kernel.name(), "rbf");
        assert_eq!(
            kernel.pairwise(x.view(), None).unwrap(),
            rbf_kernel(x.view(), None, Some(0.3)).unwrap()
        );
    }
}
