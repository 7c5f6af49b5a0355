//! Polynomial Kernel Implementation
//!
//! The polynomial kernel is defined as:
//! K(x, y) = (γ * <x, y> + r)^d
//!
//! Where:
//! - γ (gamma): scaling factor for the dot product
//! - r (coef0): independent term in the polynomial
//! - d (degree): degree of the polynomial
//!
//! The degree is a non-negative integer and the power is taken with integer
//! exponentiation, so a negative base keeps the sign (-x)^d has for that d.

use crate::core::{resolve_gamma, resolve_pair, MetricError, Result, DEFAULT_COEF, DEFAULT_DEGREE};
use crate::kernel::PairwiseKernel;
use ndarray::{Array2, ArrayView2};

/// Polynomial kernel matrix: K[i, j] = (gamma * <x_i, y_j> + coef)^degree
///
/// `gamma = None` uses 1 / n_features of `x`.
///
/// # Examples
/// ```
/// use ndarray::array;
/// use pairwise_kernels::polynomial_kernel;
///
/// let x = array![[1.0, 2.0]];
/// let y = array![[2.0, 1.0]];
/// // (1.0 * 4 + 1)^2 = 25
/// let k = polynomial_kernel(x.view(), Some(y.view()), 2, Some(1.0), 1.0).unwrap();
/// assert_eq!(k[[0, 0]], 25.0);
/// ```
pub fn polynomial_kernel(
    x: ArrayView2<'_, f64>,
    y: Option<ArrayView2<'_, f64>>,
    degree: u32,
    gamma: Option<f64>,
    coef: f64,
) -> Result<Array2<f64>> {
    let y = resolve_pair(x.view(), y.as_ref().map(|y| y.view()))?;
    let gamma = resolve_gamma(gamma, &x)?;
    let exponent = i32::try_from(degree).map_err(|_| {
        MetricError::InvalidParameter(format!("Polynomial degree too large: {}", degree))
    })?;

    let mut kernel = x.dot(&y.t());
    kernel.mapv_inplace(|dot| (gamma * dot + coef).powi(exponent));
    Ok(kernel)
}

/// Polynomial kernel with configurable degree, gamma, and coefficient
#[derive(Debug, Clone)]
pub struct PolynomialKernel {
    /// Degree of the polynomial (default: 3)
    pub degree: u32,
    /// Scaling factor for the dot product (default: 1 / n_features)
    pub gamma: Option<f64>,
    /// Independent term in the polynomial (default: 1.0)
    pub coef0: f64,
}

impl Default for PolynomialKernel {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            gamma: None,
            coef0: DEFAULT_COEF,
        }
    }
}

impl PolynomialKernel {
    /// Creates a new polynomial kernel with the specified parameters
    ///
    /// # Examples
    /// ```
    /// use pairwise_kernels::kernel::PolynomialKernel;
    ///
    /// // Cubic kernel: (0.5·x·y + 1)³
    /// let cubic_kernel = PolynomialKernel::new(3, 0.5, 1.0);
    /// assert_eq!(cubic_kernel.gamma, Some(0.5));
    /// ```
    pub fn new(degree: u32, gamma: f64, coef0: f64) -> Self {
        Self {
            degree,
            gamma: Some(gamma),
            coef0,
        }
    }

    /// Creates a quadratic kernel: (γ * <x,y> + 1)²
    pub fn quadratic(gamma: f64) -> Self {
        Self::new(2, gamma, 1.0)
    }

    /// Creates a cubic kernel: (γ * <x,y> + 1)³
    pub fn cubic(gamma: f64) -> Self {
        Self::new(3, gamma, 1.0)
    }

    /// Polynomial kernel of the given degree whose gamma comes from the data
    pub fn auto(degree: u32) -> Self {
        Self {
            degree,
            ..Self::default()
        }
    }
}

impl PairwiseKernel for PolynomialKernel {
    fn pairwise(
        &self,
        x: ArrayView2<'_, f64>,
        y: Option<ArrayView2<'_, f64>>,
    ) -> Result<Array2<f64>> {
        polynomial_kernel(x, y, self.degree, self.gamma, self.coef0)
    }

    fn name(&self) -> &'static str {
        "polynomial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_polynomial_kernel_creation() {
        let kernel = PolynomialKernel::new(3, 0.5, 1.0);
        assert_eq!(kernel.degree, 3);
        assert_eq!(kernel.gamma, Some(0.5));
        assert_eq!(kernel.coef0, 1.0);

        let quad = PolynomialKernel::quadratic(2.0);
        assert_eq!(quad.degree, 2);
        assert_eq!(quad.gamma, Some(2.0));

        let cubic = PolynomialKernel::cubic(0.5);
        assert_eq!(cubic.degree, 3);
        assert_eq!(cubic.coef0, 1.0);
    }

    #[test]
    fn test_polynomial_kernel_defaults() {
        let kernel = PolynomialKernel::default();
        assert_eq!(kernel.degree, 3);
        assert_eq!(kernel.gamma, None);
        assert_eq!(kernel.coef0, 1.0);

        let auto = PolynomialKernel::auto(5);
        assert_eq!(auto.degree, 5);
        assert_eq!(auto.gamma, None);
    }

    #[test]
    fn test_polynomial_kernel_same_vector() {
        let x = array![[3.0, 4.0]];

        // Dot product: 3² + 4² = 25
        // Kernel: (0.5 * 25 + 2.0)³ = 14.5³ = 3048.625
        let k = polynomial_kernel(x.view(), None, 3, Some(0.5), 2.0).unwrap();
        assert_relative_eq!(k[[0, 0]], 3048.625, epsilon = 1e-6);
    }

    #[test]
    fn test_polynomial_kernel_orthogonal_vectors() {
        let x = array![[1.0, 0.0]];
        let y = array![[0.0, 1.0]];

        // Dot product 0, kernel (0 + 1)² = 1
        let k = polynomial_kernel(x.view(), Some(y.view()), 2, Some(1.0), 1.0).unwrap();
        assert_relative_eq!(k[[0, 0]], 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_polynomial_kernel_negative_base() {
        let x = array![[1.0]];

        // Base: -1.0 * 1.0 + 0.5 = -0.5
        let odd = polynomial_kernel(x.view(), None, 3, Some(-1.0), 0.5).unwrap();
        assert_relative_eq!(odd[[0, 0]], -0.125, epsilon = 1e-12);

        let even = polynomial_kernel(x.view(), None, 2, Some(-1.0), 0.5).unwrap();
        assert_relative_eq!(even[[0, 0]], 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_polynomial_kernel_degree_zero() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let k = polynomial_kernel(x.view(), None, 0, None, 1.0).unwrap();
        assert!(k.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_polynomial_kernel_high_degree() {
        let x = array![[2.0]];
        let y = array![[3.0]];

        // (0.1 * 6.0 + 1.0)⁵ = 1.6⁵ ≈ 10.48576
        let k = polynomial_kernel(x.view(), Some(y.view()), 5, Some(0.1), 1.0).unwrap();
        assert_relative_eq!(k[[0, 0]], 10.48576, epsilon = 1e-5);
    }

    #[test]
    fn test_polynomial_kernel_degree_overflow() {
        let x = array![[1.0]];
        let result = polynomial_kernel(x.view(), None, u32::MAX, Some(1.0), 0.0);
        assert!(matches!(result, Err(MetricError::InvalidParameter(_))));
    }

    #[test]
    fn test_polynomial_kernel_object() {
        let x = array![[1.0, -1.0], [0.5, 2.0]];
        let kernel = PolynomialKernel::quadratic(0.25);
        assert_eq!(kernel.name(), "polynomial");
        assert_eq!(
            kernel.pairwise(x.view(), None).unwrap(),
            polynomial_kernel(x.view(), None, 2, Some(0.25), 1.0).unwrap()
        );
    }
}
