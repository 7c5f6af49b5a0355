//! Pairwise Euclidean distance
//!
//! The distance matrix is computed through the expansion
//! ||a - b||² = ||a||² - 2 * a·b + ||b||²
//! so the only O(n_x * n_y * d) step is a single matrix product.

use crate::core::{resolve_pair, Result};
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Pairwise Euclidean distances between the rows of `x` and the rows of `y`
///
/// `y = None` pairs `x` with itself. The result has shape
/// `(x.nrows(), y.nrows())`, every entry is non-negative, and the
/// self-paired matrix is symmetric with a (numerically) zero diagonal.
///
/// # Errors
/// [`MetricError::DimensionMismatch`](crate::core::MetricError) if `x` and `y`
/// have different feature counts.
///
/// # Examples
/// ```
/// use ndarray::array;
/// use pairwise_kernels::euclidean_distance;
///
/// let x = array![[0.0, 0.0], [3.0, 4.0]];
/// let y = array![[0.0, 0.0]];
/// let d = euclidean_distance(x.view(), Some(y.view())).unwrap();
/// assert_eq!(d.dim(), (2, 1));
/// assert!((d[[1, 0]] - 5.0).abs() < 1e-12);
/// ```
pub fn euclidean_distance(
    x: ArrayView2<'_, f64>,
    y: Option<ArrayView2<'_, f64>>,
) -> Result<Array2<f64>> {
    let y = resolve_pair(x.view(), y.as_ref().map(|y| y.view()))?;

    let sum_x = squared_row_norms(&x);
    let sum_y = squared_row_norms(&y);

    let mut distance = x.dot(&y.t()) * -2.0;
    distance += &sum_x.insert_axis(Axis(1));
    distance += &sum_y.insert_axis(Axis(0));

    // Cancellation can leave tiny negatives where the distance is zero
    distance.mapv_inplace(|v| v.abs().sqrt());
    Ok(distance)
}

/// Σ_k x[i,k]² for every row i
pub(crate) fn squared_row_norms(x: &ArrayView2<'_, f64>) -> Array1<f64> {
    x.mapv(|v| v * v).sum_axis(Axis(1))
}
