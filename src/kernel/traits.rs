//! Kernel trait definition

use crate::core::Result;
use ndarray::{Array2, ArrayView2};

/// Pairwise kernel matrix trait
///
/// Implementations compute K[i, j] = k(x_i, y_j) for every row of `x` and
/// every row of `y`. Passing `y = None` pairs `x` with itself.
pub trait PairwiseKernel: Send + Sync {
    /// Compute the kernel matrix of shape `(x.nrows(), y.nrows())`
    fn pairwise(
        &self,
        x: ArrayView2<'_, f64>,
        y: Option<ArrayView2<'_, f64>>,
    ) -> Result<Array2<f64>>;

    /// Short lowercase kernel name
    fn name(&self) -> &'static str;
}
