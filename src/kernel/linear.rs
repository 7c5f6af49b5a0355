//! Linear kernel implementation

use crate::core::{resolve_pair, Result};
use crate::kernel::PairwiseKernel;
use ndarray::{Array2, ArrayView2};

/// Linear kernel matrix: K = x * y^T
///
/// Entry [i, j] is the dot product of row i of `x` and row j of `y`.
pub fn linear_kernel(
    x: ArrayView2<'_, f64>,
    y: Option<ArrayView2<'_, f64>>,
) -> Result<Array2<f64>> {
    let y = resolve_pair(x.view(), y.as_ref().map(|y| y.view()))?;
    Ok(x.dot(&y.t()))
}

/// Linear kernel: K(x, y) = x^T * y
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearKernel;

impl LinearKernel {
    /// Create a new linear kernel
    pub fn new() -> Self {
        Self
    }
}

impl PairwiseKernel for LinearKernel {
    fn pairwise(
        &self,
        x: ArrayView2<'_, f64>,
        y: Option<ArrayView2<'_, f64>>,
    ) -> Result<Array2<f64>> {
        linear_kernel(x, y)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
