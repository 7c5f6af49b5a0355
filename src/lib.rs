//! Pairwise distance and kernel matrices
//!
//! Computes Euclidean distance and the linear, RBF, polynomial and sigmoid
//! kernel matrices between the rows of two dense feature matrices, or between
//! a matrix and itself when the second operand is omitted.
//!
//! ```
//! use ndarray::array;
//! use pairwise_kernels::{euclidean_distance, linear_kernel};
//!
//! let x = array![[0.0, 0.0], [3.0, 4.0]];
//! let d = euclidean_distance(x.view(), None).unwrap();
//! assert!((d[[0, 1]] - 5.0).abs() < 1e-12);
//!
//! let k = linear_kernel(x.view(), None).unwrap();
//! assert_eq!(k[[1, 1]], 25.0);
//! ```

pub mod core;
pub mod data;
pub mod distance;
pub mod kernel;
pub mod persistence;

// Re-export main types for convenience
pub use crate::core::error::*;
pub use crate::core::types::*;
pub use crate::data::FeatureMatrix;
pub use crate::distance::euclidean_distance;
pub use crate::kernel::{
    linear_kernel, polynomial_kernel, rbf_kernel, sigmoid_kernel, LinearKernel, PairwiseKernel,
    PolynomialKernel, RBFKernel, SigmoidKernel,
};
pub use crate::persistence::SerializableMatrix;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
