//! ndreduce: dimension-wise reductions and statistics for ndarray
//!
//! A Rust library that augments [`ndarray`]'s dynamic-dimensional arrays
//! with a generic axis-reduction engine and the statistical operations
//! built on it: means, sums, minimums, maximums, variances and standard
//! deviations over any axis, plus element-wise map utilities and
//! shape-matching constructors.
//!
//! ## Key Features
//!
//! - **Generic Reductions**: Fold any binary combining function over the
//!   sub-arrays along an axis, with an explicit seed or first-sub-array
//!   seeding
//! - **Statistical Functions**: Mean, sum, min, max, sample variance and
//!   standard deviation over any axis, keeping the reduced axis at
//!   extent 1
//! - **Element-wise Utilities**: Map, in-place map and scalar extraction
//! - **Shape Matching**: `ones_like` / `zeros_like` constructors
//! - **Deterministic Results**: Reductions fold strictly left-to-right, so
//!   floating-point results are reproducible run to run
//!
//! ## Module Organization
//!
//! The library is organized into logical modules:
//!
//! - [`reduce`]: Axis iteration and the generic reduction engine
//! - [`statistics`]: Statistical reductions over axes
//! - [`elementwise`]: Element-wise maps and scalar extraction
//! - [`like`]: Shape-matching array constructors
//! - [`parallel`]: Thread pool configuration for element-wise operations
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Examples
//!
//! ### Statistical reductions
//! ```rust
//! use ndarray::ArrayD;
//! use ndreduce::prelude::*;
//!
//! let data = ArrayD::from_shape_vec(vec![2, 2], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
//!
//! // Mean over axis 0; the reduced axis keeps extent 1
//! let mean = ndreduce::statistics::mean_axis(&data, 0).unwrap();
//! assert_eq!(mean.shape(), &[1, 2]);
//! assert_eq!(mean[[0, 1]], 2.0);
//!
//! // The same computation through the trait surface
//! let mean2 = data.reduce_along_axis(0, StatOperation::Mean).unwrap();
//! assert_eq!(mean, mean2);
//! ```
//!
//! ### Custom reductions
//! ```rust
//! use ndarray::ArrayD;
//! use ndreduce::elementwise::to_scalar;
//! use ndreduce::reduce::reduce_along_dim;
//!
//! let data = ArrayD::from_shape_vec(vec![5], vec![5.0, 0.0, 1.0, 2.0, 3.0]).unwrap();
//!
//! // No seed: the first sub-array starts the fold
//! let total = reduce_along_dim(&data, 0, None, |acc, sub| acc + &sub).unwrap();
//! assert_eq!(to_scalar(&total).unwrap(), 11.0);
//! ```
//!
//! The reductions are strictly sequential; only the element-wise maps draw
//! on the Rayon thread pool (configurable via [`parallel::ParallelConfig`]).

// Core modules
pub mod elementwise;
pub mod errors;
pub mod like;
pub mod parallel;
pub mod reduce;
pub mod statistics;

// Direct re-exports for the public API
pub use elementwise::*;
pub use errors::*;
pub use like::*;
pub use parallel::*;
pub use reduce::*;
pub use statistics::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::elementwise::{map, map_in_place, to_scalar};
    pub use crate::errors::{NdReduceError, Result};
    pub use crate::like::{ones_like, zeros_like};
    pub use crate::parallel::ParallelConfig;
    pub use crate::reduce::{each_along_dim, reduce_along_dim};
    pub use crate::statistics::{StatOperation, StatisticalReduction};
}
