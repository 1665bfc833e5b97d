//! Statistical reduction operations
//!
//! This module provides functions for computing statistical reductions
//! (mean, sum, min, max, variance, standard deviation) over specified axes
//! of dynamic-dimensional arrays.
//!
//! # Organization
//!
//! This module is organized into submodules:
//! - [`operations`]: Core statistical operations and traits
//! - [`axis`]: Axis-wise computation implementations

pub mod axis;
pub mod operations;

// Re-export the main types and functions for convenience
pub use axis::{
    max_axis, mean_axis, median_axis, min_axis, std_axis, sum_axis, variance_axis,
};
pub use operations::{StatOperation, StatisticalReduction};
