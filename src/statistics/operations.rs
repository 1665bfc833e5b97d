//! Core statistical operations and traits
//!
//! This module defines the fundamental types and traits for statistical
//! operations.

use crate::errors::{NdReduceError, Result};
use ndarray::{ArrayD, NdFloat};

/// Supported statistical operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOperation {
    /// Arithmetic mean
    Mean,
    /// Sum of values
    Sum,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
    /// Sample variance (Bessel-corrected)
    Variance,
    /// Sample standard deviation
    Std,
    /// Median (not yet implemented)
    Median,
}

impl StatOperation {
    /// Get the string representation of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Sum => "sum",
            Self::Min => "minimum",
            Self::Max => "maximum",
            Self::Variance => "variance",
            Self::Std => "standard deviation",
            Self::Median => "median",
        }
    }
}

/// Trait for types that can perform statistical reductions along an axis
///
/// Implemented for `ArrayD` by composition over the free functions in
/// [`super::axis`]; the array type itself is untouched.
pub trait StatisticalReduction<A> {
    /// Perform a statistical reduction along the specified axis
    ///
    /// The result has the same number of dimensions as the input, with the
    /// reduced axis's extent equal to 1.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The axis is out of bounds for the array
    /// - The operation is not implemented for this build
    fn reduce_along_axis(&self, axis: usize, operation: StatOperation) -> Result<ArrayD<A>>;
}

impl<A: NdFloat> StatisticalReduction<A> for ArrayD<A> {
    fn reduce_along_axis(&self, axis: usize, operation: StatOperation) -> Result<ArrayD<A>> {
        if axis >= self.ndim() {
            return Err(NdReduceError::InvalidAxis {
                axis,
                ndim: self.ndim(),
            });
        }

        match operation {
            StatOperation::Mean => super::axis::mean_axis(self, axis),
            StatOperation::Sum => super::axis::sum_axis(self, axis),
            StatOperation::Min => super::axis::min_axis(self, axis),
            StatOperation::Max => super::axis::max_axis(self, axis),
            StatOperation::Variance => super::axis::variance_axis(self, axis),
            StatOperation::Std => super::axis::std_axis(self, axis),
            StatOperation::Median => super::axis::median_axis(self, axis),
        }
    }
}
