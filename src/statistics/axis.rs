//! Axis-wise statistical computation implementations
//!
//! This module contains the actual computation logic for the statistical
//! reductions, each expressed as a [`reduce_along_dim`] invocation with a
//! specific combining function and seed.

use crate::elementwise;
use crate::errors::{NdReduceError, Result};
use crate::reduce::reduce_along_dim;
use ndarray::{ArrayD, NdFloat};

/// Validates the axis and returns its extent cast to the element type.
fn axis_extent<A: NdFloat>(data: &ArrayD<A>, axis: usize) -> Result<A> {
    if axis >= data.ndim() {
        return Err(NdReduceError::InvalidAxis {
            axis,
            ndim: data.ndim(),
        });
    }
    let extent = data.shape()[axis];
    A::from(extent).ok_or_else(|| {
        NdReduceError::Generic(format!(
            "Axis extent {} is not representable in the element type",
            extent
        ))
    })
}

/// Computes the mean along the specified axis.
///
/// Accumulates pre-divided terms (`acc + sub / n`) rather than summing and
/// dividing at the end; the per-term rounding this introduces is part of
/// the observable results.
///
/// # Errors
///
/// Returns `NdReduceError::InvalidAxis` if the axis is out of bounds.
pub fn mean_axis<A: NdFloat>(data: &ArrayD<A>, axis: usize) -> Result<ArrayD<A>> {
    let n = axis_extent(data, axis)?;
    reduce_along_dim(data, axis, Some(A::zero()), |acc, sub| acc + &sub / n)
}

/// Computes the sum along the specified axis.
///
/// # Errors
///
/// Returns `NdReduceError::InvalidAxis` if the axis is out of bounds.
pub fn sum_axis<A: NdFloat>(data: &ArrayD<A>, axis: usize) -> Result<ArrayD<A>> {
    reduce_along_dim(data, axis, Some(A::zero()), |acc, sub| acc + &sub)
}

/// Computes the element-wise minimum along the specified axis.
///
/// Seeded with the largest finite value of the element type, so the result
/// is the true element-wise minimum of the sub-arrays.
///
/// # Errors
///
/// Returns `NdReduceError::InvalidAxis` if the axis is out of bounds.
pub fn min_axis<A: NdFloat>(data: &ArrayD<A>, axis: usize) -> Result<ArrayD<A>> {
    reduce_along_dim(data, axis, Some(A::max_value()), |mut acc, sub| {
        acc.zip_mut_with(&sub, |a, &s| {
            if s < *a {
                *a = s;
            }
        });
        acc
    })
}

/// Computes the element-wise maximum along the specified axis.
///
/// Seeded with the smallest finite value of the element type; symmetric to
/// [`min_axis`].
///
/// # Errors
///
/// Returns `NdReduceError::InvalidAxis` if the axis is out of bounds.
pub fn max_axis<A: NdFloat>(data: &ArrayD<A>, axis: usize) -> Result<ArrayD<A>> {
    reduce_along_dim(data, axis, Some(A::min_value()), |mut acc, sub| {
        acc.zip_mut_with(&sub, |a, &s| {
            if s > *a {
                *a = s;
            }
        });
        acc
    })
}

/// Computes the sample variance along the specified axis.
///
/// Uses Bessel's correction (divisor `n - 1`). An axis of extent 1 is not
/// guarded: the division by zero follows IEEE-754 semantics and yields a
/// non-finite result rather than an error.
///
/// # Errors
///
/// Returns `NdReduceError::InvalidAxis` if the axis is out of bounds.
pub fn variance_axis<A: NdFloat>(data: &ArrayD<A>, axis: usize) -> Result<ArrayD<A>> {
    let n = axis_extent(data, axis)?;
    let m = mean_axis(data, axis)?;
    reduce_along_dim(data, axis, Some(A::zero()), |acc, sub| {
        let dev = &m - &sub;
        acc + &dev * &dev / (n - A::one())
    })
}

/// Computes the sample standard deviation along the specified axis.
///
/// Defined as [`variance_axis`] mapped element-wise through the square
/// root, inheriting its degenerate behavior for axes of extent 1.
///
/// # Errors
///
/// Returns `NdReduceError::InvalidAxis` if the axis is out of bounds.
pub fn std_axis<A: NdFloat>(data: &ArrayD<A>, axis: usize) -> Result<ArrayD<A>> {
    let var = variance_axis(data, axis)?;
    Ok(elementwise::map(&var, |x| x.sqrt()))
}

/// Computes the median along the specified axis.
///
/// Not yet implemented; the axis is still validated so callers get the
/// same error ordering as the other operations.
///
/// # Errors
///
/// Returns `NdReduceError::InvalidAxis` if the axis is out of bounds, and
/// `NdReduceError::NotImplemented` otherwise.
pub fn median_axis<A: NdFloat>(data: &ArrayD<A>, axis: usize) -> Result<ArrayD<A>> {
    if axis >= data.ndim() {
        return Err(NdReduceError::InvalidAxis {
            axis,
            ndim: data.ndim(),
        });
    }
    Err(NdReduceError::NotImplemented {
        operation: "median",
    })
}
