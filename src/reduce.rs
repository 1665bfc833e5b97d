//! Generic dimension-wise reduction engine
//!
//! This module provides the two primitives everything else in the crate is
//! built on: [`each_along_dim`], which iterates the sub-arrays obtained by
//! fixing one coordinate along an axis, and [`reduce_along_dim`], a
//! sequential fold of a binary combining function over that sequence.

use crate::errors::{NdReduceError, Result};
use log::debug;
use ndarray::iter::AxisChunksIter;
use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn, NdFloat};

/// Iterates the sub-arrays at each coordinate along the specified axis.
///
/// Each sub-array has the same number of dimensions as the input, with the
/// iterated axis's extent equal to 1. Sub-arrays are produced in ascending
/// coordinate order; the iterator is lazy, finite and side-effect free, and
/// calling this function again reproduces the identical sequence.
///
/// # Panics
///
/// Panics if `axis` is not a valid axis index for the array. Callers that
/// cannot guarantee this should go through [`reduce_along_dim`], which
/// validates the axis first.
pub fn each_along_dim<A>(data: &ArrayD<A>, axis: usize) -> AxisChunksIter<'_, A, IxDyn> {
    data.axis_chunks_iter(Axis(axis), 1)
}

/// Reduces an array with the supplied combining function over a specified
/// axis.
///
/// The result has the same number of dimensions as the input, but with the
/// reduced axis's extent equal to 1. Each element is the result of folding
/// `combine` over the sub-arrays at that position along the axis, strictly
/// left-to-right in ascending coordinate order; floating-point summation
/// order is part of the observable contract, so the fold is never
/// reordered or parallelized.
///
/// When `initial` is `Some`, the accumulator starts as a new array of the
/// result shape filled uniformly with the initial value and every sub-array
/// is combined into it. When `initial` is `None`, the first sub-array is
/// consumed as the initial accumulator and only the remaining sub-arrays
/// are combined.
///
/// # Errors
///
/// Returns `NdReduceError::InvalidAxis` if `axis >= data.ndim()`, and
/// `NdReduceError::EmptyAxis` if `initial` is `None` and the axis has
/// extent 0 (there is no first sub-array to seed with).
pub fn reduce_along_dim<A, F>(
    data: &ArrayD<A>,
    axis: usize,
    initial: Option<A>,
    mut combine: F,
) -> Result<ArrayD<A>>
where
    A: NdFloat,
    F: FnMut(ArrayD<A>, ArrayViewD<'_, A>) -> ArrayD<A>,
{
    if axis >= data.ndim() {
        return Err(NdReduceError::InvalidAxis {
            axis,
            ndim: data.ndim(),
        });
    }

    debug!(
        "reducing axis {} (extent {}) of array with shape {:?}",
        axis,
        data.shape()[axis],
        data.shape()
    );

    let mut sub_arrays = each_along_dim(data, axis);

    let mut acc = match initial {
        Some(seed) => {
            let mut new_shape = data.shape().to_vec();
            new_shape[axis] = 1;
            ArrayD::from_elem(new_shape, seed)
        }
        None => match sub_arrays.next() {
            Some(first) => first.to_owned(),
            None => return Err(NdReduceError::EmptyAxis { axis }),
        },
    };

    for sub_array in sub_arrays {
        acc = combine(acc, sub_array);
    }

    Ok(acc)
}
