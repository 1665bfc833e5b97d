//! Element-wise map operations and scalar extraction
//!
//! The maps apply a function to every stored element. Application order is
//! unspecified and results are element-local, so these are the one place in
//! the crate where work runs on the rayon pool (see [`crate::parallel`] for
//! pool configuration).

use crate::errors::{NdReduceError, Result};
use ndarray::{ArrayD, Dimension, IxDyn, NdFloat};

/// Applies `f` to every element, returning a new array of the same shape.
///
/// The input is left unchanged; the map runs on a duplicate.
#[must_use]
pub fn map<A, F>(data: &ArrayD<A>, f: F) -> ArrayD<A>
where
    A: NdFloat,
    F: Fn(A) -> A + Send + Sync,
{
    let mut mapped = data.to_owned();
    map_in_place(&mut mapped, f);
    mapped
}

/// Applies `f` to every element of the array in place.
///
/// Mutates its argument. If `f` panics mid-iteration, elements already
/// written stay written; there is no rollback.
pub fn map_in_place<A, F>(data: &mut ArrayD<A>, f: F)
where
    A: NdFloat,
    F: Fn(A) -> A + Send + Sync,
{
    data.par_mapv_inplace(f);
}

/// Extracts the sole element of a single-element array.
///
/// Valid for any number of dimensions as long as every axis extent equals 1
/// (a rank-0 array qualifies).
///
/// # Errors
///
/// Returns `NdReduceError::NonScalarShape` if any axis extent differs
/// from 1.
pub fn to_scalar<A: NdFloat>(data: &ArrayD<A>) -> Result<A> {
    if !data.shape().iter().all(|&extent| extent == 1) {
        return Err(NdReduceError::NonScalarShape {
            shape: data.shape().to_vec(),
        });
    }
    Ok(data[IxDyn::zeros(data.ndim())])
}
