//! Constructors producing arrays shaped like a reference array

use ndarray::{ArrayD, NdFloat};

/// Creates a new array of ones with the same shape and element type as the
/// reference array.
#[must_use]
pub fn ones_like<A: NdFloat>(data: &ArrayD<A>) -> ArrayD<A> {
    ArrayD::ones(data.raw_dim())
}

/// Creates a new array of zeros with the same shape and element type as the
/// reference array.
#[must_use]
pub fn zeros_like<A: NdFloat>(data: &ArrayD<A>) -> ArrayD<A> {
    ArrayD::zeros(data.raw_dim())
}
