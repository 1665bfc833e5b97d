//! Centralized error handling for ndreduce
//!
//! This module provides structured error types for the reduction and
//! statistics layer, enabling better error context and type safety than a
//! generic `Box<dyn Error>`.

use std::fmt;

/// Main error type for ndreduce operations
#[derive(Debug)]
pub enum NdReduceError {
    /// Requested axis is out of bounds for the array's rank
    InvalidAxis { axis: usize, ndim: usize },

    /// Scalar extraction attempted on an array with more than one element
    NonScalarShape { shape: Vec<usize> },

    /// Operation is declared but intentionally unsupported
    NotImplemented { operation: &'static str },

    /// Seedless reduction requested over an axis of extent zero
    EmptyAxis { axis: usize },

    /// Thread pool configuration error
    ThreadPoolError(String),

    /// Array shape or dimension error
    ArrayError(ndarray::ShapeError),

    /// Generic error for backward compatibility
    Generic(String),
}

impl fmt::Display for NdReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NdReduceError::InvalidAxis { axis, ndim } => {
                write!(
                    f,
                    "Axis {} is out of bounds for array with {} dimensions",
                    axis, ndim
                )
            }
            NdReduceError::NonScalarShape { shape } => {
                write!(
                    f,
                    "Scalar extraction is only valid for single-element arrays, got shape {:?}",
                    shape
                )
            }
            NdReduceError::NotImplemented { operation } => {
                write!(f, "Operation '{}' is not implemented", operation)
            }
            NdReduceError::EmptyAxis { axis } => {
                write!(
                    f,
                    "Cannot reduce along axis {} of extent 0 without an initial value",
                    axis
                )
            }
            NdReduceError::ThreadPoolError(msg) => write!(f, "Thread pool error: {}", msg),
            NdReduceError::ArrayError(e) => write!(f, "Array error: {}", e),
            NdReduceError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for NdReduceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NdReduceError::ArrayError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ndarray::ShapeError> for NdReduceError {
    fn from(error: ndarray::ShapeError) -> Self {
        NdReduceError::ArrayError(error)
    }
}

impl From<String> for NdReduceError {
    fn from(error: String) -> Self {
        NdReduceError::Generic(error)
    }
}

impl From<&str> for NdReduceError {
    fn from(error: &str) -> Self {
        NdReduceError::Generic(error.to_string())
    }
}

/// Result type alias for ndreduce operations
pub type Result<T> = std::result::Result<T, NdReduceError>;
