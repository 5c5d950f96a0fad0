//! Error types for tensor-bridge
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

use crate::array::DataType;
use crate::tensor::DType;

/// Main error type for tensor conversion operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Engine tensor element type has no conversion path
    #[error("Unsupported tensor type: {0}")]
    UnsupportedDType(DType),

    /// Array element type has no conversion path
    #[error("Unsupported array type: {0}")]
    UnsupportedDataType(DataType),

    /// Tensor element type does not match the builder path
    #[error("Tensor is not of {expected} type: {actual}")]
    DTypeMismatch {
        /// Type the builder path accepts
        expected: &'static str,
        /// Declared type of the tensor that was passed
        actual: DType,
    },

    /// Array element type does not match the builder path
    #[error("Array is not of {expected} type: {actual}")]
    DataTypeMismatch {
        /// Type family the builder path accepts
        expected: &'static str,
        /// Declared type of the array that was passed
        actual: DataType,
    },

    /// Product of shape extents overflows the addressable size
    #[error("Shape {0:?} has more elements than usize can represent")]
    SizeOverflow(Vec<i64>),

    /// Shape contains a negative extent
    #[error("Shape {0:?} contains a negative extent")]
    NegativeDim(Vec<i64>),

    /// Buffer length does not match shape and element width
    #[error("Buffer of {actual} bytes does not match shape {dims:?} ({expected} bytes expected)")]
    LengthMismatch {
        /// Dimensions the buffer was declared with
        dims: Vec<i64>,
        /// Byte length the shape and element width require
        expected: usize,
        /// Byte length actually supplied
        actual: usize,
    },

    /// Axes annotation does not match the array rank
    #[error("Axes \"{axes}\" do not match array rank {rank}")]
    AxesMismatch {
        /// Axes string supplied for the model tensor
        axes: String,
        /// Rank of the wrapped array
        rank: usize,
    },

    /// Shape error from the ndarray side
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
