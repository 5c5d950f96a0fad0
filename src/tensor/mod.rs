//! Engine tensor type
//!
//! This module provides the inference-engine side of the bridge:
//! - Element type tags (`dtype`)
//! - Shape utilities (`shape`)
//! - The raw-buffer `Tensor` type itself
//!
//! A `Tensor` is an element-type tag, an ordered shape, and a flat
//! contiguous little-endian byte buffer, matching the engine's raw tensor
//! layout. It performs no computation; it only carries data.

pub mod dtype;
pub mod shape;

// Re-export commonly used items
pub use dtype::DType;
pub use shape::{checked_numel, dims_to_usize};

use smallvec::SmallVec;

use crate::error::{ConvertError, ConvertResult};

/// Shape storage, inline up to rank 4
pub type Dims = SmallVec<[i64; 4]>;

/// A typed, shape-tagged tensor backed by a flat little-endian byte buffer
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    dtype: DType,
    dims: Dims,
    data: Vec<u8>,
}

impl Tensor {
    /// Create a tensor from a raw little-endian byte buffer
    ///
    /// The buffer length must equal the product of the extents times the
    /// element width of `dtype`.
    pub fn from_raw(dtype: DType, dims: &[i64], data: Vec<u8>) -> ConvertResult<Self> {
        let numel = checked_numel(dims)?;
        let expected = numel
            .checked_mul(dtype.size_of())
            .ok_or_else(|| ConvertError::SizeOverflow(dims.to_vec()))?;
        if data.len() != expected {
            return Err(ConvertError::LengthMismatch {
                dims: dims.to_vec(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            dtype,
            dims: Dims::from_slice(dims),
            data,
        })
    }

    /// Create a `Uint8` tensor from a typed slice
    pub fn from_u8(dims: &[i64], values: &[u8]) -> ConvertResult<Self> {
        check_count(dims, values.len(), 1)?;
        Self::from_raw(DType::Uint8, dims, values.to_vec())
    }

    /// Create an `Int32` tensor from a typed slice
    pub fn from_i32(dims: &[i64], values: &[i32]) -> ConvertResult<Self> {
        check_count(dims, values.len(), 4)?;
        let data = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Self::from_raw(DType::Int32, dims, data)
    }

    /// Create an `Int64` tensor from a typed slice
    pub fn from_i64(dims: &[i64], values: &[i64]) -> ConvertResult<Self> {
        check_count(dims, values.len(), 8)?;
        let data = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Self::from_raw(DType::Int64, dims, data)
    }

    /// Create a `Float32` tensor from a typed slice
    pub fn from_f32(dims: &[i64], values: &[f32]) -> ConvertResult<Self> {
        check_count(dims, values.len(), 4)?;
        let data = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Self::from_raw(DType::Float32, dims, data)
    }

    /// Create a `Float64` tensor from a typed slice
    pub fn from_f64(dims: &[i64], values: &[f64]) -> ConvertResult<Self> {
        check_count(dims, values.len(), 8)?;
        let data = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Self::from_raw(DType::Float64, dims, data)
    }

    /// Create a `Bool` tensor from a typed slice, one byte per element
    pub fn from_bool(dims: &[i64], values: &[bool]) -> ConvertResult<Self> {
        check_count(dims, values.len(), 1)?;
        let data = values.iter().map(|&b| b as u8).collect();
        Self::from_raw(DType::Bool, dims, data)
    }

    /// Element type tag
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Shape extents, one per dimension
    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    /// Raw little-endian backing buffer
    pub fn raw_data(&self) -> &[u8] {
        &self.data
    }

    /// Total number of elements
    pub fn numel(&self) -> usize {
        self.data.len() / self.dtype.size_of()
    }

    /// Consume the tensor, returning the raw backing buffer
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Verify that a typed slice has as many elements as the shape requires
fn check_count(dims: &[i64], len: usize, width: usize) -> ConvertResult<()> {
    let numel = checked_numel(dims)?;
    if len != numel {
        return Err(ConvertError::LengthMismatch {
            dims: dims.to_vec(),
            expected: numel.saturating_mul(width),
            actual: len.saturating_mul(width),
        });
    }
    Ok(())
}
