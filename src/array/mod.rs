//! Numeric array type
//!
//! This module provides the numeric-array side of the bridge:
//! - Element type tags (`dtype`)
//! - The dynamically-typed `NdArray` handle
//!
//! An `NdArray` is a closed tagged union over `ndarray::ArrayD<T>` for each
//! concrete element type. The tag carried by each variant is the array's
//! declared `DataType`; converters dispatch on it rather than inspecting
//! element values.

pub mod dtype;

// Re-export commonly used items
pub use dtype::{is_float_type, is_int_type, is_signed, DataType};

use ndarray::ArrayD;

/// A dynamically-typed, shape-tagged multidimensional array
#[derive(Debug, Clone, PartialEq)]
pub enum NdArray {
    /// Signed 8-bit elements
    Int8(ArrayD<i8>),
    /// Unsigned 8-bit elements
    Uint8(ArrayD<u8>),
    /// Signed 16-bit elements (carried by the array library, not convertible)
    Int16(ArrayD<i16>),
    /// Unsigned 16-bit elements (carried by the array library, not convertible)
    Uint16(ArrayD<u16>),
    /// Signed 32-bit elements
    Int32(ArrayD<i32>),
    /// Unsigned 32-bit elements
    Uint32(ArrayD<u32>),
    /// Signed 64-bit elements
    Int64(ArrayD<i64>),
    /// 32-bit float elements
    Float(ArrayD<f32>),
    /// 64-bit float elements
    Double(ArrayD<f64>),
    /// Boolean elements
    Bool(ArrayD<bool>),
}

impl NdArray {
    /// Declared element type of this array
    pub fn data_type(&self) -> DataType {
        match self {
            NdArray::Int8(_) => DataType::Int8,
            NdArray::Uint8(_) => DataType::Uint8,
            NdArray::Int16(_) => DataType::Int16,
            NdArray::Uint16(_) => DataType::Uint16,
            NdArray::Int32(_) => DataType::Int32,
            NdArray::Uint32(_) => DataType::Uint32,
            NdArray::Int64(_) => DataType::Int64,
            NdArray::Float(_) => DataType::Float,
            NdArray::Double(_) => DataType::Double,
            NdArray::Bool(_) => DataType::Bool,
        }
    }

    /// Shape extents, one per dimension
    pub fn shape(&self) -> &[usize] {
        match self {
            NdArray::Int8(a) => a.shape(),
            NdArray::Uint8(a) => a.shape(),
            NdArray::Int16(a) => a.shape(),
            NdArray::Uint16(a) => a.shape(),
            NdArray::Int32(a) => a.shape(),
            NdArray::Uint32(a) => a.shape(),
            NdArray::Int64(a) => a.shape(),
            NdArray::Float(a) => a.shape(),
            NdArray::Double(a) => a.shape(),
            NdArray::Bool(a) => a.shape(),
        }
    }

    /// Number of dimensions
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.shape().iter().product()
    }

    /// True if the array holds no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape extents widened to `i64`, the engine's extent type
    pub fn dims(&self) -> Vec<i64> {
        self.shape().iter().map(|&d| d as i64).collect()
    }
}

impl From<ArrayD<i8>> for NdArray {
    fn from(a: ArrayD<i8>) -> Self {
        NdArray::Int8(a)
    }
}

impl From<ArrayD<u8>> for NdArray {
    fn from(a: ArrayD<u8>) -> Self {
        NdArray::Uint8(a)
    }
}

impl From<ArrayD<i16>> for NdArray {
    fn from(a: ArrayD<i16>) -> Self {
        NdArray::Int16(a)
    }
}

impl From<ArrayD<u16>> for NdArray {
    fn from(a: ArrayD<u16>) -> Self {
        NdArray::Uint16(a)
    }
}

impl From<ArrayD<i32>> for NdArray {
    fn from(a: ArrayD<i32>) -> Self {
        NdArray::Int32(a)
    }
}

impl From<ArrayD<u32>> for NdArray {
    fn from(a: ArrayD<u32>) -> Self {
        NdArray::Uint32(a)
    }
}

impl From<ArrayD<i64>> for NdArray {
    fn from(a: ArrayD<i64>) -> Self {
        NdArray::Int64(a)
    }
}

impl From<ArrayD<f32>> for NdArray {
    fn from(a: ArrayD<f32>) -> Self {
        NdArray::Float(a)
    }
}

impl From<ArrayD<f64>> for NdArray {
    fn from(a: ArrayD<f64>) -> Self {
        NdArray::Double(a)
    }
}

impl From<ArrayD<bool>> for NdArray {
    fn from(a: ArrayD<bool>) -> Self {
        NdArray::Bool(a)
    }
}
