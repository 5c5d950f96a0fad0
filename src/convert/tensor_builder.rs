//! Array to tensor conversion
//!
//! Builds an engine `Tensor` from a dynamically-typed `NdArray` by encoding
//! the array's elements, in row-major order, into a freshly allocated
//! little-endian buffer.

use crate::array::NdArray;
use crate::error::{ConvertError, ConvertResult};
use crate::model::ModelTensor;
use crate::tensor::{DType, Tensor};

/// Convert a numeric array into an engine tensor
///
/// Dispatches on the array's declared element type to the type-specific
/// builders below. Signed and unsigned tags of the same width collapse to
/// the engine's single tag for that width: `Int8`/`Uint8` both become a
/// `Uint8` tensor and `Int32`/`Uint32` both become an `Int32` tensor.
pub fn build(array: &NdArray) -> ConvertResult<Tensor> {
    match array {
        NdArray::Int8(_) | NdArray::Uint8(_) => build_u8(array),
        NdArray::Int32(_) | NdArray::Uint32(_) => build_i32(array),
        NdArray::Float(_) => build_f32(array),
        NdArray::Double(_) => build_f64(array),
        NdArray::Bool(_) => build_bool(array),
        NdArray::Int64(_) => build_i64(array),
        other => Err(ConvertError::UnsupportedDataType(other.data_type())),
    }
}

/// Convert a model tensor into an engine tensor through its array view
pub fn build_from_model(model: &ModelTensor) -> ConvertResult<Tensor> {
    build(model.data())
}

/// Build a `Uint8` tensor from an `Int8` or `Uint8` array
pub fn build_u8(array: &NdArray) -> ConvertResult<Tensor> {
    let data: Vec<u8> = match array {
        NdArray::Int8(a) => a.iter().map(|&v| v as u8).collect(),
        NdArray::Uint8(a) => a.iter().copied().collect(),
        other => {
            return Err(ConvertError::DataTypeMismatch {
                expected: "byte",
                actual: other.data_type(),
            })
        }
    };
    Tensor::from_raw(DType::Uint8, &array.dims(), data)
}

/// Build an `Int32` tensor from an `Int32` or `Uint32` array
///
/// Unsigned elements are reinterpreted bitwise; values above `i32::MAX`
/// wrap negative.
pub fn build_i32(array: &NdArray) -> ConvertResult<Tensor> {
    let data: Vec<u8> = match array {
        NdArray::Int32(a) => a.iter().flat_map(|v| v.to_le_bytes()).collect(),
        NdArray::Uint32(a) => a.iter().flat_map(|v| v.to_le_bytes()).collect(),
        other => {
            return Err(ConvertError::DataTypeMismatch {
                expected: "int",
                actual: other.data_type(),
            })
        }
    };
    Tensor::from_raw(DType::Int32, &array.dims(), data)
}

/// Build an `Int64` tensor from an `Int64` array
pub fn build_i64(array: &NdArray) -> ConvertResult<Tensor> {
    let data: Vec<u8> = match array {
        NdArray::Int64(a) => a.iter().flat_map(|v| v.to_le_bytes()).collect(),
        other => {
            return Err(ConvertError::DataTypeMismatch {
                expected: "long",
                actual: other.data_type(),
            })
        }
    };
    Tensor::from_raw(DType::Int64, &array.dims(), data)
}

/// Build a `Float32` tensor from a `Float` array
pub fn build_f32(array: &NdArray) -> ConvertResult<Tensor> {
    let data: Vec<u8> = match array {
        NdArray::Float(a) => a.iter().flat_map(|v| v.to_le_bytes()).collect(),
        other => {
            return Err(ConvertError::DataTypeMismatch {
                expected: "float",
                actual: other.data_type(),
            })
        }
    };
    Tensor::from_raw(DType::Float32, &array.dims(), data)
}

/// Build a `Float64` tensor from a `Double` array
pub fn build_f64(array: &NdArray) -> ConvertResult<Tensor> {
    let data: Vec<u8> = match array {
        NdArray::Double(a) => a.iter().flat_map(|v| v.to_le_bytes()).collect(),
        other => {
            return Err(ConvertError::DataTypeMismatch {
                expected: "double",
                actual: other.data_type(),
            })
        }
    };
    Tensor::from_raw(DType::Float64, &array.dims(), data)
}

/// Build a `Bool` tensor from a `Bool` array, one byte per element
pub fn build_bool(array: &NdArray) -> ConvertResult<Tensor> {
    let data: Vec<u8> = match array {
        NdArray::Bool(a) => a.iter().map(|&b| b as u8).collect(),
        other => {
            return Err(ConvertError::DataTypeMismatch {
                expected: "boolean",
                actual: other.data_type(),
            })
        }
    };
    Tensor::from_raw(DType::Bool, &array.dims(), data)
}
