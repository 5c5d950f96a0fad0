//! Tensor to array conversion
//!
//! Builds a dynamically-typed `NdArray` from an engine `Tensor` by decoding
//! the tensor's raw little-endian buffer into a freshly allocated typed
//! array of the same shape.

use ndarray::{ArrayD, IxDyn};

use crate::array::NdArray;
use crate::error::{ConvertError, ConvertResult};
use crate::tensor::{dims_to_usize, DType, Tensor};

/// Convert an engine tensor into a numeric array
///
/// Dispatches on the tensor's element type to the width-specific builders
/// below. Element values are preserved in row-major order; an unsigned
/// 8-bit tensor comes back tagged as signed 8-bit, which is the only lossy
/// tag mapping at this boundary.
pub fn build(tensor: &Tensor) -> ConvertResult<NdArray> {
    match tensor.dtype() {
        DType::Uint8 => from_tensor_u8(tensor),
        DType::Int32 => from_tensor_i32(tensor),
        DType::Float32 => from_tensor_f32(tensor),
        DType::Float64 => from_tensor_f64(tensor),
        DType::Bool => from_tensor_bool(tensor),
        DType::Int64 => from_tensor_i64(tensor),
        other => Err(ConvertError::UnsupportedDType(other)),
    }
}

/// Convert a `Uint8` tensor into an `Int8` array
///
/// Each byte is reinterpreted bitwise; values above 127 wrap negative.
pub fn from_tensor_u8(tensor: &Tensor) -> ConvertResult<NdArray> {
    expect_dtype(tensor, DType::Uint8, "uint8")?;
    let shape = dims_to_usize(tensor.dims())?;
    let data: Vec<i8> = tensor.raw_data().iter().map(|&b| b as i8).collect();
    let array = ArrayD::from_shape_vec(IxDyn(&shape), data)?;
    Ok(NdArray::Int8(array))
}

/// Convert an `Int32` tensor into an `Int32` array
pub fn from_tensor_i32(tensor: &Tensor) -> ConvertResult<NdArray> {
    expect_dtype(tensor, DType::Int32, "int32")?;
    let shape = dims_to_usize(tensor.dims())?;
    let data: Vec<i32> = tensor
        .raw_data()
        .chunks_exact(4)
        .map(|b| i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    let array = ArrayD::from_shape_vec(IxDyn(&shape), data)?;
    Ok(NdArray::Int32(array))
}

/// Convert an `Int64` tensor into an `Int64` array
pub fn from_tensor_i64(tensor: &Tensor) -> ConvertResult<NdArray> {
    expect_dtype(tensor, DType::Int64, "int64")?;
    let shape = dims_to_usize(tensor.dims())?;
    let data: Vec<i64> = tensor
        .raw_data()
        .chunks_exact(8)
        .map(|b| i64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
        .collect();
    let array = ArrayD::from_shape_vec(IxDyn(&shape), data)?;
    Ok(NdArray::Int64(array))
}

/// Convert a `Float32` tensor into a `Float` array
pub fn from_tensor_f32(tensor: &Tensor) -> ConvertResult<NdArray> {
    expect_dtype(tensor, DType::Float32, "float32")?;
    let shape = dims_to_usize(tensor.dims())?;
    let data: Vec<f32> = tensor
        .raw_data()
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();
    let array = ArrayD::from_shape_vec(IxDyn(&shape), data)?;
    Ok(NdArray::Float(array))
}

/// Convert a `Float64` tensor into a `Double` array
pub fn from_tensor_f64(tensor: &Tensor) -> ConvertResult<NdArray> {
    expect_dtype(tensor, DType::Float64, "float64")?;
    let shape = dims_to_usize(tensor.dims())?;
    let data: Vec<f64> = tensor
        .raw_data()
        .chunks_exact(8)
        .map(|b| f64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]))
        .collect();
    let array = ArrayD::from_shape_vec(IxDyn(&shape), data)?;
    Ok(NdArray::Double(array))
}

/// Convert a `Bool` tensor into a `Bool` array
///
/// Any non-zero byte decodes to `true`.
pub fn from_tensor_bool(tensor: &Tensor) -> ConvertResult<NdArray> {
    expect_dtype(tensor, DType::Bool, "bool")?;
    let shape = dims_to_usize(tensor.dims())?;
    let data: Vec<bool> = tensor.raw_data().iter().map(|&b| b != 0).collect();
    let array = ArrayD::from_shape_vec(IxDyn(&shape), data)?;
    Ok(NdArray::Bool(array))
}

fn expect_dtype(tensor: &Tensor, dtype: DType, expected: &'static str) -> ConvertResult<()> {
    if tensor.dtype() != dtype {
        return Err(ConvertError::DTypeMismatch {
            expected,
            actual: tensor.dtype(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::DataType;

    #[test]
    fn test_build_f32() {
        let tensor = Tensor::from_f32(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let array = build(&tensor).unwrap();
        assert_eq!(array.data_type(), DataType::Float);
        assert_eq!(array.shape(), &[2, 3]);
        match array {
            NdArray::Float(a) => {
                assert_eq!(a[[0, 0]], 1.0);
                assert_eq!(a[[0, 2]], 3.0);
                assert_eq!(a[[1, 2]], 6.0);
            }
            other => panic!("expected float array, got {}", other.data_type()),
        }
    }

    #[test]
    fn test_build_u8_tags_int8() {
        // 200 wraps to -56 when the byte is reinterpreted as signed
        let tensor = Tensor::from_u8(&[3], &[0, 127, 200]).unwrap();
        let array = build(&tensor).unwrap();
        assert_eq!(array.data_type(), DataType::Int8);
        match array {
            NdArray::Int8(a) => assert_eq!(a.as_slice().unwrap(), &[0, 127, -56]),
            other => panic!("expected int8 array, got {}", other.data_type()),
        }
    }

    #[test]
    fn test_build_i64() {
        let tensor = Tensor::from_i64(&[2, 2], &[1, -2, 3, i64::MAX]).unwrap();
        let array = build(&tensor).unwrap();
        match array {
            NdArray::Int64(a) => {
                assert_eq!(a[[0, 1]], -2);
                assert_eq!(a[[1, 1]], i64::MAX);
            }
            other => panic!("expected int64 array, got {}", other.data_type()),
        }
    }

    #[test]
    fn test_build_bool() {
        let tensor = Tensor::from_bool(&[4], &[true, false, true, true]).unwrap();
        let array = build(&tensor).unwrap();
        assert_eq!(array.data_type(), DataType::Bool);
        match array {
            NdArray::Bool(a) => assert_eq!(a.as_slice().unwrap(), &[true, false, true, true]),
            other => panic!("expected bool array, got {}", other.data_type()),
        }
    }

    #[test]
    fn test_build_scalar() {
        let tensor = Tensor::from_f64(&[], &[3.25]).unwrap();
        let array = build(&tensor).unwrap();
        assert_eq!(array.ndim(), 0);
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn test_element_count_matches_extent_product() {
        let tensor = Tensor::from_i32(&[2, 3, 4], &[0; 24]).unwrap();
        let array = build(&tensor).unwrap();
        assert_eq!(array.len(), 24);
    }

    #[test]
    fn test_unsupported_dtype() {
        let tensor = Tensor::from_raw(DType::Float16, &[2], vec![0u8; 4]).unwrap();
        let err = build(&tensor).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedDType(DType::Float16)));
    }

    #[test]
    fn test_typed_path_rejects_wrong_dtype() {
        let tensor = Tensor::from_i32(&[2], &[1, 2]).unwrap();
        let err = from_tensor_f32(&tensor).unwrap_err();
        assert!(matches!(err, ConvertError::DTypeMismatch { .. }));
    }
}
