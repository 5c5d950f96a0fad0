//! Conversion between engine tensors and numeric arrays
//!
//! This module provides the two stateless converters of the bridge:
//! - `array_builder`: engine tensor → numeric array
//! - `tensor_builder`: numeric array → engine tensor
//!
//! Each call is a single atomic transform: it allocates a fresh destination,
//! bulk-copies the elements in row-major order, and either fully succeeds or
//! returns an error with no output.
//!
//! # Example
//!
//! ```ignore
//! use tensor_bridge::convert::{array_builder, tensor_builder};
//!
//! let array = array_builder::build(&tensor)?;
//! let back = tensor_builder::build(&array)?;
//! ```

pub mod array_builder;
pub mod tensor_builder;

// Re-export the two entry points under conversion-direction names
pub use array_builder::build as tensor_to_array;
pub use tensor_builder::build as array_to_tensor;
pub use tensor_builder::build_from_model as model_to_tensor;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::NdArray;
    use crate::tensor::Tensor;
    use ndarray::{ArrayD, IxDyn};

    #[test]
    fn test_round_trip_f32() {
        let original = Tensor::from_f32(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let array = tensor_to_array(&original).unwrap();
        let back = array_to_tensor(&array).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_round_trip_f64() {
        let original = Tensor::from_f64(&[3, 1], &[-1.5, 0.0, 2.25]).unwrap();
        let back = array_to_tensor(&tensor_to_array(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_round_trip_i32() {
        let original = Tensor::from_i32(&[2, 2], &[i32::MIN, -1, 0, i32::MAX]).unwrap();
        let back = array_to_tensor(&tensor_to_array(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_round_trip_i64() {
        let original = Tensor::from_i64(&[4], &[i64::MIN, -1, 0, i64::MAX]).unwrap();
        let back = array_to_tensor(&tensor_to_array(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_round_trip_u8() {
        // The array comes back tagged int8, but the byte values survive the
        // round trip bit for bit.
        let original = Tensor::from_u8(&[5], &[0, 1, 127, 128, 255]).unwrap();
        let back = array_to_tensor(&tensor_to_array(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_round_trip_bool() {
        let original = Tensor::from_bool(&[4], &[true, false, true, true]).unwrap();
        let back = array_to_tensor(&tensor_to_array(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_round_trip_empty() {
        let original = Tensor::from_i32(&[0, 3], &[]).unwrap();
        let back = array_to_tensor(&tensor_to_array(&original).unwrap()).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_array_round_trip_uint32_collapses() {
        // uint32 arrays survive in value bits but come back tagged int32
        let array = NdArray::from(
            ArrayD::from_shape_vec(IxDyn(&[2]), vec![7u32, u32::MAX]).unwrap(),
        );
        let tensor = array_to_tensor(&array).unwrap();
        let back = tensor_to_array(&tensor).unwrap();
        match back {
            NdArray::Int32(a) => assert_eq!(a.as_slice().unwrap(), &[7, -1]),
            other => panic!("expected int32 array, got {}", other.data_type()),
        }
    }
}
