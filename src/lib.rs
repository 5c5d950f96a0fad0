//! # Tensor Bridge
//!
//! Bidirectional conversion between an inference engine's raw-buffer tensor
//! type and ndarray-backed numeric arrays.
//!
//! The bridge is a pure memory-layout and type-tag translation: each
//! conversion reads the source's flat buffer, allocates a fresh destination
//! of the same shape, and bulk-copies the elements in row-major order. No
//! computation, graph execution, or model loading happens here.
//!
//! ## Features
//!
//! - **Forward conversion**: engine `Tensor` → dynamically-typed `NdArray`
//! - **Reverse conversion**: `NdArray` (or a `ModelTensor` wrapper) → `Tensor`
//! - **Closed type dispatch**: six convertible element types, with explicit
//!   errors for tags outside the supported set
//!
//! ## Example
//!
//! ```ignore
//! use tensor_bridge::prelude::*;
//!
//! let tensor = Tensor::from_f32(&[2, 3], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
//! let array = tensor_to_array(&tensor)?;
//! let back = array_to_tensor(&array)?;
//! assert_eq!(back, tensor);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod array;
pub mod convert;
pub mod error;
pub mod model;
pub mod tensor;

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module - import commonly used types with `use tensor_bridge::prelude::*`
pub mod prelude {
    pub use crate::array::{DataType, NdArray};
    pub use crate::convert::{array_to_tensor, model_to_tensor, tensor_to_array};
    pub use crate::error::{ConvertError, ConvertResult};
    pub use crate::model::ModelTensor;
    pub use crate::tensor::{DType, Tensor};
}

// ============================================================================
// Crate-level re-exports
// ============================================================================

pub use array::{DataType, NdArray};
pub use error::{ConvertError, ConvertResult};
pub use model::ModelTensor;
pub use tensor::{DType, Tensor};

// ============================================================================
// Version information
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
