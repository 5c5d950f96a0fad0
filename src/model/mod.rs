//! Model I/O tensor wrapper
//!
//! A named, axis-annotated wrapper around a numeric array, matching the
//! shape of the tensors a model-serving layer passes around. The bridge
//! only reads its array view; no loading or execution machinery lives here.

use crate::array::NdArray;
use crate::error::{ConvertError, ConvertResult};

/// A named model input or output holding a numeric array
///
/// The axes string carries one letter per dimension (for example `"bcyx"`
/// for batch, channel, y, x) and must match the rank of the wrapped array.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTensor {
    name: String,
    axes: String,
    data: NdArray,
}

impl ModelTensor {
    /// Create a model tensor, validating the axes annotation against the
    /// array rank
    pub fn new(
        name: impl Into<String>,
        axes: impl Into<String>,
        data: NdArray,
    ) -> ConvertResult<Self> {
        let axes = axes.into();
        if axes.chars().count() != data.ndim() {
            return Err(ConvertError::AxesMismatch {
                axes,
                rank: data.ndim(),
            });
        }
        Ok(Self {
            name: name.into(),
            axes,
            data,
        })
    }

    /// Tensor name, as declared by the model
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Axes annotation, one letter per dimension
    pub fn axes(&self) -> &str {
        &self.axes
    }

    /// Array view of the tensor data
    pub fn data(&self) -> &NdArray {
        &self.data
    }

    /// Consume the wrapper, returning the array
    pub fn into_data(self) -> NdArray {
        self.data
    }
}
