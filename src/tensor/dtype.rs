//! Engine tensor element types
//!
//! Maps between the inference engine's element-type tags and Rust types.

use std::fmt;

/// Element type tag of an engine tensor
///
/// `Uint8`, `Int32`, `Int64`, `Float32`, `Float64` and `Bool` are the
/// convertible variants. The half-precision tags exist in the engine's type
/// family but have no conversion path in this bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// Unsigned 8-bit integer
    Uint8,
    /// Signed 32-bit integer
    Int32,
    /// Signed 64-bit integer
    Int64,
    /// 32-bit IEEE float
    Float32,
    /// 64-bit IEEE float
    Float64,
    /// Boolean, one byte per element
    Bool,
    /// 16-bit IEEE float (no conversion path)
    Float16,
    /// 16-bit brain float (no conversion path)
    Bfloat16,
}

impl DType {
    /// Size in bytes of one element of this type
    pub fn size_of(self) -> usize {
        match self {
            DType::Uint8 | DType::Bool => 1,
            DType::Float16 | DType::Bfloat16 => 2,
            DType::Int32 | DType::Float32 => 4,
            DType::Int64 | DType::Float64 => 8,
        }
    }

    /// Lowercase name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            DType::Uint8 => "uint8",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Bool => "bool",
            DType::Float16 => "float16",
            DType::Bfloat16 => "bfloat16",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_of() {
        assert_eq!(DType::Uint8.size_of(), 1);
        assert_eq!(DType::Bool.size_of(), 1);
        assert_eq!(DType::Int32.size_of(), 4);
        assert_eq!(DType::Float32.size_of(), 4);
        assert_eq!(DType::Int64.size_of(), 8);
        assert_eq!(DType::Float64.size_of(), 8);
        assert_eq!(DType::Float16.size_of(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(DType::Float32.to_string(), "float32");
        assert_eq!(DType::Bfloat16.to_string(), "bfloat16");
    }
}
