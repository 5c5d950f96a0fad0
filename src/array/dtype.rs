//! Numeric-array element types
//!
//! Maps between the array library's element-type tags and Rust types.

use std::fmt;

/// Element type tag of a numeric array
///
/// The array library distinguishes signedness at every width. `Int16` and
/// `Uint16` exist in the tag set but have no conversion path in this bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Signed 8-bit integer
    Int8,
    /// Unsigned 8-bit integer
    Uint8,
    /// Signed 16-bit integer (no conversion path)
    Int16,
    /// Unsigned 16-bit integer (no conversion path)
    Uint16,
    /// Signed 32-bit integer
    Int32,
    /// Unsigned 32-bit integer
    Uint32,
    /// Signed 64-bit integer
    Int64,
    /// 32-bit IEEE float
    Float,
    /// 64-bit IEEE float
    Double,
    /// Boolean
    Bool,
}

impl DataType {
    /// Size in bytes of one element of this type
    pub fn element_size(self) -> usize {
        match self {
            DataType::Int8 | DataType::Uint8 | DataType::Bool => 1,
            DataType::Int16 | DataType::Uint16 => 2,
            DataType::Int32 | DataType::Uint32 | DataType::Float => 4,
            DataType::Int64 | DataType::Double => 8,
        }
    }

    /// Lowercase name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            DataType::Int8 => "int8",
            DataType::Uint8 => "uint8",
            DataType::Int16 => "int16",
            DataType::Uint16 => "uint16",
            DataType::Int32 => "int32",
            DataType::Uint32 => "uint32",
            DataType::Int64 => "int64",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Bool => "bool",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check if data type is floating point
pub fn is_float_type(dtype: DataType) -> bool {
    matches!(dtype, DataType::Float | DataType::Double)
}

/// Check if data type is integer
pub fn is_int_type(dtype: DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Uint8
            | DataType::Int16
            | DataType::Uint16
            | DataType::Int32
            | DataType::Uint32
            | DataType::Int64
    )
}

/// Check if data type is signed
pub fn is_signed(dtype: DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::Float
            | DataType::Double
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_size() {
        assert_eq!(DataType::Float.element_size(), 4);
        assert_eq!(DataType::Int64.element_size(), 8);
        assert_eq!(DataType::Uint8.element_size(), 1);
        assert_eq!(DataType::Double.element_size(), 8);
    }

    #[test]
    fn test_is_float_type() {
        assert!(is_float_type(DataType::Float));
        assert!(is_float_type(DataType::Double));
        assert!(!is_float_type(DataType::Int32));
    }

    #[test]
    fn test_is_int_type() {
        assert!(is_int_type(DataType::Int32));
        assert!(is_int_type(DataType::Uint8));
        assert!(!is_int_type(DataType::Float));
        assert!(!is_int_type(DataType::Bool));
    }

    #[test]
    fn test_is_signed() {
        assert!(is_signed(DataType::Int8));
        assert!(is_signed(DataType::Double));
        assert!(!is_signed(DataType::Uint32));
        assert!(!is_signed(DataType::Bool));
    }
}
