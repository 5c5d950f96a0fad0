//! Shape utilities for engine tensors
//!
//! Functions for validating shapes and computing element counts.

use crate::error::{ConvertError, ConvertResult};

/// Calculate total number of elements from shape
///
/// An empty shape is a scalar with one element. Negative extents are
/// rejected, and the product is computed with overflow checking so that
/// shapes too large for the address space fail instead of wrapping.
pub fn checked_numel(dims: &[i64]) -> ConvertResult<usize> {
    let mut numel: usize = 1;
    for &d in dims {
        if d < 0 {
            return Err(ConvertError::NegativeDim(dims.to_vec()));
        }
        numel = numel
            .checked_mul(d as usize)
            .ok_or_else(|| ConvertError::SizeOverflow(dims.to_vec()))?;
    }
    Ok(numel)
}

/// Convert extents to `usize` for handing a shape to ndarray
pub fn dims_to_usize(dims: &[i64]) -> ConvertResult<Vec<usize>> {
    dims.iter()
        .map(|&d| {
            if d < 0 {
                Err(ConvertError::NegativeDim(dims.to_vec()))
            } else {
                Ok(d as usize)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_numel() {
        assert_eq!(checked_numel(&[2, 3, 4]).unwrap(), 24);
        assert_eq!(checked_numel(&[1, 1, 1]).unwrap(), 1);
        assert_eq!(checked_numel(&[]).unwrap(), 1); // scalar
        assert_eq!(checked_numel(&[5, 0, 3]).unwrap(), 0);
    }

    #[test]
    fn test_checked_numel_negative() {
        assert!(matches!(
            checked_numel(&[2, -1, 4]),
            Err(ConvertError::NegativeDim(_))
        ));
    }

    #[test]
    fn test_checked_numel_overflow() {
        assert!(matches!(
            checked_numel(&[i64::MAX, i64::MAX]),
            Err(ConvertError::SizeOverflow(_))
        ));
    }

    #[test]
    fn test_dims_to_usize() {
        assert_eq!(dims_to_usize(&[2, 3]).unwrap(), vec![2, 3]);
        assert!(dims_to_usize(&[-1, 3]).is_err());
    }
}
