//! # Runtime-Typed Vector Input

use crate::errors::{WTResult, WordtableError};

/// Element type of a [`VectorData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum DType {
    /// 32-bit float; the only type a [`crate::vectors::VectorTable`] stores.
    F32,

    /// 64-bit float.
    F64,

    /// 32-bit signed integer.
    I32,

    /// 64-bit signed integer.
    I64,
}

/// A vector as supplied by a caller, tagged with its element type.
///
/// Tables accept only [`DType::F32`] data; other types are rejected rather
/// than silently converted.
#[derive(Debug, Clone, PartialEq)]
pub enum VectorData {
    /// `f32` elements.
    F32(Vec<f32>),

    /// `f64` elements.
    F64(Vec<f64>),

    /// `i32` elements.
    I32(Vec<i32>),

    /// `i64` elements.
    I64(Vec<i64>),
}

impl VectorData {
    /// The element type.
    pub fn dtype(&self) -> DType {
        match self {
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
            Self::I32(_) => DType::I32,
            Self::I64(_) => DType::I64,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
        }
    }

    /// Is the vector empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the `f32` elements.
    ///
    /// ## Returns
    /// The elements, or [`WordtableError::Type`] for any other element type.
    pub fn try_as_f32(&self) -> WTResult<&[f32]> {
        match self {
            Self::F32(v) => Ok(v),
            other => Err(WordtableError::Type {
                expected: DType::F32,
                found: other.dtype(),
            }),
        }
    }

    /// Take the `f32` elements.
    ///
    /// ## Returns
    /// The elements, or [`WordtableError::Type`] for any other element type.
    pub fn try_into_f32(self) -> WTResult<Vec<f32>> {
        match self {
            Self::F32(v) => Ok(v),
            other => Err(WordtableError::Type {
                expected: DType::F32,
                found: other.dtype(),
            }),
        }
    }
}

impl From<Vec<f32>> for VectorData {
    fn from(values: Vec<f32>) -> Self {
        Self::F32(values)
    }
}

impl From<&[f32]> for VectorData {
    fn from(values: &[f32]) -> Self {
        Self::F32(values.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for VectorData {
    fn from(values: [f32; N]) -> Self {
        Self::F32(values.to_vec())
    }
}

impl From<Vec<f64>> for VectorData {
    fn from(values: Vec<f64>) -> Self {
        Self::F64(values)
    }
}

impl From<Vec<i32>> for VectorData {
    fn from(values: Vec<i32>) -> Self {
        Self::I32(values)
    }
}

impl From<Vec<i64>> for VectorData {
    fn from(values: Vec<i64>) -> Self {
        Self::I64(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype() {
        assert_eq!(VectorData::from(vec![1.0_f32]).dtype(), DType::F32);
        assert_eq!(VectorData::from(vec![1.0_f64]).dtype(), DType::F64);
        assert_eq!(VectorData::from(vec![1_i32]).dtype(), DType::I32);
        assert_eq!(VectorData::from(vec![1_i64]).dtype(), DType::I64);

        assert_eq!(DType::F32.to_string(), "f32");
        assert_eq!("i64".parse::<DType>().unwrap(), DType::I64);
    }

    #[test]
    fn test_try_as_f32() {
        let data = VectorData::from([0.5_f32, 1.5]);
        assert_eq!(data.len(), 2);
        assert_eq!(data.try_as_f32().unwrap(), [0.5_f32, 1.5].as_slice());

        let data = VectorData::from(vec![1_i64, 0]);
        assert!(matches!(
            data.try_into_f32(),
            Err(WordtableError::Type {
                expected: DType::F32,
                found: DType::I64
            })
        ));
    }
}
