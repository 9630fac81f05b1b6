//! Type-tagged borrowed slices.

use crate::error::ViewError;
use crate::kind::{ScalarKind, ScalarType};
use bytemuck::{AnyBitPattern, PodCastError};
use bytemuck::checked::CheckedCastError;

/// A read-only view of a linear buffer together with its element type.
///
/// This is the boundary handed to a codec by an array library that keeps its
/// data behind a runtime dtype tag: the codec matches on the variant once and
/// runs a monomorphized kernel, instead of inspecting the tag per element.
#[derive(Debug, Clone, Copy)]
pub enum ScalarSlice<'a> {
    Bool(&'a [bool]),
    U8(&'a [u8]),
    I8(&'a [i8]),
    U16(&'a [u16]),
    I16(&'a [i16]),
    U32(&'a [u32]),
    I32(&'a [i32]),
    U64(&'a [u64]),
    I64(&'a [i64]),
    F32(&'a [f32]),
    F64(&'a [f64]),
}

impl<'a> ScalarSlice<'a> {
    /// Reinterprets a raw byte buffer as a typed view.
    ///
    /// Numeric types use a plain pod cast; `Bool` additionally validates that
    /// every byte is 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use scalar_view::{ScalarSlice, ScalarType, ViewError};
    ///
    /// let view = ScalarSlice::from_raw(ScalarType::U8, &[3, 0, 9]).unwrap();
    /// assert_eq!(view.len(), 3);
    ///
    /// let err = ScalarSlice::from_raw(ScalarType::Bool, &[2]).unwrap_err();
    /// assert_eq!(err, ViewError::InvalidBoolByte);
    /// ```
    pub fn from_raw(ty: ScalarType, bytes: &'a [u8]) -> Result<Self, ViewError> {
        match ty {
            ScalarType::Bool => bytemuck::checked::try_cast_slice(bytes)
                .map(Self::Bool)
                .map_err(|e| map_checked_err(ty, bytes.len(), e)),
            ScalarType::U8 => Ok(Self::U8(bytes)),
            ScalarType::I8 => cast(ty, bytes).map(Self::I8),
            ScalarType::U16 => cast(ty, bytes).map(Self::U16),
            ScalarType::I16 => cast(ty, bytes).map(Self::I16),
            ScalarType::U32 => cast(ty, bytes).map(Self::U32),
            ScalarType::I32 => cast(ty, bytes).map(Self::I32),
            ScalarType::U64 => cast(ty, bytes).map(Self::U64),
            ScalarType::I64 => cast(ty, bytes).map(Self::I64),
            ScalarType::F32 => cast(ty, bytes).map(Self::F32),
            ScalarType::F64 => cast(ty, bytes).map(Self::F64),
        }
    }

    #[inline]
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            Self::Bool(_) => ScalarType::Bool,
            Self::U8(_) => ScalarType::U8,
            Self::I8(_) => ScalarType::I8,
            Self::U16(_) => ScalarType::U16,
            Self::I16(_) => ScalarType::I16,
            Self::U32(_) => ScalarType::U32,
            Self::I32(_) => ScalarType::I32,
            Self::U64(_) => ScalarType::U64,
            Self::I64(_) => ScalarType::I64,
            Self::F32(_) => ScalarType::F32,
            Self::F64(_) => ScalarType::F64,
        }
    }

    #[inline]
    pub const fn kind(&self) -> ScalarKind {
        self.scalar_type().kind()
    }

    /// Number of elements (not bytes).
    #[inline]
    pub const fn len(&self) -> usize {
        match self {
            Self::Bool(s) => s.len(),
            Self::U8(s) => s.len(),
            Self::I8(s) => s.len(),
            Self::U16(s) => s.len(),
            Self::I16(s) => s.len(),
            Self::U32(s) => s.len(),
            Self::I32(s) => s.len(),
            Self::U64(s) => s.len(),
            Self::I64(s) => s.len(),
            Self::F32(s) => s.len(),
            Self::F64(s) => s.len(),
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn cast<'a, T: AnyBitPattern>(ty: ScalarType, bytes: &'a [u8]) -> Result<&'a [T], ViewError> {
    bytemuck::try_cast_slice(bytes).map_err(|e| map_pod_err(ty, bytes.len(), e))
}

fn map_pod_err(ty: ScalarType, len: usize, err: PodCastError) -> ViewError {
    match err {
        PodCastError::TargetAlignmentGreaterAndInputNotAligned
        | PodCastError::AlignmentMismatch => ViewError::Misaligned { ty },
        _ => ViewError::LengthMismatch {
            len,
            elem_size: ty.size_of(),
        },
    }
}

fn map_checked_err(ty: ScalarType, len: usize, err: CheckedCastError) -> ViewError {
    match err {
        CheckedCastError::InvalidBitPattern => ViewError::InvalidBoolByte,
        CheckedCastError::PodCastError(e) => map_pod_err(ty, len, e),
    }
}

macro_rules! impl_from_slice {
    ($($variant:ident => $t:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a [$t]> for ScalarSlice<'a> {
                #[inline]
                fn from(slice: &'a [$t]) -> Self {
                    Self::$variant(slice)
                }
            }
        )*
    };
}

impl_from_slice!(
    Bool => bool,
    U8 => u8,
    I8 => i8,
    U16 => u16,
    I16 => i16,
    U32 => u32,
    I32 => i32,
    U64 => u64,
    I64 => i64,
    F32 => f32,
    F64 => f64,
);
