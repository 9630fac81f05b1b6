use crate::kind::ScalarType;
#[cfg(feature = "std")]
use thiserror::Error;

/// Errors from reinterpreting a raw byte buffer as a typed view.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    #[cfg_attr(
        feature = "std",
        error("buffer is not aligned for element type {ty}")
    )]
    Misaligned { ty: ScalarType },

    #[cfg_attr(
        feature = "std",
        error("buffer length {len} is not a multiple of the element size {elem_size}")
    )]
    LengthMismatch { len: usize, elem_size: usize },

    #[cfg_attr(
        feature = "std",
        error("bool buffer contains a byte other than 0 or 1")
    )]
    InvalidBoolByte,
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ViewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ViewError::Misaligned { ty } => {
                write!(f, "buffer is not aligned for element type {}", ty)
            }
            ViewError::LengthMismatch { len, elem_size } => {
                write!(
                    f,
                    "buffer length {} is not a multiple of the element size {}",
                    len, elem_size
                )
            }
            ViewError::InvalidBoolByte => {
                write!(f, "bool buffer contains a byte other than 0 or 1")
            }
        }
    }
}
