#[cfg(not(feature = "std"))]
use alloc::string::String;
use scalar_view::ScalarType;
#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input buffer's element type is outside what the operation accepts.
    /// Raised before any output is allocated.
    #[cfg_attr(
        feature = "std",
        error("expected an input of {expected} scalar type, got {found}")
    )]
    InvalidInputType {
        expected: &'static str,
        found: ScalarType,
    },

    /// The bit-order token is not one of the two recognized values.
    #[cfg_attr(
        feature = "std",
        error("bit order must be either 'big' or 'little', got '{0}'")
    )]
    InvalidConfiguration(String),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidInputType { expected, found } => {
                write!(f, "expected an input of {} scalar type, got {}", expected, found)
            }
            Error::InvalidConfiguration(token) => {
                write!(f, "bit order must be either 'big' or 'little', got '{}'", token)
            }
        }
    }
}
