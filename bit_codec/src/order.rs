//! The bit-order convention shared by the packer and unpacker.

use crate::Error;
use core::str::FromStr;

/// Maps logical bit position `j` (0 = first element read) onto a physical
/// position within a byte.
///
/// This is the only coupling between packing and unpacking: a buffer packed
/// with one order round-trips only when unpacked with the same order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BitOrder {
    /// First element becomes the most significant bit.
    #[default]
    Big,
    /// First element becomes the least significant bit.
    Little,
}

impl BitOrder {
    /// Physical bit position for logical position `j` (`j < 8`).
    #[inline(always)]
    pub const fn bit_position(self, j: u32) -> u32 {
        match self {
            Self::Big => 7 - j,
            Self::Little => j,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Little => "little",
        }
    }
}

impl core::fmt::Display for BitOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BitOrder {
    type Err = Error;

    /// Accepts exactly `"big"` or `"little"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_codec::{BitOrder, Error};
    ///
    /// assert_eq!("little".parse::<BitOrder>(), Ok(BitOrder::Little));
    /// assert!(matches!(
    ///     "middle".parse::<BitOrder>(),
    ///     Err(Error::InvalidConfiguration(_))
    /// ));
    /// ```
    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "big" => Ok(Self::Big),
            "little" => Ok(Self::Little),
            other => Err(Error::InvalidConfiguration(other.into())),
        }
    }
}
