//! Per-element scalar semantics shared by bit codecs.

/// Scalar types with a truthiness test: non-zero is truthy.
///
/// Implemented for `bool` and the fixed-width integer types only; floats are
/// deliberately excluded so a codec that requires integer-or-boolean input
/// can enforce that at the type level.
pub trait Truthy: Copy {
    fn is_truthy(self) -> bool;
}

/// Scalar types that can be produced from a single bit (0 or 1).
pub trait FromBit: Sized {
    /// `bit` is always 0 or 1.
    fn from_bit(bit: u8) -> Self;
}

impl Truthy for bool {
    #[inline(always)]
    fn is_truthy(self) -> bool {
        self
    }
}

impl FromBit for bool {
    #[inline(always)]
    fn from_bit(bit: u8) -> Self {
        bit != 0
    }
}

macro_rules! impl_bit_scalar_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Truthy for $t {
                #[inline(always)]
                fn is_truthy(self) -> bool {
                    self != 0
                }
            }

            impl FromBit for $t {
                #[inline(always)]
                fn from_bit(bit: u8) -> Self {
                    bit as $t
                }
            }
        )*
    };
}

impl_bit_scalar_for_int!(u8, i8, u16, i16, u32, i32, u64, i64);
