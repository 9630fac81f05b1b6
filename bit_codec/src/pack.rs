//! The packer: 8 truthy/falsy elements in, 1 byte out.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::error::Error;
use crate::order::BitOrder;
use scalar_view::{ScalarSlice, Truthy};

/// Number of bytes needed to pack `n` elements.
#[inline]
pub const fn packed_len(n: usize) -> usize {
    n.div_ceil(8)
}

/// Packs a type-tagged buffer, validating its element type first.
///
/// Accepts boolean and integer element types; floats are rejected with
/// [`Error::InvalidInputType`] before any output is allocated.
///
/// # Examples
///
/// ```
/// use bit_codec::{BitOrder, pack};
/// use scalar_view::ScalarSlice;
///
/// let flags = [1u8, 0, 0, 0, 0, 0, 0, 0];
/// let packed = pack(&ScalarSlice::from(&flags[..]), BitOrder::Big).unwrap();
/// assert_eq!(packed, [128]);
///
/// let floats = [1.0f32];
/// assert!(pack(&ScalarSlice::from(&floats[..]), BitOrder::Big).is_err());
/// ```
pub fn pack(input: &ScalarSlice<'_>, order: BitOrder) -> Result<Vec<u8>, Error> {
    match *input {
        ScalarSlice::Bool(s) => Ok(pack_slice(s, order)),
        ScalarSlice::U8(s) => Ok(pack_slice(s, order)),
        ScalarSlice::I8(s) => Ok(pack_slice(s, order)),
        ScalarSlice::U16(s) => Ok(pack_slice(s, order)),
        ScalarSlice::I16(s) => Ok(pack_slice(s, order)),
        ScalarSlice::U32(s) => Ok(pack_slice(s, order)),
        ScalarSlice::I32(s) => Ok(pack_slice(s, order)),
        ScalarSlice::U64(s) => Ok(pack_slice(s, order)),
        ScalarSlice::I64(s) => Ok(pack_slice(s, order)),
        ScalarSlice::F32(_) | ScalarSlice::F64(_) => Err(Error::InvalidInputType {
            expected: "integer or boolean",
            found: input.scalar_type(),
        }),
    }
}

/// Packs a typed slice into `ceil(n / 8)` freshly allocated bytes.
///
/// A trailing partial group is zero-padded: the missing logical positions
/// contribute 0 bits in whichever physical positions the order assigns them.
///
/// # Examples
///
/// ```
/// use bit_codec::{BitOrder, pack_slice};
///
/// assert_eq!(pack_slice(&[1u8, 0, 0, 0, 0, 0, 0, 0], BitOrder::Big), [128]);
/// assert_eq!(pack_slice(&[1u8, 0, 0, 0, 0, 0, 0, 0], BitOrder::Little), [1]);
/// ```
pub fn pack_slice<T: Truthy>(input: &[T], order: BitOrder) -> Vec<u8> {
    let mut out = vec![0u8; packed_len(input.len())];
    // Bit order is resolved here, once; the fill loops are monomorphic.
    match order {
        BitOrder::Big => fill_packed::<T, true>(input, &mut out),
        BitOrder::Little => fill_packed::<T, false>(input, &mut out),
    }
    out
}

/// Computes output byte `i` on its own.
///
/// Reads only the window `input[i * 8 .. i * 8 + 8]` (clamped to the input
/// length), so disjoint index ranges can be evaluated from independent
/// threads with no coordination.
#[inline]
pub fn pack_byte_at<T: Truthy>(input: &[T], i: usize, order: BitOrder) -> u8 {
    match order {
        BitOrder::Big => pack_window::<T, true>(input, i),
        BitOrder::Little => pack_window::<T, false>(input, i),
    }
}

fn fill_packed<T: Truthy, const MSB: bool>(input: &[T], out: &mut [u8]) {
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = pack_window::<T, MSB>(input, i);
    }
}

#[inline(always)]
fn pack_window<T: Truthy, const MSB: bool>(input: &[T], i: usize) -> u8 {
    let start = i * 8;
    let mut byte = 0u8;
    for j in 0..8 {
        let k = start + j;
        if k < input.len() && input[k].is_truthy() {
            let pos = if MSB { 7 - j } else { j };
            byte |= 1 << pos;
        }
    }
    byte
}
