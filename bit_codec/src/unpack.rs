//! The unpacker: 1 byte in, 8 single-bit elements out.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::Error;
use crate::order::BitOrder;
use scalar_view::{FromBit, ScalarSlice};

/// Number of elements produced by unpacking `m` bytes. Always exactly `8 * m`;
/// the final byte expands fully even when it was built from a padded pack.
#[inline]
pub const fn unpacked_len(m: usize) -> usize {
    m * 8
}

/// Unpacks a type-tagged buffer, validating its element type first.
///
/// The input must be exactly unsigned bytes; any other element type is
/// rejected with [`Error::InvalidInputType`] before any output is allocated.
/// The output element type is `u8`.
///
/// # Examples
///
/// ```
/// use bit_codec::{BitOrder, unpack};
/// use scalar_view::ScalarSlice;
///
/// let packed = [0b1011_0000u8];
/// let bits = unpack(&ScalarSlice::from(&packed[..]), BitOrder::Big).unwrap();
/// assert_eq!(bits, [1, 0, 1, 1, 0, 0, 0, 0]);
/// ```
pub fn unpack(input: &ScalarSlice<'_>, order: BitOrder) -> Result<Vec<u8>, Error> {
    match *input {
        ScalarSlice::U8(bytes) => Ok(unpack_bytes(bytes, order)),
        _ => Err(Error::InvalidInputType {
            expected: "unsigned byte",
            found: input.scalar_type(),
        }),
    }
}

/// Unpacks bytes into `8 * m` freshly allocated elements of a caller-chosen
/// type; each element is 0 or 1 widened into `T`.
///
/// # Examples
///
/// ```
/// use bit_codec::{BitOrder, unpack_bytes};
///
/// let bits: Vec<bool> = unpack_bytes(&[0b0000_0101], BitOrder::Little);
/// assert_eq!(bits, [true, false, true, false, false, false, false, false]);
/// ```
pub fn unpack_bytes<T: FromBit>(input: &[u8], order: BitOrder) -> Vec<T> {
    let mut out = Vec::with_capacity(unpacked_len(input.len()));
    match order {
        BitOrder::Big => fill_unpacked::<T, true>(input, &mut out),
        BitOrder::Little => fill_unpacked::<T, false>(input, &mut out),
    }
    out
}

/// Extracts output bit `i` on its own.
///
/// Reads exactly one input byte (`input[i / 8]`), so disjoint index ranges
/// can be evaluated from independent threads with no coordination.
#[inline]
pub fn unpack_bit_at(input: &[u8], i: usize, order: BitOrder) -> u8 {
    (input[i / 8] >> order.bit_position((i % 8) as u32)) & 1
}

fn fill_unpacked<T: FromBit, const MSB: bool>(input: &[u8], out: &mut Vec<T>) {
    for &byte in input {
        for j in 0..8u32 {
            let pos = if MSB { 7 - j } else { j };
            out.push(T::from_bit((byte >> pos) & 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::pack_slice;
    use scalar_view::ScalarType;

    #[test]
    fn single_byte_big() {
        let bits: Vec<u8> = unpack_bytes(&[0b1011_0000], BitOrder::Big);
        assert_eq!(bits, [1, 0, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn single_byte_little() {
        let bits: Vec<u8> = unpack_bytes(&[0b0000_0101], BitOrder::Little);
        assert_eq!(bits, [1, 0, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn empty_input_unpacks_to_empty() {
        let bits: Vec<u8> = unpack_bytes(&[], BitOrder::Big);
        assert!(bits.is_empty());
    }

    #[test]
    fn every_byte_expands_to_eight_elements() {
        for m in 0..16usize {
            let input = vec![0xA5u8; m];
            let bits: Vec<u8> = unpack_bytes(&input, BitOrder::Little);
            assert_eq!(bits.len(), 8 * m);
        }
    }

    #[test]
    fn caller_chooses_output_type() {
        let bits: Vec<i64> = unpack_bytes(&[0b1000_0001], BitOrder::Big);
        assert_eq!(bits, [1, 0, 0, 0, 0, 0, 0, 1]);
        let bools: Vec<bool> = unpack_bytes(&[0b1000_0001], BitOrder::Big);
        assert_eq!(bools[0], true);
        assert_eq!(bools[1], false);
    }

    #[test]
    fn dynamic_unpack_requires_unsigned_bytes() {
        let ints = [1i32, 0];
        let err = unpack(&ScalarSlice::from(&ints[..]), BitOrder::Big).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInputType {
                expected: "unsigned byte",
                found: ScalarType::I32,
            }
        );

        let bools = [true, false];
        assert!(unpack(&ScalarSlice::from(&bools[..]), BitOrder::Big).is_err());
    }

    #[test]
    fn bit_kernel_matches_bulk_output() {
        let input = [0x3Cu8, 0x81, 0xFF, 0x00];
        for order in [BitOrder::Big, BitOrder::Little] {
            let bulk: Vec<u8> = unpack_bytes(&input, order);
            for i in 0..bulk.len() {
                assert_eq!(unpack_bit_at(&input, i, order), bulk[i]);
            }
        }
    }

    #[test]
    fn round_trip_pads_with_zeros() {
        // Length 10: the 6 pad bits come back as zeros after the original values.
        let input = [1u8, 1, 0, 1, 0, 0, 1, 0, 1, 1];
        for order in [BitOrder::Big, BitOrder::Little] {
            let packed = pack_slice(&input, order);
            let bits: Vec<u8> = unpack_bytes(&packed, order);
            assert_eq!(bits.len(), 16);
            assert_eq!(&bits[..10], &input[..]);
            assert_eq!(&bits[10..], &[0, 0, 0, 0, 0, 0]);
        }
    }

    #[test]
    fn mismatched_orders_do_not_round_trip() {
        let input = [1u8, 0, 0, 0, 0, 0, 0, 0];
        let packed = pack_slice(&input, BitOrder::Big);
        let bits: Vec<u8> = unpack_bytes(&packed, BitOrder::Little);
        assert_ne!(&bits[..], &input[..]);
    }
}
