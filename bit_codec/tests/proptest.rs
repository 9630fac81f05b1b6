// tests/proptest.rs

#![cfg(test)]

use bit_codec::{
    BitOrder, pack_byte_at, pack_slice, packed_len, unpack_bit_at, unpack_bytes, unpacked_len,
};
use proptest::prelude::*;

fn bit_orders() -> impl Strategy<Value = BitOrder> {
    prop_oneof![Just(BitOrder::Big), Just(BitOrder::Little)]
}

//
// -----------------------------------------------------------------------------
// Round-trip Properties
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_round_trip_on_multiple_of_8(
        groups in prop::collection::vec(any::<[bool; 8]>(), 0..32),
        order in bit_orders()
    ) {
        let input: Vec<bool> = groups.into_iter().flatten().collect();
        let packed = pack_slice(&input, order);
        let bits: Vec<bool> = unpack_bytes(&packed, order);
        prop_assert_eq!(bits, input);
    }

    #[test]
    fn prop_prefix_round_trips_and_padding_is_zero(
        input in prop::collection::vec(any::<u8>(), 0..200),
        order in bit_orders()
    ) {
        let packed = pack_slice(&input, order);
        let bits: Vec<u8> = unpack_bytes(&packed, order);

        prop_assert_eq!(bits.len(), unpacked_len(packed.len()));

        for (i, &v) in input.iter().enumerate() {
            prop_assert_eq!(bits[i], (v != 0) as u8);
        }
        for &pad in &bits[input.len()..] {
            prop_assert_eq!(pad, 0);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Length Formulas
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_packed_length_is_ceil(
        input in prop::collection::vec(any::<bool>(), 0..300),
        order in bit_orders()
    ) {
        let packed = pack_slice(&input, order);
        prop_assert_eq!(packed.len(), packed_len(input.len()));
        prop_assert_eq!(packed.len(), input.len().div_ceil(8));
    }

    #[test]
    fn prop_unpacked_length_is_eightfold(
        input in prop::collection::vec(any::<u8>(), 0..100),
        order in bit_orders()
    ) {
        let bits: Vec<u8> = unpack_bytes(&input, order);
        prop_assert_eq!(bits.len(), 8 * input.len());
    }
}

//
// -----------------------------------------------------------------------------
// Per-index Kernels Agree With the Bulk Paths
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_pack_kernel_matches_bulk(
        input in prop::collection::vec(any::<u16>(), 0..150),
        order in bit_orders()
    ) {
        let bulk = pack_slice(&input, order);
        for i in 0..bulk.len() {
            prop_assert_eq!(pack_byte_at(&input, i, order), bulk[i]);
        }
    }

    #[test]
    fn prop_unpack_kernel_matches_bulk(
        input in prop::collection::vec(any::<u8>(), 0..100),
        order in bit_orders()
    ) {
        let bulk: Vec<u8> = unpack_bytes(&input, order);
        for i in 0..bulk.len() {
            prop_assert_eq!(unpack_bit_at(&input, i, order), bulk[i]);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Bit-order Symmetry
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_big_is_bit_reversed_little(input in prop::collection::vec(any::<bool>(), 0..200)) {
        let big = pack_slice(&input, BitOrder::Big);
        let little = pack_slice(&input, BitOrder::Little);
        prop_assert_eq!(big.len(), little.len());
        for (b, l) in big.iter().zip(&little) {
            prop_assert_eq!(*b, l.reverse_bits());
        }
    }

    #[test]
    fn prop_unpack_orders_reverse_within_each_byte(input in prop::collection::vec(any::<u8>(), 0..64)) {
        let big: Vec<u8> = unpack_bytes(&input, BitOrder::Big);
        let little: Vec<u8> = unpack_bytes(&input, BitOrder::Little);
        for (chunk_b, chunk_l) in big.chunks_exact(8).zip(little.chunks_exact(8)) {
            let reversed: Vec<u8> = chunk_l.iter().rev().copied().collect();
            prop_assert_eq!(chunk_b, &reversed[..]);
        }
    }
}

//
// -----------------------------------------------------------------------------
// Output Element Types Agree
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_output_type_does_not_change_values(
        input in prop::collection::vec(any::<u8>(), 0..64),
        order in bit_orders()
    ) {
        let as_u8: Vec<u8> = unpack_bytes(&input, order);
        let as_u64: Vec<u64> = unpack_bytes(&input, order);
        let as_bool: Vec<bool> = unpack_bytes(&input, order);
        for i in 0..as_u8.len() {
            prop_assert_eq!(as_u64[i], as_u8[i] as u64);
            prop_assert_eq!(as_bool[i], as_u8[i] != 0);
        }
    }
}
