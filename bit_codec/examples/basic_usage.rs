use bit_codec::{BitOrder, pack, pack_slice, unpack_bytes};
use scalar_view::{ScalarSlice, ScalarType};

fn main() {
    println!("=== Bit Codec Examples ===\n");

    example_compact_mask();
    example_bit_orders();
    example_dynamic_boundary();
}

fn example_compact_mask() {
    println!("Example 1: Packing a boolean mask");

    let mask: Vec<bool> = (0..20).map(|i| i % 3 == 0).collect();
    let packed = pack_slice(&mask, BitOrder::Big);

    println!("  {} booleans -> {} bytes", mask.len(), packed.len());
    for byte in &packed {
        println!("  0b{:08b}", byte);
    }

    let restored: Vec<bool> = unpack_bytes(&packed, BitOrder::Big);
    assert_eq!(&restored[..mask.len()], &mask[..]);
    println!("  First {} unpacked elements match the input\n", mask.len());
}

fn example_bit_orders() {
    println!("Example 2: Big vs little bit order");

    let flags = [1u8, 0, 0, 0, 0, 0, 0, 0];
    let big = pack_slice(&flags, BitOrder::Big);
    let little = pack_slice(&flags, BitOrder::Little);

    println!("  input:  {:?}", flags);
    println!("  big:    [{}] (first element -> MSB)", big[0]);
    println!("  little: [{}] (first element -> LSB)\n", little[0]);
}

fn example_dynamic_boundary() {
    println!("Example 3: Type-tagged buffers");

    // An i64 buffer packs by truthiness.
    let counts = [0i64, 42, -1, 0];
    let packed = pack(&ScalarSlice::from(&counts[..]), BitOrder::Big).unwrap();
    println!("  {:?} -> 0b{:08b}", counts, packed[0]);

    // A raw byte buffer tagged as bool is validated on the way in.
    let raw = [1u8, 0, 1];
    let view = ScalarSlice::from_raw(ScalarType::Bool, &raw).unwrap();
    let packed = pack(&view, BitOrder::Little).unwrap();
    println!("  raw bool bytes {:?} -> 0b{:08b}", raw, packed[0]);

    // Floats are rejected before anything is allocated.
    let floats = [1.0f32, 0.0];
    let err = pack(&ScalarSlice::from(&floats[..]), BitOrder::Big).unwrap_err();
    println!("  f32 input rejected: {}", err);
}
