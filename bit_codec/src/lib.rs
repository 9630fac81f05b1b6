//! # bit_codec
//!
//! Packs truthy/falsy scalars into dense bytes (8 logical values per byte)
//! and expands them back.
//!
//! ```rust
//! use bit_codec::{BitOrder, pack_slice, unpack_bytes};
//!
//! let mask = [true, false, true, true, false, false, false, false];
//! let packed = pack_slice(&mask, BitOrder::Big);
//! assert_eq!(packed, [0b1011_0000]);
//!
//! let bits: Vec<u8> = unpack_bytes(&packed, BitOrder::Big);
//! assert_eq!(bits, [1, 0, 1, 1, 0, 0, 0, 0]);
//! ```
//!
//! ## Bit order
//!
//! [`BitOrder`] fixes how the 8 logical values map onto byte positions:
//! `Big` puts the first element in the most significant bit, `Little` in the
//! least significant. Packing and unpacking must use the same order for a
//! round trip.
//!
//! ## Boundary behaviour
//!
//! An input whose length is not a multiple of 8 is zero-padded into the final
//! byte; unpacking always expands every byte fully, so those pad bits come
//! back as 0. A round trip reproduces the input exactly only when the length
//! is a multiple of 8, or when comparing just the first `n` unpacked
//! elements.
//!
//! ## Dynamic dispatch
//!
//! The [`pack`] and [`unpack`] entry points take a
//! [`ScalarSlice`](scalar_view::ScalarSlice) and validate its element type
//! once, before anything is allocated: packing accepts boolean and integer
//! elements, unpacking requires unsigned bytes. The `*_slice`/`*_bytes`
//! functions are the typed paths with the same kernels and no failure modes.
//!
//! ## Parallel execution
//!
//! Every output element depends on a disjoint input window, so the work can
//! be split across threads with no synchronization: map [`pack_byte_at`] /
//! [`unpack_bit_at`] over disjoint index ranges. The bulk functions here run
//! sequentially.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod order;
pub mod pack;
pub mod unpack;

pub use error::Error;
pub use order::BitOrder;
pub use pack::{pack, pack_byte_at, pack_slice, packed_len};
pub use unpack::{unpack, unpack_bit_at, unpack_bytes, unpacked_len};
