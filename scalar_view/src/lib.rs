//! # scalar_view
//!
//! Borrowed, type-tagged views over linear scalar buffers.
//!
//! An array library that stores its data as raw bytes plus a dtype tag can
//! hand a [`ScalarSlice`] to a codec, which then dispatches once on the
//! element type instead of re-checking it per element.
//!
//! ```rust
//! use scalar_view::{ScalarKind, ScalarSlice, ScalarType};
//!
//! let values = [1u32, 0, 7];
//! let view = ScalarSlice::from(&values[..]);
//!
//! assert_eq!(view.scalar_type(), ScalarType::U32);
//! assert_eq!(view.kind(), ScalarKind::Uint);
//! assert_eq!(view.len(), 3);
//! ```
//!
//! Raw byte buffers are reinterpreted with a checked cast:
//!
//! ```rust
//! use scalar_view::{ScalarSlice, ScalarType};
//!
//! let bytes = [1u8, 0, 0, 1];
//! let view = ScalarSlice::from_raw(ScalarType::Bool, &bytes).unwrap();
//! assert_eq!(view.len(), 4);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod kind;
pub mod scalar;
pub mod view;

pub use error::ViewError;
pub use kind::{ScalarKind, ScalarType};
pub use scalar::{FromBit, Truthy};
pub use view::ScalarSlice;
