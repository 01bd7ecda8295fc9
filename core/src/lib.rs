//! Fixed-size arrays indexed by the variants of a contiguous enumeration.
//!
//! The crate has two layers:
//!
//! - [`metadata`] resolves, once per key type, the sorted list of variants,
//!   whether their discriminants form an unbroken run, and the offset that
//!   maps each variant onto a zero-based slot.
//! - [`array`] builds [`EnumeratedArray`] on top of that mapping: O(1) access
//!   by key or by position, reverse lookup by value, and a one-way freeze.
//!
//! Key types implement [`Enumerated`], normally through
//! `#[derive(Enumerated)]` from the `enumerated` facade crate, or through
//! [`impl_enumerated!`] when a derive is not available.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

// Needed so that macros can uniformly refer to `::enumerated_core` and still work
// from within this crate or a different one.
extern crate self as enumerated_core;

extern crate alloc;

// Exports some symbols publicly so that generated code can always refer to them.
#[doc(hidden)]
pub mod shim {
    pub use alloc::{boxed::Box, vec::Vec};
    pub use once_cell::race::OnceBox;
}

pub mod array;
pub mod error;
pub mod key;
pub mod metadata;
pub mod slot;

pub use array::{EnumeratedArray, Occupied};
pub use error::{Error, Result};
pub use key::{Enumerated, KeyExt};
pub use metadata::{EnumMetadata, KeyRange};
pub use slot::Slot;
