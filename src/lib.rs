//! Enumerated - fixed-size arrays indexed by enumerations
//!
//! # Overview
//!
//! `EnumeratedArray<K, V>` stores exactly one `V` per variant of `K` in a flat
//! array. Keys translate to slots by subtracting the smallest discriminant, so
//! access is a subtraction and a bounds-free load, with no hashing. It is a
//! compact alternative to a hash map when keys come from a small, dense,
//! statically known set:
//!
//! - State machines with per-state data
//! - Named slots (equipment, channels, axes)
//! - Lookup tables keyed by opcodes or tags
//!
//! Only enums whose discriminants form an unbroken run can be used. That is
//! checked once per key type and reported when an array is constructed.
//!
//! # Quick Start
//!
//! ```
//! use enumerated::{Enumerated, EnumeratedArray, Error, KeyExt};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
//! enum Signed {
//!     NegativeOne = -1,
//!     Zero = 0,
//!     One = 1,
//! }
//!
//! let mut labels = EnumeratedArray::<Signed, &str>::with_entries([
//!     (Signed::NegativeOne, "minus"),
//!     (Signed::One, "plus"),
//! ])?;
//! labels.set(Signed::Zero, "zero")?;
//!
//! assert_eq!(labels[Signed::One], "plus");
//! assert_eq!(Signed::Zero.to_index(), 1);
//! assert_eq!(labels.key_of(&"minus"), Some(Signed::NegativeOne));
//!
//! // Freezing is one-way; reads keep working.
//! let labels = labels.into_frozen();
//! assert!(labels.is_read_only());
//! # Ok::<(), Error>(())
//! ```
//!
//! # Key Ranges
//!
//! The [`metadata`] module exposes the resolved key list of a type and two
//! range helpers:
//!
//! ```
//! use enumerated::{Enumerated, KeyExt, metadata};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
//! enum Level { Trace, Debug, Info, Warn, Error }
//!
//! let loud: Vec<_> = metadata::range(Level::Info, Level::Error).collect();
//! assert_eq!(loud, [Level::Info, Level::Warn, Level::Error]);
//! assert!(Level::Warn.is_in_range(Level::Info, Level::Error));
//! ```
//!
//! `range` walks translated indices, while `is_in_range` compares raw
//! discriminants. The two agree for well-ordered bounds; with reversed bounds
//! both report nothing in range.
//!
//! # Vacant Slots
//!
//! [`EnumeratedArray::iter`] yields every slot. [`EnumeratedArray::occupied`]
//! skips slots whose value is vacant according to [`Slot`], which for
//! `Option<T>` means `None`:
//!
//! ```
//! use enumerated::{Enumerated, EnumeratedArray};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
//! enum Hand { Left, Right }
//!
//! let mut held = EnumeratedArray::<Hand, Option<&str>>::new().unwrap();
//! held.set(Hand::Right, Some("torch")).unwrap();
//! assert_eq!(held.occupied().count(), 1);
//! assert_eq!(held.iter().count(), 2);
//! ```
//!
//! # Features
//!
//! - `derive` (default): re-exports `#[derive(Enumerated)]`
//! - `std`: builds the runtime against `std` instead of `core` + `alloc`

#![cfg_attr(not(feature = "std"), no_std)]

pub use enumerated_core::*;

#[cfg(feature = "derive")]
pub use enumerated_macros::Enumerated;
