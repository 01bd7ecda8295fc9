//! Error type shared by every fallible operation in the crate.
//!
//! Errors are returned to the caller at the point of the offending call and
//! are never logged or swallowed internally.

use thiserror::Error;

/// Errors raised by [`EnumeratedArray`](crate::EnumeratedArray).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The key type's discriminants do not form a unit-step run.
    ///
    /// Raised at construction; no partial container is produced.
    #[error("key type `{type_name}` is not contiguous and cannot index an array")]
    NonContiguousKeyDomain { type_name: &'static str },

    /// A write was attempted after the container was frozen.
    #[error("collection is read-only")]
    ReadOnlyViolation,

    /// A positional access fell outside `[0, count)`.
    #[error("index {index} is out of range for a collection of {count} slots")]
    IndexOutOfRange { index: usize, count: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

static_assertions::assert_impl_all!(Error: Send, Sync, Clone, core::error::Error);
