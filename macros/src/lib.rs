//! Procedural macros for the `enumerated` crate.
//!
//! - `#[derive(Enumerated)]` - Implement `Enumerated` for a fieldless enum

extern crate proc_macro;

use proc_macro::TokenStream;

mod common;
mod enumerated;

/// Implement `Enumerated` for a fieldless enum.
///
/// The generated impl lists every variant, reads discriminants with an `as`
/// cast, and caches the resolved `EnumMetadata` in a static owned by the impl,
/// so metadata is computed once per type.
///
/// # Example
///
/// ```ignore
/// use enumerated::{Enumerated, EnumeratedArray};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerated)]
/// enum Phase {
///     Idle = 2,
///     Running,
///     Done,
/// }
///
/// let mut ticks = EnumeratedArray::<Phase, u32>::new()?;
/// ticks.set(Phase::Running, 12)?;
/// ```
///
/// The enum must also be `Copy`; the derive does not add it.
///
/// # Crate Path
///
/// Generated code refers to `::enumerated` by default. When the runtime is
/// reached through another path (a re-export, or `enumerated_core` directly),
/// override it:
///
/// ```ignore
/// #[derive(Clone, Copy, Enumerated)]
/// #[enumerated(crate = ::enumerated_core)]
/// enum Axis { X, Y, Z }
/// ```
///
/// # Restrictions
///
/// - Only enums are supported
/// - Variants must not carry fields
/// - Generic parameters are not supported
/// - `#[repr(u128)]` is not supported
#[proc_macro_derive(Enumerated, attributes(enumerated))]
pub fn derive_enumerated(item: TokenStream) -> TokenStream {
    enumerated::derive_enumerated_impl(item)
}
