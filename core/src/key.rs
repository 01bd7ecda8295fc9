//! The key trait and its companion extension methods.

use crate::metadata::{self, EnumMetadata};

/// A closed, ordered set of integer-backed symbols usable as array keys.
///
/// Implementations are normally generated by `#[derive(Enumerated)]` or by
/// [`impl_enumerated!`](crate::impl_enumerated). Both cache the resolved
/// [`EnumMetadata`] in a per-type static, so every call to
/// [`Enumerated::metadata`] returns the same shared value.
///
/// The cache is a `OnceBox`: when several threads race on the first access,
/// each may run [`EnumMetadata::resolve`] (and emit its `debug!` event), but
/// exactly one result is published and the others are dropped.
///
/// # Example
///
/// ```
/// use enumerated_core::{Enumerated, impl_enumerated};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Phase {
///     Idle = 2,
///     Running = 3,
///     Done = 4,
/// }
///
/// impl_enumerated!(Phase => [Phase::Idle, Phase::Running, Phase::Done]);
///
/// assert!(Phase::metadata().is_contiguous());
/// assert_eq!(Phase::metadata().offset(), 2);
/// ```
pub trait Enumerated: Copy + Send + Sync + 'static {
    /// Every defined value of the type, in any order.
    const VARIANTS: &'static [Self];

    /// The underlying integer value of `self`.
    ///
    /// `i128` holds every `repr` up to `i128`; `repr(u128)` values above
    /// `i128::MAX` are not representable.
    fn discriminant(self) -> i128;

    /// Metadata for this key type, resolved on first use and shared after.
    fn metadata() -> &'static EnumMetadata<Self>;
}

/// Index and range helpers available on every [`Enumerated`] key.
pub trait KeyExt: Enumerated {
    /// Zero-based slot of `self`: `discriminant - offset`.
    ///
    /// Only meaningful for contiguous key types; see [`metadata::to_index`].
    fn to_index(self) -> usize;

    /// Whether `start <= self <= end`, compared by raw discriminant.
    ///
    /// See [`metadata::is_in_range`] for how this differs from
    /// [`EnumMetadata::range`].
    fn is_in_range(self, start: Self, end: Self) -> bool;
}

impl<K: Enumerated> KeyExt for K {
    #[inline]
    fn to_index(self) -> usize {
        metadata::to_index(self)
    }

    #[inline]
    fn is_in_range(self, start: Self, end: Self) -> bool {
        metadata::is_in_range(self, start, end)
    }
}

/// Implement [`Enumerated`] for a fieldless enum without the derive macro.
///
/// Every variant must be listed; leaving one out is a compile error. The
/// generated impl stores the metadata in a static local to the impl, so each
/// key type publishes exactly one [`EnumMetadata`] for the life of the process.
///
/// ```
/// use enumerated_core::{EnumeratedArray, impl_enumerated};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Light { Red, Amber, Green }
///
/// impl_enumerated!(Light => [Light::Red, Light::Amber, Light::Green]);
///
/// let durations = EnumeratedArray::<Light, u32>::with_default(30).unwrap();
/// assert_eq!(durations[Light::Amber], 30);
/// ```
///
/// A missing variant is rejected at compile time:
///
/// ```compile_fail
/// use enumerated_core::impl_enumerated;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Light { Red, Amber, Green }
///
/// impl_enumerated!(Light => [Light::Red, Light::Amber]);
/// ```
#[macro_export]
macro_rules! impl_enumerated {
    ($ty:ty => [$($variant:path),* $(,)?]) => {
        // Fails to compile unless the list covers every variant.
        const _: fn($ty) = |key| match key {
            $($variant => {})*
        };

        impl $crate::Enumerated for $ty {
            const VARIANTS: &'static [Self] = &[$($variant),*];

            #[inline]
            fn discriminant(self) -> i128 {
                self as i128
            }

            fn metadata() -> &'static $crate::EnumMetadata<Self> {
                static METADATA: $crate::shim::OnceBox<$crate::EnumMetadata<$ty>> =
                    $crate::shim::OnceBox::new();
                METADATA.get_or_init(|| $crate::shim::Box::new($crate::EnumMetadata::resolve()))
            }
        }
    };
}
