//! Per-type enumeration metadata: sorted keys, contiguity and offset.
//!
//! Resolution never fails. A non-contiguous domain simply reports
//! `is_contiguous() == false` and the caller decides whether that is fatal.

use alloc::{boxed::Box, vec::Vec};
use core::{any::type_name, fmt, iter::FusedIterator};

use crate::key::Enumerated;

/// The resolved shape of a key type.
///
/// Built once per type by [`EnumMetadata::resolve`] and cached for the life
/// of the process by the type's [`Enumerated::metadata`] implementation.
pub struct EnumMetadata<K> {
    keys: Box<[K]>,
    contiguous: bool,
    offset: i128,
}

impl<K: Enumerated> EnumMetadata<K> {
    /// Compute the metadata for `K` from its variant list.
    ///
    /// Keys are sorted ascending by discriminant. Empty and single-key domains
    /// are contiguous; an empty domain has offset 0.
    pub fn resolve() -> Self {
        let mut keys: Vec<K> = K::VARIANTS.to_vec();
        keys.sort_by_key(|key| key.discriminant());
        keys.dedup_by_key(|key| key.discriminant());

        let contiguous = keys
            .windows(2)
            .all(|pair| pair[0].discriminant().abs_diff(pair[1].discriminant()) == 1);
        let offset = keys.first().map_or(0, |key| key.discriminant());

        tracing::debug!(
            key_type = type_name::<K>(),
            count = keys.len(),
            offset,
            contiguous,
            "Resolved enumeration metadata"
        );

        Self {
            keys: keys.into_boxed_slice(),
            contiguous,
            offset,
        }
    }

    /// All keys, sorted ascending by discriminant.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.contiguous
    }

    /// Discriminant of the smallest key.
    #[inline]
    pub fn offset(&self) -> i128 {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key stored at slot `index`, if any.
    #[inline]
    pub fn key_at(&self, index: usize) -> Option<K> {
        self.keys.get(index).copied()
    }

    /// Slot of `key`: `discriminant(key) - offset`.
    ///
    /// This is the hot path and does not re-check contiguity. For a
    /// non-contiguous domain the result may exceed `len()`, and saturates at
    /// `usize::MAX` when the distance does not fit.
    #[inline]
    pub fn index_of(&self, key: K) -> usize {
        usize::try_from(key.discriminant().abs_diff(self.offset)).unwrap_or(usize::MAX)
    }

    /// Keys whose index lies in `index_of(start)..=index_of(end)`, ascending.
    ///
    /// Empty when `end` precedes `start`. The iterator borrows the cached key
    /// list, so calling `range` again restarts from `start`.
    pub fn range(&self, start: K, end: K) -> KeyRange<'_, K> {
        let front = self.index_of(start).min(self.keys.len());
        let back = self
            .index_of(end)
            .saturating_add(1)
            .min(self.keys.len())
            .max(front);
        KeyRange {
            keys: &self.keys,
            front,
            back,
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for EnumMetadata<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumMetadata")
            .field("keys", &self.keys)
            .field("contiguous", &self.contiguous)
            .field("offset", &self.offset)
            .finish()
    }
}

/// Iterator over a run of keys, produced by [`EnumMetadata::range`].
#[derive(Debug, Clone)]
pub struct KeyRange<'a, K> {
    keys: &'a [K],
    front: usize,
    back: usize,
}

impl<K: Copy> Iterator for KeyRange<'_, K> {
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<K> {
        if self.front == self.back {
            return None;
        }
        let key = self.keys[self.front];
        self.front += 1;
        Some(key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<K: Copy> DoubleEndedIterator for KeyRange<'_, K> {
    #[inline]
    fn next_back(&mut self) -> Option<K> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.keys[self.back])
    }
}

impl<K: Copy> ExactSizeIterator for KeyRange<'_, K> {}

impl<K: Copy> FusedIterator for KeyRange<'_, K> {}

// ============================================================================
// Free functions over a key type
// ============================================================================

/// All keys of `K`, sorted ascending by discriminant.
pub fn keys<K: Enumerated>() -> &'static [K] {
    K::metadata().keys()
}

pub fn is_contiguous<K: Enumerated>() -> bool {
    K::metadata().is_contiguous()
}

/// Discriminant of the smallest key of `K`.
pub fn offset<K: Enumerated>() -> i128 {
    K::metadata().offset()
}

/// Zero-based slot of `key`.
///
/// Valid only when `K` is contiguous; containers check this once at
/// construction instead of on every call.
#[inline]
pub fn to_index<K: Enumerated>(key: K) -> usize {
    K::metadata().index_of(key)
}

/// Keys from `start` to `end` inclusive, in index order.
pub fn range<K: Enumerated>(start: K, end: K) -> KeyRange<'static, K> {
    K::metadata().range(start, end)
}

/// Whether `start <= value <= end` by raw discriminant.
///
/// Unlike [`range`], which compares translated indices, this compares the
/// underlying integers directly and is not wrap-aware: with `start > end`
/// it is false for every value.
#[inline]
pub fn is_in_range<K: Enumerated>(value: K, start: K, end: K) -> bool {
    let value = value.discriminant();
    start.discriminant() <= value && value <= end.discriminant()
}

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;
