//! A fixed-length array addressed by the variants of an [`Enumerated`] key.
//!
//! Slot `i` always holds the value for `keys()[i]`. The length is fixed at
//! construction to the number of keys and never changes.
//!
//! The container is either mutable (initial) or frozen (terminal). Reads work
//! in both states; every write fails with [`Error::ReadOnlyViolation`] once
//! [`freeze`](EnumeratedArray::freeze) has been called.
//!
//! No internal locking is performed: a shared array is safe to read from many
//! threads, but writers must be single or externally synchronized.

use alloc::{boxed::Box, vec, vec::Vec};
use core::{any::type_name, fmt, iter::FusedIterator, ops::Index, slice};

use crate::{
    error::{Error, Result},
    key::Enumerated,
    metadata::EnumMetadata,
    slot::Slot,
};

/// Array-backed map from every key of `K` to a `V`.
///
/// ```
/// use enumerated_core::{EnumeratedArray, Error, impl_enumerated};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Signed { NegativeOne = -1, Zero = 0, One = 1 }
/// impl_enumerated!(Signed => [Signed::NegativeOne, Signed::Zero, Signed::One]);
///
/// let mut signs = EnumeratedArray::<Signed, i32>::with_entries([
///     (Signed::NegativeOne, -1),
///     (Signed::Zero, 0),
///     (Signed::One, 1),
/// ])?;
/// assert_eq!(signs.len(), 3);
/// assert_eq!(signs.key_of(&0), Some(Signed::Zero));
///
/// signs.freeze();
/// assert_eq!(signs.set(Signed::One, 5), Err(Error::ReadOnlyViolation));
/// # Ok::<(), Error>(())
/// ```
pub struct EnumeratedArray<K: Enumerated, V> {
    values: Box<[V]>,
    read_only: bool,
    metadata: &'static EnumMetadata<K>,
}

/// Metadata for `K`, or an error when `K` cannot index an array.
fn contiguous_metadata<K: Enumerated>() -> Result<&'static EnumMetadata<K>> {
    let metadata = K::metadata();
    if !metadata.is_contiguous() {
        return Err(Error::NonContiguousKeyDomain {
            type_name: type_name::<K>(),
        });
    }
    Ok(metadata)
}

impl<K: Enumerated, V> EnumeratedArray<K, V> {
    /// Create an array with every slot set to `V::default()`.
    pub fn new() -> Result<Self>
    where
        V: Default,
    {
        Self::from_fn(|_| V::default())
    }

    /// Create an array with every slot set to a clone of `value`.
    pub fn with_default(value: V) -> Result<Self>
    where
        V: Clone,
    {
        let metadata = contiguous_metadata::<K>()?;
        Ok(Self {
            values: vec![value; metadata.len()].into_boxed_slice(),
            read_only: false,
            metadata,
        })
    }

    /// Create an array by calling `f` once per key, in key order.
    pub fn from_fn(mut f: impl FnMut(K) -> V) -> Result<Self> {
        let metadata = contiguous_metadata::<K>()?;
        let values = metadata.keys().iter().map(|&key| f(key)).collect();
        Ok(Self {
            values,
            read_only: false,
            metadata,
        })
    }

    /// Create a default-filled array, then assign each `(key, value)` in order.
    ///
    /// Later entries for the same key overwrite earlier ones.
    pub fn with_entries(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        V: Default,
    {
        let mut array = Self::new()?;
        for (key, value) in entries {
            array.set(key, value)?;
        }
        Ok(array)
    }

    // ------------------------------------------------------------------------
    // Shape and state
    // ------------------------------------------------------------------------

    /// All keys, in slot order.
    #[inline]
    pub fn keys(&self) -> &'static [K] {
        self.metadata.keys()
    }

    /// Number of slots, equal to the number of keys of `K`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Make the array permanently read-only. Calling it again is a no-op.
    pub fn freeze(&mut self) -> &mut Self {
        if !self.read_only {
            tracing::trace!(key_type = type_name::<K>(), "Froze enumerated array");
            self.read_only = true;
        }
        self
    }

    /// Owned variant of [`freeze`](Self::freeze) for builder-style chains.
    pub fn into_frozen(mut self) -> Self {
        self.freeze();
        self
    }

    #[inline]
    fn ensure_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(Error::ReadOnlyViolation);
        }
        Ok(())
    }

    #[inline]
    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.values.len() {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.values.len(),
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Access by key
    // ------------------------------------------------------------------------

    #[inline]
    pub fn get(&self, key: K) -> &V {
        &self.values[self.metadata.index_of(key)]
    }

    pub fn get_mut(&mut self, key: K) -> Result<&mut V> {
        self.ensure_writable()?;
        Ok(&mut self.values[self.metadata.index_of(key)])
    }

    pub fn set(&mut self, key: K, value: V) -> Result<()> {
        *self.get_mut(key)? = value;
        Ok(())
    }

    /// Same as [`set`](Self::set), returning `self` so calls can be chained.
    ///
    /// Any previous value for `key` is overwritten.
    pub fn add(&mut self, key: K, value: V) -> Result<&mut Self> {
        self.set(key, value)?;
        Ok(self)
    }

    // ------------------------------------------------------------------------
    // Access by position
    // ------------------------------------------------------------------------

    pub fn get_at(&self, index: usize) -> Result<&V> {
        self.check_bounds(index)?;
        Ok(&self.values[index])
    }

    pub fn get_at_mut(&mut self, index: usize) -> Result<&mut V> {
        self.ensure_writable()?;
        self.check_bounds(index)?;
        Ok(&mut self.values[index])
    }

    pub fn set_at(&mut self, index: usize, value: V) -> Result<()> {
        *self.get_at_mut(index)? = value;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Conversion and iteration
    // ------------------------------------------------------------------------

    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    /// A copy of every slot. Changes to the copy never reach the array.
    pub fn to_array(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.values.to_vec()
    }

    pub fn into_vec(self) -> Vec<V> {
        self.values.into_vec()
    }

    /// Every slot in key order, vacant or not.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, V> {
        self.values.iter()
    }

    /// `(key, value)` pairs in key order.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (K, &V)> + ExactSizeIterator + '_ {
        self.metadata.keys().iter().copied().zip(self.values.iter())
    }

    /// Slots in key order, skipping vacant ones.
    pub fn occupied(&self) -> Occupied<'_, V>
    where
        V: Slot,
    {
        Occupied {
            inner: self.values.iter(),
        }
    }

    // ------------------------------------------------------------------------
    // Reverse lookup
    // ------------------------------------------------------------------------

    /// Position of the first slot equal to `value`.
    ///
    /// A vacant `value` never matches.
    pub fn index_of(&self, value: &V) -> Option<usize>
    where
        V: Slot + PartialEq,
    {
        if value.is_vacant() {
            return None;
        }
        self.values.iter().position(|slot| slot == value)
    }

    /// Key of the first slot equal to `value`.
    pub fn key_of(&self, value: &V) -> Option<K>
    where
        V: Slot + PartialEq,
    {
        self.index_of(value)
            .and_then(|index| self.metadata.key_at(index))
    }
}

impl<K: Enumerated, V> Index<K> for EnumeratedArray<K, V> {
    type Output = V;

    #[inline]
    fn index(&self, key: K) -> &V {
        self.get(key)
    }
}

impl<'a, K: Enumerated, V> IntoIterator for &'a EnumeratedArray<K, V> {
    type Item = &'a V;
    type IntoIter = slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K: Enumerated, V> IntoIterator for EnumeratedArray<K, V> {
    type Item = V;
    type IntoIter = vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<K: Enumerated, V: Clone> Clone for EnumeratedArray<K, V> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            read_only: self.read_only,
            metadata: self.metadata,
        }
    }
}

impl<K: Enumerated, V: PartialEq> PartialEq for EnumeratedArray<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<K: Enumerated, V: Eq> Eq for EnumeratedArray<K, V> {}

impl<K: Enumerated + fmt::Debug, V: fmt::Debug> fmt::Debug for EnumeratedArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

/// Iterator over non-vacant slots, produced by [`EnumeratedArray::occupied`].
#[derive(Debug, Clone)]
pub struct Occupied<'a, V> {
    inner: slice::Iter<'a, V>,
}

impl<'a, V: Slot> Iterator for Occupied<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<&'a V> {
        self.inner.find(|value| !value.is_vacant())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<V: Slot> DoubleEndedIterator for Occupied<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.rfind(|value| !value.is_vacant())
    }
}

impl<V: Slot> FusedIterator for Occupied<'_, V> {}

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;
