//! Vacancy of a stored value.
//!
//! [`EnumeratedArray::occupied`](crate::EnumeratedArray::occupied) skips
//! vacant slots, and reverse lookups never match a vacant needle. Types with
//! no natural "absent" state are never vacant.

use alloc::{boxed::Box, string::String, vec::Vec};

/// A value that may represent an empty slot.
pub trait Slot {
    fn is_vacant(&self) -> bool;
}

impl<T> Slot for Option<T> {
    #[inline]
    fn is_vacant(&self) -> bool {
        self.is_none()
    }
}

macro_rules! never_vacant {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Slot for $ty {
                #[inline(always)]
                fn is_vacant(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_vacant!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (),
    String,
);

impl Slot for &str {
    #[inline(always)]
    fn is_vacant(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Slot for Box<T> {
    #[inline(always)]
    fn is_vacant(&self) -> bool {
        false
    }
}

impl<T> Slot for Vec<T> {
    #[inline(always)]
    fn is_vacant(&self) -> bool {
        false
    }
}
