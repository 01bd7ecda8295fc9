//! Tests for key metadata resolution and the free key functions.

use super::*;
use crate::{KeyExt, impl_enumerated, test_utils::init_test_logging};
use alloc::vec::Vec;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signed {
    NegativeOne = -1,
    Zero = 0,
    One = 1,
}

impl_enumerated!(Signed => [Signed::NegativeOne, Signed::Zero, Signed::One]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gapped {
    NegativeOne = -1,
    One = 1,
}

impl_enumerated!(Gapped => [Gapped::NegativeOne, Gapped::One]);

// Variants listed out of order on purpose: resolution must sort them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Shuffled {
    C = 12,
    A = 10,
    D = 13,
    B = 11,
}

impl_enumerated!(Shuffled => [Shuffled::C, Shuffled::A, Shuffled::D, Shuffled::B]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lonely {
    Only = 7,
}

impl_enumerated!(Lonely => [Lonely::Only]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nothing {}

impl crate::Enumerated for Nothing {
    const VARIANTS: &'static [Self] = &[];

    fn discriminant(self) -> i128 {
        match self {}
    }

    fn metadata() -> &'static EnumMetadata<Self> {
        static METADATA: crate::shim::OnceBox<EnumMetadata<Nothing>> =
            crate::shim::OnceBox::new();
        METADATA.get_or_init(|| crate::shim::Box::new(EnumMetadata::resolve()))
    }
}

#[test]
fn test_keys_sorted_by_discriminant() {
    init_test_logging();
    assert_eq!(
        keys::<Signed>(),
        &[Signed::NegativeOne, Signed::Zero, Signed::One]
    );
    assert_eq!(
        keys::<Shuffled>(),
        &[Shuffled::A, Shuffled::B, Shuffled::C, Shuffled::D]
    );
}

#[test]
fn test_contiguity() {
    assert!(is_contiguous::<Signed>());
    assert!(is_contiguous::<Shuffled>());
    assert!(!is_contiguous::<Gapped>());
}

#[test]
fn test_trivial_domains_are_contiguous() {
    assert!(is_contiguous::<Lonely>());
    assert_eq!(offset::<Lonely>(), 7);
    assert_eq!(Lonely::Only.to_index(), 0);

    assert!(is_contiguous::<Nothing>());
    assert!(Nothing::metadata().is_empty());
    assert_eq!(offset::<Nothing>(), 0);
}

#[test]
fn test_offset_is_smallest_discriminant() {
    assert_eq!(offset::<Signed>(), -1);
    assert_eq!(offset::<Shuffled>(), 10);
    assert_eq!(offset::<Gapped>(), -1);
}

#[test]
fn test_metadata_is_memoized() {
    let first: *const EnumMetadata<Signed> = Signed::metadata();
    let second: *const EnumMetadata<Signed> = Signed::metadata();
    assert_eq!(first, second);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contended {
    First,
    Second,
}

impl_enumerated!(Contended => [Contended::First, Contended::Second]);

#[test]
fn test_concurrent_first_access_shares_one_value() {
    // `Contended` is not touched by any other test, so the threads race on
    // the very first resolution.
    let barrier = std::sync::Barrier::new(8);
    let addresses: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    Contended::metadata() as *const EnumMetadata<Contended> as usize
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    let published = Contended::metadata() as *const EnumMetadata<Contended> as usize;
    assert!(addresses.iter().all(|&address| address == published));
    assert_eq!(keys::<Contended>(), &[Contended::First, Contended::Second]);
}

#[test]
fn test_to_index() {
    assert_eq!(to_index(Signed::NegativeOne), 0);
    assert_eq!(to_index(Signed::Zero), 1);
    assert_eq!(to_index(Signed::One), 2);
    assert_eq!(Shuffled::C.to_index(), 2);
}

#[test]
fn test_index_round_trip() {
    let metadata = Shuffled::metadata();
    let mut seen = Vec::new();
    for &key in metadata.keys() {
        let index = key.to_index();
        assert!(index < metadata.len());
        assert_eq!(metadata.key_at(index), Some(key));
        assert!(!seen.contains(&index));
        seen.push(index);
    }
    assert_eq!(metadata.key_at(metadata.len()), None);
}

#[test]
fn test_range_inclusive() {
    let upper: Vec<_> = range(Signed::Zero, Signed::One).collect();
    assert_eq!(upper, [Signed::Zero, Signed::One]);

    let all: Vec<_> = range(Signed::NegativeOne, Signed::One).collect();
    assert_eq!(all, keys::<Signed>());

    let single: Vec<_> = range(Shuffled::B, Shuffled::B).collect();
    assert_eq!(single, [Shuffled::B]);
}

#[test]
fn test_range_reversed_bounds_is_empty() {
    let mut empty = range(Signed::One, Signed::NegativeOne);
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.next(), None);
}

#[test]
fn test_range_is_restartable_and_double_ended() {
    let run = range(Shuffled::A, Shuffled::C);
    assert_eq!(run.len(), 3);

    let forward: Vec<_> = run.clone().collect();
    let backward: Vec<_> = run.rev().collect();
    assert_eq!(forward, [Shuffled::A, Shuffled::B, Shuffled::C]);
    assert_eq!(backward, [Shuffled::C, Shuffled::B, Shuffled::A]);

    // A second call starts over from the cached key list.
    assert_eq!(range(Shuffled::A, Shuffled::C).count(), 3);
}

#[test]
fn test_range_over_gapped_domain_is_clamped() {
    // Index translation is not meaningful here, but must not read past the keys.
    let gapped: Vec<_> = range(Gapped::NegativeOne, Gapped::One).collect();
    assert_eq!(gapped, [Gapped::NegativeOne, Gapped::One]);
}

#[test]
fn test_is_in_range() {
    assert!(Signed::Zero.is_in_range(Signed::Zero, Signed::One));
    assert!(!Signed::Zero.is_in_range(Signed::One, Signed::One));
    assert!(!Signed::Zero.is_in_range(Signed::NegativeOne, Signed::NegativeOne));
    assert!(is_in_range(Signed::One, Signed::NegativeOne, Signed::One));
}

#[test]
fn test_is_in_range_compares_raw_discriminants() {
    // Reversed bounds exclude everything, even the bounds themselves.
    assert!(!Signed::Zero.is_in_range(Signed::One, Signed::NegativeOne));
    assert!(!Signed::One.is_in_range(Signed::One, Signed::NegativeOne));

    // Holes in a gapped domain still count as "between" the bounds.
    assert!(Gapped::One.is_in_range(Gapped::NegativeOne, Gapped::One));
}

#[test]
fn test_debug_output() {
    let rendered = alloc::format!("{:?}", Signed::metadata());
    assert_eq!(
        rendered,
        "EnumMetadata { keys: [NegativeOne, Zero, One], contiguous: true, offset: -1 }"
    );
}
