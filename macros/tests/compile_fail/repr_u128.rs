//! Test: `repr(u128)` discriminants may not fit and should produce an error.
#![allow(dead_code)]

use enumerated::Enumerated;

#[derive(Clone, Copy, Enumerated)]
#[repr(u128)]
enum Huge {
    A,
    B,
}

fn main() {}
