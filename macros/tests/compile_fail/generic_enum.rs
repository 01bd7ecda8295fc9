//! Test: Generic enums should produce an error.
#![allow(dead_code)]

use enumerated::Enumerated;

#[derive(Clone, Copy, Enumerated)]
enum Tagged<const N: usize> {
    A,
    B,
}

fn main() {}
