//! Test: Unknown keys in `#[enumerated(...)]` should produce an error.
#![allow(dead_code)]

use enumerated::Enumerated;

#[derive(Clone, Copy, Enumerated)]
#[enumerated(krate = enumerated)]
enum Axis {
    X,
    Y,
}

fn main() {}
