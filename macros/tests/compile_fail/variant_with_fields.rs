//! Test: Variants carrying data should produce an error.
#![allow(dead_code)]

use enumerated::Enumerated;

#[derive(Clone, Copy, Enumerated)]
enum Shape {
    Dot,
    Circle(u32),
}

fn main() {}
